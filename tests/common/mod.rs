#![allow(dead_code)]

use planegeo::math::Point2;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

pub fn assert_near(a: Point2, b: Point2, tol: f64) {
    assert!(a.metric_distance(&b) <= tol, "{a:?} vs {b:?} (tol {tol})");
}
