mod nearest_point;

pub use nearest_point::{
    find_nearest_point_param, nearest_point_param, ClosestPointOnCurve, ClosestPointResult,
    MAX_BISECTION_STEPS, NEAREST_SEED_SAMPLES,
};
