use thiserror::Error;

/// Configuration and profiling failures. All of them are fatal: the hull is
/// rejected before any table is built from it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HullError {
    #[error("curve has no samples")]
    EmptyCurve,
    #[error("curve keys must be strictly increasing: key[{index}] = {key} follows {previous}")]
    NonMonotonicCurve { index: usize, previous: f32, key: f32 },
    #[error("curve sample {index} is not finite")]
    NonFiniteSample { index: usize },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
    #[error("{name} must be at least {min}, got {value}")]
    InvalidSteps { name: &'static str, value: usize, min: usize },
    #[error("{name} curve must map [0,1] into [0,1]")]
    CurveDomain { name: &'static str },
}
