mod dimension;
mod estimator;
mod terms;

pub use dimension::{AfterbodyForm, Appendage, BulbousBow, HullDimension, HullForm};
pub use estimator::{
    correlation_allowance, estimate_wetted_surface, CorrelationAllowance, ResistanceComponents,
    ResistanceEstimator,
};
