//! Hull hydrostatics and resistance for floating bodies.
//!
//! A [`HullGeometry`] (principal dimensions plus three normalized curves) is
//! profiled once into draught-indexed tables. Those feed a Holtrop–Mennen
//! resistance estimate, cached per axis by Froude number, and a per-block
//! buoyancy simulation that pushes forces into a host rigid body.
//!
//! This crate has no engine dependency beyond `bevy_math` vector types; the
//! host supplies the body through [`RigidBody`].

pub mod math;
pub use math::{Quatf, Vec3f};

mod error;
pub use error::HullError;

mod curve;
pub use curve::{CurveBuilder, CurveTable};

mod geometry;
pub use geometry::{HullCurves, HullGeometry};

pub mod profile;
pub use profile::{BlockProfile, HullProfile, ProfileBuilder};

mod fluid;
pub use fluid::{FluidModel, GRAVITY};

pub mod resistance;
pub use resistance::{
    AfterbodyForm, Appendage, BulbousBow, CorrelationAllowance, HullDimension, HullForm,
    ResistanceComponents, ResistanceEstimator,
};

mod ct_cache;
pub use ct_cache::{Axis, ResistanceProfile};

mod buoyancy;
pub use buoyancy::{
    BlockIndex, BlockState, HullSimulation, HullStepDebug, OceanState, RigidBody, Side,
    SimulationSettings,
};

pub mod builtins;
