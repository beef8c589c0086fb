mod body;
mod simulation;
mod types;

pub use body::{OceanState, RigidBody};
pub use simulation::HullSimulation;
pub use types::{BlockIndex, BlockState, HullStepDebug, Side, SimulationSettings};
