use crate::{FluidModel, Quatf, Vec3f};

/// Rigid body owned by the host physics engine. The simulation only reads
/// its state and adds forces; it never integrates motion.
pub trait RigidBody {
    fn position(&self) -> Vec3f;
    /// Orientation, hull-local → world.
    fn rotation(&self) -> Quatf;
    fn velocity(&self) -> Vec3f;
    /// World-space angular velocity, rad/s.
    fn angular_velocity(&self) -> Vec3f;
    fn world_center_of_mass(&self) -> Vec3f;
    fn add_force_at_position(&mut self, force: Vec3f, point: Vec3f);

    /// Whether this instance owns the body's physics. Steps are skipped
    /// otherwise.
    fn is_authoritative(&self) -> bool {
        true
    }
}

/// Environment sample taken once per step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanState {
    pub fluid: FluidModel,
    /// World-space Y of the sea surface.
    pub sea_level: f32,
}

impl OceanState {
    pub fn calm(sea_level: f32) -> Self {
        Self { fluid: FluidModel::SEA_WATER, sea_level }
    }
}
