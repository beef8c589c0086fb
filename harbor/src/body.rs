use hull::{Quatf, RigidBody, Vec3f};

/// Minimal rigid body for driving a hull without a physics engine.
///
/// Semi-implicit Euler with a diagonal body-frame inertia. `position` is the
/// hull origin (baseline, midship, centerline); the centre of mass sits at
/// `center_of_mass` in hull-local space.
#[derive(Debug, Clone)]
pub struct FloatingBody {
    pub position: Vec3f,
    pub rotation: Quatf,
    /// Velocity of the centre of mass.
    pub velocity: Vec3f,
    pub angular_velocity: Vec3f,
    pub mass: f32,
    pub inertia: Vec3f,
    pub center_of_mass: Vec3f,
    force: Vec3f,
    torque: Vec3f,
}

impl FloatingBody {
    pub fn new(mass: f32, inertia: Vec3f, center_of_mass: Vec3f) -> Self {
        Self {
            position: Vec3f::ZERO,
            rotation: Quatf::IDENTITY,
            velocity: Vec3f::ZERO,
            angular_velocity: Vec3f::ZERO,
            mass,
            inertia,
            center_of_mass,
            force: Vec3f::ZERO,
            torque: Vec3f::ZERO,
        }
    }

    /// Diagonal inertia of a solid box `length × beam × depth` (local Z, X, Y).
    pub fn box_inertia(mass: f32, length: f32, beam: f32, depth: f32) -> Vec3f {
        let k = mass / 12.0;
        Vec3f::new(
            k * (depth * depth + length * length),
            k * (beam * beam + length * length),
            k * (beam * beam + depth * depth),
        )
    }

    pub fn accumulated_force(&self) -> Vec3f {
        self.force
    }

    pub fn accumulated_torque(&self) -> Vec3f {
        self.torque
    }

    /// Roll angle, radians; positive when starboard is up.
    pub fn heel(&self) -> f32 {
        let right = self.rotation * hull::math::BODY_RIGHT;
        right.y.clamp(-1.0, 1.0).asin()
    }

    /// Advances by `dt` under the accumulated forces plus gravity, then
    /// clears the accumulators.
    pub fn integrate(&mut self, dt: f32, gravity: Vec3f) {
        let com = self.world_center_of_mass();

        self.velocity += (self.force / self.mass + gravity) * dt;
        let com = com + self.velocity * dt;

        let local_torque = self.rotation.inverse() * self.torque;
        let local_alpha = local_torque / self.inertia;
        self.angular_velocity += (self.rotation * local_alpha) * dt;
        let spin = Quatf::from_scaled_axis(self.angular_velocity * dt);
        self.rotation = (spin * self.rotation).normalize();

        self.position = com - self.rotation * self.center_of_mass;
        self.force = Vec3f::ZERO;
        self.torque = Vec3f::ZERO;
    }
}

impl RigidBody for FloatingBody {
    fn position(&self) -> Vec3f {
        self.position
    }

    fn rotation(&self) -> Quatf {
        self.rotation
    }

    fn velocity(&self) -> Vec3f {
        self.velocity
    }

    fn angular_velocity(&self) -> Vec3f {
        self.angular_velocity
    }

    fn world_center_of_mass(&self) -> Vec3f {
        self.position + self.rotation * self.center_of_mass
    }

    fn add_force_at_position(&mut self, force: Vec3f, point: Vec3f) {
        self.force += force;
        self.torque += (point - self.world_center_of_mass()).cross(force);
    }
}
