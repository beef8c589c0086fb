use hull::{
    builtins, BlockIndex, HullSimulation, HullStepDebug, OceanState, Quatf, RigidBody, Side,
    SimulationSettings, Vec3f, GRAVITY,
};

/// Records forces instead of integrating them.
struct ProbeBody {
    position: Vec3f,
    rotation: Quatf,
    velocity: Vec3f,
    angular_velocity: Vec3f,
    force: Vec3f,
    torque: Vec3f,
}

impl ProbeBody {
    fn at(position: Vec3f) -> Self {
        Self {
            position,
            rotation: Quatf::IDENTITY,
            velocity: Vec3f::ZERO,
            angular_velocity: Vec3f::ZERO,
            force: Vec3f::ZERO,
            torque: Vec3f::ZERO,
        }
    }
}

impl RigidBody for ProbeBody {
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
        self.position
    }
    fn add_force_at_position(&mut self, force: Vec3f, point: Vec3f) {
        self.force += force;
        self.torque += (point - self.position).cross(force);
    }
}

const DOWN: Vec3f = Vec3f::new(0.0, -GRAVITY, 0.0);

#[test]
fn forces_stay_finite_across_attitudes_and_speeds() {
    let mut sim = HullSimulation::new(builtins::cargo_hull(), SimulationSettings::default()).unwrap();
    let attitudes = [
        Quatf::IDENTITY,
        Quatf::from_rotation_x(0.3),
        Quatf::from_rotation_z(-0.6),
        Quatf::from_rotation_y(2.0) * Quatf::from_rotation_x(-0.2),
        Quatf::from_rotation_z(std::f32::consts::PI),
    ];
    let velocities = [
        Vec3f::ZERO,
        Vec3f::new(0.0, 0.0, 8.0),
        Vec3f::new(-3.0, 1.0, -12.0),
        Vec3f::new(40.0, -5.0, 0.0),
    ];
    for sea_level in [-20.0, 0.0, 4.0, 7.0, 12.0, 60.0] {
        for rotation in attitudes {
            for velocity in velocities {
                let mut body = ProbeBody::at(Vec3f::ZERO);
                body.rotation = rotation;
                body.velocity = velocity;
                body.angular_velocity = Vec3f::new(0.1, -0.4, 0.05);
                let mut dbg = HullStepDebug::default();
                sim.step_dbg(&mut body, &OceanState::calm(sea_level), DOWN, Some(&mut dbg));
                assert!(body.force.is_finite() && body.torque.is_finite(), "sea {sea_level} rot {rotation:?} vel {velocity:?}");
                assert_eq!(dbg.rejected_blocks, 0);
                assert!(sim.blocks().all(|b| b.depth >= 0.0 && b.buoyancy >= 0.0 && b.drag.is_finite()));
            }
        }
    }
}

#[test]
fn level_hull_has_no_heel_moment() {
    let mut sim = HullSimulation::new(builtins::cargo_hull(), SimulationSettings::default()).unwrap();
    let mut body = ProbeBody::at(Vec3f::ZERO);
    sim.step(&mut body, &OceanState::calm(7.0), DOWN);
    let lift = body.force.y;
    assert!(lift > 0.0);
    // Roll is about the fore/aft axis (Z).
    assert!(body.torque.z.abs() < 1e-4 * lift, "heel moment {}", body.torque.z);

    for i in 0..sim.geometry().length_steps {
        for j in 0..sim.geometry().beam_steps {
            let port = sim.block(BlockIndex::new(i, j, Side::Port));
            let stbd = sim.block(port.index.mirrored());
            assert_eq!(port.depth, stbd.depth);
            assert_eq!(port.buoyancy, stbd.buoyancy);
        }
    }
}

#[test]
fn heeled_hull_rights_itself() {
    let mut sim = HullSimulation::new(builtins::cargo_hull(), SimulationSettings::default()).unwrap();
    let mut body = ProbeBody::at(Vec3f::ZERO);
    // Starboard side down.
    body.rotation = Quatf::from_rotation_z(-0.1);
    sim.step(&mut body, &OceanState::calm(7.0), DOWN);
    assert!(body.torque.z > 0.0, "righting moment {}", body.torque.z);
}

#[test]
fn box_floats_at_its_displacement_draught() {
    let g = builtins::box_hull();
    let draught = 1.2;
    let mass = 1025.0 * g.length * g.beam * draught;
    let mut sim = HullSimulation::new(g, SimulationSettings::default()).unwrap();
    let mut body = ProbeBody::at(Vec3f::ZERO);
    sim.step(&mut body, &OceanState::calm(draught), DOWN);
    let net = body.force.y - mass * GRAVITY;
    assert!(net.abs() < 1e-4 * mass * GRAVITY, "net heave force {net}");
}

#[test]
fn moving_hull_is_slowed_not_pushed() {
    let mut sim = HullSimulation::new(builtins::cargo_hull(), SimulationSettings::default()).unwrap();
    for velocity in [
        Vec3f::new(0.0, 0.0, 6.0),
        Vec3f::new(0.0, 0.0, -6.0),
        Vec3f::new(2.0, 0.0, 0.0),
        Vec3f::new(0.0, -1.0, 0.0),
    ] {
        let mut body = ProbeBody::at(Vec3f::ZERO);
        body.velocity = velocity;
        let mut dbg = HullStepDebug::default();
        sim.step_dbg(&mut body, &OceanState::calm(7.0), DOWN, Some(&mut dbg));
        assert!(dbg.drag_force.dot(velocity) < 0.0, "vel {velocity:?} drag {:?}", dbg.drag_force);
    }
}
