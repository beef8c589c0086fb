use tracing::{debug, warn};

use super::body::{OceanState, RigidBody};
use super::types::{BlockIndex, BlockState, HullStepDebug, Side, SimulationSettings};
use crate::ct_cache::{Axis, ResistanceProfile};
use crate::math::{sign, BODY_UP};
use crate::profile::{BlockProfile, HullProfile, ProfileBuilder};
use crate::resistance::{HullDimension, ResistanceEstimator};
use crate::{FluidModel, HullError, HullGeometry, Vec3f};

/// Everything derived from one geometry. Rebuilt as a whole, never patched.
#[derive(Debug, Clone)]
struct HullTables {
    geometry: HullGeometry,
    profile: HullProfile,
    design: HullDimension,
    resistance: ResistanceProfile,
    /// Indexed by `length * beam_steps + beam`; shared by both sides.
    shapes: Vec<BlockProfile>,
}

impl HullTables {
    fn build(geometry: HullGeometry, settings: &SimulationSettings) -> Result<Self, HullError> {
        if !(settings.gravity.is_finite() && settings.gravity > 0.0) {
            return Err(HullError::InvalidDimension { name: "gravity", value: settings.gravity });
        }
        let (profile, design, resistance, shapes) = {
            let builder = ProfileBuilder::new(&geometry)?;
            let profile = builder.hull_profile()?;
            let design = profile.dimension(geometry.design_draught, &settings.form);
            if !design.is_valid() {
                return Err(HullError::InvalidDimension { name: "design_displacement", value: design.v });
            }
            let estimator = ResistanceEstimator::new(settings.fluid, settings.gravity)
                .with_appendages(settings.form.appendages.clone())
                .with_correlation(settings.correlation());
            let resistance =
                ResistanceProfile::build(&estimator, &design, settings.max_speed, geometry.curve_profiling_steps)?;

            let mut shapes = Vec::with_capacity(geometry.length_steps * geometry.beam_steps);
            for i in 0..geometry.length_steps {
                for j in 0..geometry.beam_steps {
                    shapes.push(builder.block_profile(i, j)?);
                }
            }
            (profile, design, resistance, shapes)
        };
        debug!(
            blocks = 2 * shapes.len(),
            cb = design.cb(),
            cp = design.cp(),
            "hull tables built"
        );
        Ok(Self { geometry, profile, design, resistance, shapes })
    }

    fn block_count(&self) -> usize {
        2 * self.shapes.len()
    }
}

/// Per-frame block state as parallel arrays, overwritten every step.
#[derive(Debug, Clone, Default)]
struct BlockFrame {
    depth: Vec<f32>,
    buoyancy: Vec<f32>,
    drag: Vec<Vec3f>,
}

impl BlockFrame {
    fn new(count: usize) -> Self {
        Self {
            depth: vec![0.0; count],
            buoyancy: vec![0.0; count],
            drag: vec![Vec3f::ZERO; count],
        }
    }
}

/// Block-decomposition buoyancy and resistance for one hull.
///
/// The hull is split into `2 × length_steps × beam_steps` blocks. Each step
/// looks up cached tables only; profiling and the resistance regression run
/// in [`HullSimulation::new`] and [`HullSimulation::reconfigure`].
#[derive(Debug, Clone)]
pub struct HullSimulation {
    settings: SimulationSettings,
    tables: HullTables,
    frame: BlockFrame,
}

impl HullSimulation {
    pub fn new(geometry: HullGeometry, settings: SimulationSettings) -> Result<Self, HullError> {
        let tables = HullTables::build(geometry, &settings)?;
        let frame = BlockFrame::new(tables.block_count());
        Ok(Self { settings, tables, frame })
    }

    /// Rebuilds every table for `geometry` into fresh storage and swaps it in.
    /// On error the previous tables stay active.
    pub fn reconfigure(&mut self, geometry: HullGeometry) -> Result<(), HullError> {
        let tables = HullTables::build(geometry, &self.settings)?;
        let frame = BlockFrame::new(tables.block_count());
        self.tables = tables;
        self.frame = frame;
        Ok(())
    }

    pub fn geometry(&self) -> &HullGeometry {
        &self.tables.geometry
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn profile(&self) -> &HullProfile {
        &self.tables.profile
    }

    /// Hydrostatic snapshot at the design draught.
    pub fn design_dimension(&self) -> &HullDimension {
        &self.tables.design
    }

    pub fn resistance(&self) -> &ResistanceProfile {
        &self.tables.resistance
    }

    pub fn block_count(&self) -> usize {
        self.tables.block_count()
    }

    fn slot(&self, index: BlockIndex) -> usize {
        let g = &self.tables.geometry;
        let side = match index.side {
            Side::Port => 0,
            Side::Starboard => 1,
        };
        (side * g.length_steps + index.length) * g.beam_steps + index.beam
    }

    fn index_of(&self, slot: usize) -> BlockIndex {
        let g = &self.tables.geometry;
        let per_side = g.length_steps * g.beam_steps;
        let side = if slot < per_side { Side::Port } else { Side::Starboard };
        let rem = slot % per_side;
        BlockIndex::new(rem / g.beam_steps, rem % g.beam_steps, side)
    }

    fn shape(&self, index: BlockIndex) -> &BlockProfile {
        &self.tables.shapes[index.length * self.tables.geometry.beam_steps + index.beam]
    }

    /// Hull-local bottom point of a block.
    pub fn bottom_point(&self, index: BlockIndex) -> Vec3f {
        let b = self.shape(index).bottom;
        Vec3f::new(b.x * index.side.x_sign(), b.y, b.z)
    }

    /// State of `index` after the latest step. Panics if out of range.
    pub fn block(&self, index: BlockIndex) -> BlockState {
        let slot = self.slot(index);
        BlockState {
            index,
            bottom: self.bottom_point(index),
            depth: self.frame.depth[slot],
            buoyancy: self.frame.buoyancy[slot],
            drag: self.frame.drag[slot],
        }
    }

    pub fn blocks(&self) -> impl Iterator<Item = BlockState> + '_ {
        (0..self.block_count()).map(|slot| self.block(self.index_of(slot)))
    }

    /// Total displaced water mass of the latest step, kg.
    pub fn displaced_mass(&self) -> f32 {
        self.frame.buoyancy.iter().sum()
    }

    /// Resistance of one block along each hull-local axis, signed with the
    /// velocity it opposes.
    fn axis_drag(&self, v_local: Vec3f, surface: f32, fluid: &FluidModel, g: f32) -> Vec3f {
        let r = &self.tables.resistance;
        let along = |axis: Axis, vel: f32| {
            let fn_ = fluid.froude(r.characteristic_length(axis), vel.abs(), g);
            let cr = r.coefficient(axis, fn_);
            fluid.force_from_coefficient(cr, surface, vel) * sign(vel)
        };
        Vec3f::new(
            along(Axis::Sway, v_local.x),
            along(Axis::Heave, v_local.y),
            along(Axis::Surge, v_local.z),
        )
    }

    pub fn step<B: RigidBody>(&mut self, body: &mut B, ocean: &OceanState, gravity: Vec3f) {
        self.step_dbg(body, ocean, gravity, None);
    }

    /// Variant of `step` that fills out an optional debug telemetry struct.
    pub fn step_dbg<B: RigidBody>(
        &mut self,
        body: &mut B,
        ocean: &OceanState,
        gravity: Vec3f,
        dbg: Option<&mut HullStepDebug>,
    ) {
        if !body.is_authoritative() {
            return;
        }

        let g = gravity.length();
        let rho = ocean.fluid.density;
        let rotation = body.rotation();
        let inverse = rotation.inverse();
        let position = body.position();
        let velocity = body.velocity();
        let omega = body.angular_velocity();
        let com = body.world_center_of_mass();
        let up = rotation * BODY_UP;

        let mut telemetry = HullStepDebug { sea_level: ocean.sea_level, ..Default::default() };

        for slot in 0..self.block_count() {
            let index = self.index_of(slot);
            let shape = self.shape(index);
            let bottom = position + rotation * self.bottom_point(index);
            let depth = (ocean.sea_level - bottom.y).clamp(0.0, shape.local_depth);

            let volume = shape.volume.evaluate(depth);
            let buoyancy = rho * volume;
            let point = bottom + up * (0.5 * depth);

            let drag_local = if depth > 0.0 {
                let surface = shape.surface.evaluate(depth);
                let lever = point - com;
                let v_local = inverse * (velocity + omega.cross(lever));
                self.axis_drag(v_local, surface, &ocean.fluid, g)
            } else {
                Vec3f::ZERO
            };

            let buoyancy_force = -gravity * buoyancy;
            let drag_world = rotation * drag_local;
            let finite = buoyancy_force.is_finite() && drag_world.is_finite() && point.is_finite();
            debug_assert!(
                finite,
                "non-finite hull force on {:?}: depth={}, buoyancy={:?}, drag={:?}",
                index, depth, buoyancy_force, drag_world
            );
            if !finite {
                warn!(?index, depth, "non-finite hull force discarded");
                self.frame.depth[slot] = 0.0;
                self.frame.buoyancy[slot] = 0.0;
                self.frame.drag[slot] = Vec3f::ZERO;
                telemetry.rejected_blocks += 1;
                continue;
            }

            body.add_force_at_position(buoyancy_force, point);
            if drag_world != Vec3f::ZERO {
                body.add_force_at_position(-drag_world, point);
            }

            self.frame.depth[slot] = depth;
            self.frame.buoyancy[slot] = buoyancy;
            self.frame.drag[slot] = drag_local;

            if depth > 0.0 {
                telemetry.wet_blocks += 1;
            }
            telemetry.displaced_volume += volume;
            telemetry.buoyancy_force += buoyancy_force;
            telemetry.drag_force -= drag_world;
        }

        if let Some(d) = dbg {
            *d = telemetry;
        }
    }
}
