use serde::{Deserialize, Serialize};

use crate::resistance::{CorrelationAllowance, HullForm};
use crate::{FluidModel, Vec3f, GRAVITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Port,
    Starboard,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Port, Side::Starboard];

    /// Sign applied to hull-local X (+X is starboard).
    #[inline]
    pub fn x_sign(self) -> f32 {
        match self {
            Side::Port => -1.0,
            Side::Starboard => 1.0,
        }
    }
}

/// Block address: station along the hull, band across the beam, side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockIndex {
    pub length: usize,
    pub beam: usize,
    pub side: Side,
}

impl BlockIndex {
    pub const fn new(length: usize, beam: usize, side: Side) -> Self {
        Self { length, beam, side }
    }

    /// The same block on the other side of the centerline.
    pub fn mirrored(self) -> Self {
        let side = match self.side {
            Side::Port => Side::Starboard,
            Side::Starboard => Side::Port,
        };
        Self { side, ..self }
    }
}

/// Snapshot of one block after the latest step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockState {
    pub index: BlockIndex,
    /// Bottom point in hull-local space.
    pub bottom: Vec3f,
    /// Submerged depth of the block, `[0, local_depth]`.
    pub depth: f32,
    /// Displaced water mass, kg.
    pub buoyancy: f32,
    /// Hull-local resistance force (before negation).
    pub drag: Vec3f,
}

/// Setup parameters that the geometry does not carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    pub form: HullForm,
    /// Fluid the resistance tables are computed for.
    pub fluid: FluidModel,
    /// Gravity magnitude used for Froude numbers, m/s².
    pub gravity: f32,
    /// Highest speed sampled into the resistance tables, m/s.
    pub max_speed: f32,
    /// Fixed correlation allowance offset, N. Ignored when
    /// `holtrop_correlation` is set.
    pub correlation_offset: f32,
    pub holtrop_correlation: bool,
}

impl SimulationSettings {
    pub fn correlation(&self) -> CorrelationAllowance {
        if self.holtrop_correlation {
            CorrelationAllowance::HoltropMennen
        } else {
            CorrelationAllowance::Fixed(self.correlation_offset)
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            form: HullForm::default(),
            fluid: FluidModel::SEA_WATER,
            gravity: GRAVITY,
            max_speed: 15.0,
            correlation_offset: 0.0,
            holtrop_correlation: false,
        }
    }
}

/// Per-step telemetry, filled by `HullSimulation::step_dbg`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HullStepDebug {
    pub sea_level: f32,
    pub wet_blocks: usize,
    /// Total displaced volume, m³.
    pub displaced_volume: f32,
    /// Sum of buoyancy forces, world space.
    pub buoyancy_force: Vec3f,
    /// Sum of resistance forces applied, world space.
    pub drag_force: Vec3f,
    /// Blocks whose forces were discarded as non-finite.
    pub rejected_blocks: usize,
}
