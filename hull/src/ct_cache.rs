//! Resistance coefficients indexed by Froude number, one table per
//! translation axis. Built once at setup so the per-frame loop never runs
//! the regression.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resistance::{HullDimension, ResistanceEstimator};
use crate::{CurveBuilder, CurveTable, HullError};

/// Hull-local translation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Fore/aft, local Z. Characteristic length: waterline length.
    Surge,
    /// Athwartships, local X. Characteristic length: beam.
    Sway,
    /// Vertical, local Y. Characteristic length: draught.
    Heave,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Surge, Axis::Sway, Axis::Heave];

    /// The hull as seen by flow along this axis: the characteristic length
    /// takes the place of the waterline length.
    pub fn dimension(self, dim: &HullDimension) -> HullDimension {
        match self {
            Axis::Surge => *dim,
            Axis::Sway => HullDimension {
                l: dim.b,
                b: dim.l,
                am: dim.cm() * dim.l * dim.t,
                lcb: 0.0,
                bulb: None,
                transom: None,
                ..*dim
            },
            Axis::Heave => HullDimension {
                l: dim.t,
                t: dim.l,
                am: dim.aw,
                aw: dim.am,
                lcb: 0.0,
                bulb: None,
                transom: None,
                ..*dim
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceProfile {
    tables: [CurveTable; 3],
    lengths: [f32; 3],
}

impl ResistanceProfile {
    /// Samples the estimator at `steps` speeds up to `max_speed` for each axis
    /// and converts total resistance to a coefficient over the wetted surface.
    pub fn build(
        estimator: &ResistanceEstimator,
        dim: &HullDimension,
        max_speed: f32,
        steps: usize,
    ) -> Result<Self, HullError> {
        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(HullError::InvalidDimension { name: "max_speed", value: max_speed });
        }
        let steps = steps.max(1);
        let (surge, surge_l) = axis_table(estimator, dim, Axis::Surge, max_speed, steps)?;
        let (sway, sway_l) = axis_table(estimator, dim, Axis::Sway, max_speed, steps)?;
        let (heave, heave_l) = axis_table(estimator, dim, Axis::Heave, max_speed, steps)?;
        Ok(Self {
            tables: [surge, sway, heave],
            lengths: [surge_l, sway_l, heave_l],
        })
    }

    /// Resistance coefficient at Froude number `fn_` along `axis`.
    #[inline]
    pub fn coefficient(&self, axis: Axis, fn_: f32) -> f32 {
        self.tables[axis as usize].evaluate(fn_)
    }

    #[inline]
    pub fn characteristic_length(&self, axis: Axis) -> f32 {
        self.lengths[axis as usize]
    }

    pub fn table(&self, axis: Axis) -> &CurveTable {
        &self.tables[axis as usize]
    }
}

fn axis_table(
    estimator: &ResistanceEstimator,
    dim: &HullDimension,
    axis: Axis,
    max_speed: f32,
    steps: usize,
) -> Result<(CurveTable, f32), HullError> {
    let axis_dim = axis.dimension(dim);
    let fluid = &estimator.fluid;
    let mut b = CurveBuilder::with_capacity(steps + 1);
    for k in 1..=steps {
        let speed = max_speed * k as f32 / steps as f32;
        let rt = estimator.total(&axis_dim, speed);
        let cr = fluid.coefficient_from_force(rt, axis_dim.s, speed);
        let fn_ = fluid.froude(axis_dim.l, speed, estimator.gravity);
        if k == 1 {
            // At rest the coefficient of the slowest sample applies.
            b.push(0.0, cr);
        }
        if b.last_key().is_some_and(|last| fn_ <= last) {
            continue;
        }
        b.push(fn_, cr);
    }
    let table = b.build(1.0)?;
    debug!(?axis, length = axis_dim.l, samples = table.len(), "resistance profile built");
    Ok((table, axis_dim.l))
}
