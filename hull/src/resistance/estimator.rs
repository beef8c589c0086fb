use tracing::warn;

use super::terms::*;
use super::{Appendage, HullDimension};
use crate::math::EPSILON;
use crate::FluidModel;

/// Correlation allowance term `R_A`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CorrelationAllowance {
    /// Caller-supplied offset in newtons.
    Fixed(f32),
    /// Holtrop–Mennen `C_A` on the wetted surface.
    HoltropMennen,
}

impl Default for CorrelationAllowance {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

/// Resistance breakdown at one speed, in newtons.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResistanceComponents {
    /// Frictional resistance (ITTC-1957).
    pub rf: f32,
    /// Hull form factor `k1`; friction is scaled by `1 + k1`.
    pub k1: f32,
    /// Wave-making resistance.
    pub rw: f32,
    /// Bulbous-bow pressure resistance.
    pub rb: f32,
    /// Immersed transom resistance. Not modelled: always zero.
    pub rtr: f32,
    /// Appendage resistance.
    pub rapp: f32,
    /// Correlation allowance.
    pub ra: f32,
}

impl ResistanceComponents {
    /// Friction augmented by the form factor, `rf·(1+k1)`.
    pub fn rf_form(&self) -> f32 {
        self.rf * (1.0 + self.k1)
    }

    /// `rt = rf·(1+k1) + rapp + rw + rb + rtr + ra`
    pub fn total(&self) -> f32 {
        self.rf_form() + self.rapp + self.rw + self.rb + self.rtr + self.ra
    }

    pub fn is_finite(&self) -> bool {
        [self.rf, self.k1, self.rw, self.rb, self.rtr, self.rapp, self.ra]
            .iter()
            .all(|x| x.is_finite())
    }
}

/// Holtrop–Mennen total resistance with the ITTC-1957 friction line.
///
/// Inputs are trusted: hull validation happens before profiling. Any
/// intermediate that still turns non-finite falls back to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceEstimator {
    pub fluid: FluidModel,
    pub gravity: f32,
    pub appendages: Vec<Appendage>,
    pub correlation: CorrelationAllowance,
}

impl ResistanceEstimator {
    pub fn new(fluid: FluidModel, gravity: f32) -> Self {
        Self {
            fluid,
            gravity,
            appendages: Vec::new(),
            correlation: CorrelationAllowance::default(),
        }
    }

    pub fn with_appendages(mut self, appendages: Vec<Appendage>) -> Self {
        self.appendages = appendages;
        self
    }

    pub fn with_correlation(mut self, correlation: CorrelationAllowance) -> Self {
        self.correlation = correlation;
        self
    }

    pub fn frictional_coefficient(&self, dim: &HullDimension, speed: f32) -> f32 {
        frictional_coefficient(self.fluid.reynolds(dim.l, speed))
    }

    /// Hull form factor `k1` (the estimator works with `1 + k1`).
    pub fn form_factor(&self, dim: &HullDimension) -> f32 {
        guard("k1", form_factor(dim))
    }

    pub fn estimate(&self, dim: &HullDimension, speed: f32) -> ResistanceComponents {
        let speed = speed.abs();
        if speed <= EPSILON {
            return ResistanceComponents::default();
        }
        let rho = self.fluid.density;
        let g = self.gravity;
        let q_dyn = self.fluid.dynamic_pressure(speed);
        let fn_ = self.fluid.froude(dim.l, speed, g);

        let cf = self.frictional_coefficient(dim, speed);
        let rf = guard("rf", self.fluid.force_from_coefficient(cf, dim.s, speed));
        let k1 = self.form_factor(dim);
        let rw = if fn_ > EPSILON { guard("rw", wave_resistance(dim, fn_, rho, g)) } else { 0.0 };
        let rb = guard("rb", bulb_resistance(dim, speed, rho, g));
        let rtr = transom_resistance(dim, speed, rho, g);
        let rapp = guard("rapp", appendage_resistance(&self.appendages, cf, q_dyn));
        let ra = match self.correlation {
            CorrelationAllowance::Fixed(offset) => offset,
            CorrelationAllowance::HoltropMennen => guard("ra", q_dyn * dim.s * correlation_coefficient(dim)),
        };

        ResistanceComponents { rf, k1, rw, rb, rtr, rapp, ra }
    }

    /// Total resistance `rt` at `speed`.
    pub fn total(&self, dim: &HullDimension, speed: f32) -> f32 {
        self.estimate(dim, speed).total()
    }
}

/// Holtrop–Mennen correlation allowance coefficient `C_A`.
pub fn correlation_allowance(dim: &HullDimension) -> f32 {
    guard("ca", correlation_coefficient(dim))
}

/// Holtrop–Mennen wetted surface regression, for hulls whose surface has
/// not been profiled.
pub fn estimate_wetted_surface(dim: &HullDimension) -> f32 {
    guard("s", wetted_surface(dim))
}

fn guard(term: &'static str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        warn!(term, ?value, "non-finite resistance term replaced with zero");
        0.0
    }
}
