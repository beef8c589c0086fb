use serde::{Deserialize, Serialize};

use crate::math::safe_div;

/// Standard gravity (m/s²).
pub const GRAVITY: f32 = 9.81;

/// Density and dynamic viscosity of the surrounding fluid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluidModel {
    /// kg/m³
    pub density: f32,
    /// Dynamic viscosity, Pa·s.
    pub viscosity: f32,
}

impl FluidModel {
    pub const SEA_WATER: Self = Self { density: 1025.0, viscosity: 0.00122 };

    pub fn reynolds(&self, length: f32, speed: f32) -> f32 {
        safe_div(speed * length * self.density, self.viscosity, 0.0)
    }

    pub fn froude(&self, length: f32, speed: f32, g: f32) -> f32 {
        safe_div(speed, (length * g).max(0.0).sqrt(), 0.0)
    }

    /// `0.5·ρ·v²`
    pub fn dynamic_pressure(&self, speed: f32) -> f32 {
        0.5 * self.density * speed * speed
    }

    pub fn force_from_coefficient(&self, cr: f32, surface: f32, speed: f32) -> f32 {
        self.dynamic_pressure(speed) * surface * cr
    }

    pub fn coefficient_from_force(&self, force: f32, surface: f32, speed: f32) -> f32 {
        safe_div(force, self.dynamic_pressure(speed) * surface, 0.0)
    }
}

impl Default for FluidModel {
    fn default() -> Self {
        Self::SEA_WATER
    }
}
