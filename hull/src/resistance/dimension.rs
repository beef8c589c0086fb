use serde::{Deserialize, Serialize};

use crate::math::safe_div;

/// Afterbody shape class used by the form-factor regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AfterbodyForm {
    VShaped,
    #[default]
    Normal,
    UShapedHogner,
}

// Indexed by `AfterbodyForm as usize`.
const STERN_COEFFICIENTS: [f32; 3] = [-10.0, 0.0, 10.0];

impl AfterbodyForm {
    /// Holtrop–Mennen `C_stern`.
    pub fn stern_coefficient(self) -> f32 {
        STERN_COEFFICIENTS[self as usize]
    }
}

/// Bulbous bow: transverse area at the forward perpendicular and height of
/// its centre above the keel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulbousBow {
    pub area: f32,
    pub center_height: f32,
}

impl BulbousBow {
    /// Default bulb for a forward draught: `Abt = π(Tf/2)²/7.7`, centred at
    /// half draught.
    pub fn estimate(forward_draught: f32) -> Self {
        let r = 0.5 * forward_draught;
        Self {
            area: std::f32::consts::PI * r * r / 7.7,
            center_height: 0.5 * forward_draught,
        }
    }
}

/// Wetted appendage (rudder, shaft bracket, bilge keel...) with its own
/// form factor `1 + k2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appendage {
    pub area: f32,
    pub form_factor: f32,
}

/// Shape classification that the geometry does not carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullForm {
    pub afterbody: AfterbodyForm,
    /// LCB override, percent of L forward of midship. Profiled when absent.
    pub lcb: Option<f32>,
    pub bulbous_bow: bool,
    /// Immersed transom area; zero means no transom.
    pub transom_area: f32,
    pub appendages: Vec<Appendage>,
}

/// Point-in-time hydrostatic snapshot fed to the resistance estimator.
/// Derived coefficients are computed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullDimension {
    /// Waterline length (m).
    pub l: f32,
    /// Beam (m).
    pub b: f32,
    /// Draught (m), also used as the forward draught.
    pub t: f32,
    /// Wetted surface (m²).
    pub s: f32,
    /// Displaced volume (m³).
    pub v: f32,
    /// Midship section area (m²).
    pub am: f32,
    /// Waterplane area (m²).
    pub aw: f32,
    /// Longitudinal centre of buoyancy, percent of L forward of midship.
    pub lcb: f32,
    pub afterbody: AfterbodyForm,
    pub bulb: Option<BulbousBow>,
    /// Immersed transom area when the hull has one.
    pub transom: Option<f32>,
}

impl HullDimension {
    pub fn cb(&self) -> f32 {
        safe_div(self.v, self.l * self.b * self.t, 0.0)
    }

    pub fn cp(&self) -> f32 {
        safe_div(self.v, self.l * self.am, 0.0)
    }

    pub fn cm(&self) -> f32 {
        safe_div(self.am, self.b * self.t, 0.0)
    }

    pub fn cwp(&self) -> f32 {
        safe_div(self.aw, self.l * self.b, 0.0)
    }

    pub fn cvp(&self) -> f32 {
        safe_div(self.v, self.aw * self.t, 0.0)
    }

    pub fn forward_draught(&self) -> f32 {
        self.t
    }

    pub fn has_bulb(&self) -> bool {
        self.bulb.is_some()
    }

    pub fn has_transom(&self) -> bool {
        self.transom.is_some()
    }

    pub fn bulb_area(&self) -> f32 {
        self.bulb.map_or(0.0, |b| b.area)
    }

    pub fn transom_area(&self) -> f32 {
        self.transom.unwrap_or(0.0)
    }

    /// True when every length, area and volume is usable as a divisor.
    pub fn is_valid(&self) -> bool {
        [self.l, self.b, self.t, self.s, self.v, self.am, self.aw]
            .iter()
            .all(|x| x.is_finite() && *x > crate::math::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_plain_normal_hull() {
        let form = HullForm::default();
        assert_eq!(form.afterbody, AfterbodyForm::Normal);
        assert_eq!(form.lcb, None);
        assert!(!form.bulbous_bow);
        assert_eq!(form.transom_area, 0.0);
        assert!(form.appendages.is_empty());
    }

    #[test]
    fn stern_coefficient_table() {
        assert_eq!(AfterbodyForm::VShaped.stern_coefficient(), -10.0);
        assert_eq!(AfterbodyForm::Normal.stern_coefficient(), 0.0);
        assert_eq!(AfterbodyForm::UShapedHogner.stern_coefficient(), 10.0);
    }

    #[test]
    fn bulb_estimate_scales_with_draught() {
        let b = BulbousBow::estimate(10.0);
        assert!((b.area - std::f32::consts::PI * 25.0 / 7.7).abs() < 1e-4);
        assert_eq!(b.center_height, 5.0);
    }

    #[test]
    fn box_coefficients_are_unity() {
        let d = HullDimension {
            l: 20.0,
            b: 6.0,
            t: 1.5,
            s: 0.0,
            v: 180.0,
            am: 9.0,
            aw: 120.0,
            lcb: 0.0,
            afterbody: AfterbodyForm::Normal,
            bulb: None,
            transom: None,
        };
        for c in [d.cb(), d.cp(), d.cm(), d.cwp(), d.cvp()] {
            assert!((c - 1.0).abs() < 1e-6, "{c}");
        }
        assert!(!d.is_valid(), "zero wetted surface must not pass");
    }
}
