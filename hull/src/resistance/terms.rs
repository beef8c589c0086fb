//! Holtrop–Mennen (1982) regression terms and the ITTC-1957 friction line.
//!
//! Thresholds, exponents and constants are empirical and reproduced as
//! published. Shape coefficients are clamped into the range where every
//! power stays real.

use super::{Appendage, HullDimension};
use crate::math::{safe_div, EPSILON};

/// Below this Reynolds number the ITTC-1957 line is meaningless.
pub(super) const MIN_REYNOLDS: f32 = 1.0e5;
/// Speed-length exponent `d` of the wave-making term.
pub(super) const WAVE_EXPONENT: f32 = -0.9;

// Prismatic coefficient range kept inside (0.25, 0.95) so `4cp - 1` and
// `0.95 - cp` stay away from zero.
const CP_MIN: f32 = 0.3;
const CP_MAX: f32 = 0.9;

#[inline]
pub(super) fn regression_cp(dim: &HullDimension) -> f32 {
    dim.cp().clamp(CP_MIN, CP_MAX)
}

// ----- Friction -----

pub(super) fn frictional_coefficient(rn: f32) -> f32 {
    let x = rn.max(MIN_REYNOLDS).log10() - 2.0;
    0.075 / (x * x)
}

// ----- Form factor -----

/// Length of run `L_R`.
pub(super) fn run_length(l: f32, cp: f32, lcb: f32) -> f32 {
    let den = 4.0 * cp - 1.0;
    if den.abs() < EPSILON {
        return l * (1.0 - cp);
    }
    l * (1.0 - cp + 0.06 * cp * lcb / den)
}

pub(super) fn c12(t_over_l: f32) -> f32 {
    if t_over_l > 0.05 {
        t_over_l.powf(0.2228446)
    } else if t_over_l > 0.02 {
        48.20 * (t_over_l - 0.02).powf(2.078) + 0.479948
    } else {
        0.479948
    }
}

pub(super) fn c13(dim: &HullDimension) -> f32 {
    1.0 + 0.003 * dim.afterbody.stern_coefficient()
}

/// `k1` of the hull form factor `(1 + k1)`.
pub(super) fn form_factor(dim: &HullDimension) -> f32 {
    let cp = regression_cp(dim);
    let lr = run_length(dim.l, cp, dim.lcb);
    let b_lr = safe_div(dim.b, lr, 0.0);
    let body = 0.93
        + c12(safe_div(dim.t, dim.l, 0.0))
            * b_lr.powf(0.92497)
            * (0.95 - cp).powf(-0.521448)
            * (1.0 - cp + 0.0225 * dim.lcb).max(0.0).powf(0.6906);
    c13(dim) * body - 1.0
}

// ----- Wave making -----

pub(super) fn c7(b_over_l: f32) -> f32 {
    if b_over_l < 0.11 {
        0.229577 * b_over_l.powf(0.33333)
    } else if b_over_l < 0.25 {
        b_over_l
    } else {
        0.5 - 0.0625 / b_over_l
    }
}

/// Half angle of entrance `i_E` in degrees.
pub(super) fn entrance_angle(dim: &HullDimension) -> f32 {
    let cp = regression_cp(dim);
    let lr = run_length(dim.l, cp, dim.lcb);
    let exponent = safe_div(dim.l, dim.b, 0.0).powf(0.80856)
        * (1.0 - dim.cwp()).max(0.0).powf(0.30484)
        * (1.0 - cp - 0.0225 * dim.lcb).max(0.0).powf(0.6367)
        * safe_div(lr, dim.b, 0.0).max(0.0).powf(0.34574)
        * safe_div(100.0 * dim.v, dim.l.powi(3), 0.0).powf(0.16302);
    1.0 + 89.0 * (-exponent).exp()
}

pub(super) fn c1(dim: &HullDimension) -> f32 {
    let ie = entrance_angle(dim);
    2223105.0
        * c7(safe_div(dim.b, dim.l, 0.0)).powf(3.78613)
        * safe_div(dim.t, dim.b, 0.0).powf(1.07961)
        * (90.0 - ie).max(EPSILON).powf(-1.37565)
}

pub(super) fn c3(dim: &HullDimension) -> f32 {
    match dim.bulb {
        Some(bulb) => {
            let den = dim.b * dim.t * (0.31 * bulb.area.sqrt() + dim.forward_draught() - bulb.center_height);
            safe_div(0.56 * bulb.area.powf(1.5), den, 0.0)
        }
        None => 0.0,
    }
}

pub(super) fn c2(dim: &HullDimension) -> f32 {
    (-1.89 * c3(dim).max(0.0).sqrt()).exp()
}

pub(super) fn c5(dim: &HullDimension) -> f32 {
    1.0 - safe_div(0.8 * dim.transom_area(), dim.b * dim.t * dim.cm(), 0.0)
}

pub(super) fn lambda(dim: &HullDimension, cp: f32) -> f32 {
    if safe_div(dim.l, dim.b, 0.0) < 12.0 {
        1.446 * cp - 0.03 * dim.l / dim.b
    } else {
        1.446 * cp - 0.36
    }
}

pub(super) fn c16(cp: f32) -> f32 {
    if cp < 0.8 {
        8.07981 * cp - 13.8673 * cp * cp + 6.984388 * cp * cp * cp
    } else {
        1.73014 - 0.7067 * cp
    }
}

pub(super) fn c15(dim: &HullDimension) -> f32 {
    let slenderness = safe_div(dim.l.powi(3), dim.v, f32::INFINITY);
    if slenderness < 512.0 {
        -1.69385
    } else if slenderness < 1727.0 {
        -1.69385 + (dim.l / dim.v.cbrt() - 8.0) / 2.36
    } else {
        0.0
    }
}

pub(super) fn m1(dim: &HullDimension, cp: f32) -> f32 {
    0.0140407 * safe_div(dim.l, dim.t, 0.0)
        - safe_div(1.75254 * dim.v.cbrt(), dim.l, 0.0)
        - safe_div(4.79323 * dim.b, dim.l, 0.0)
        - c16(cp)
}

pub(super) fn m2(dim: &HullDimension, cp: f32, fn_: f32) -> f32 {
    c15(dim) * cp * cp * (-0.1 * fn_.powi(-2)).exp()
}

/// `R_W`, expects `fn_ > 0`.
pub(super) fn wave_resistance(dim: &HullDimension, fn_: f32, rho: f32, g: f32) -> f32 {
    let cp = regression_cp(dim);
    let exponent = m1(dim, cp) * fn_.powf(WAVE_EXPONENT) + m2(dim, cp, fn_) * (lambda(dim, cp) * fn_.powi(-2)).cos();
    c1(dim) * c2(dim) * c5(dim) * dim.v * rho * g * exponent.exp()
}

// ----- Bulb, transom, appendages, correlation -----

/// `R_B`; zero without a bulbous bow.
pub(super) fn bulb_resistance(dim: &HullDimension, speed: f32, rho: f32, g: f32) -> f32 {
    let Some(bulb) = dim.bulb else {
        return 0.0;
    };
    let tf = dim.forward_draught();
    let root = bulb.area.sqrt();
    let pb = safe_div(0.56 * root, tf - 1.5 * bulb.center_height, 0.0);
    if pb <= EPSILON {
        return 0.0;
    }
    let immersion = g * (tf - bulb.center_height - 0.25 * root) + 0.15 * speed * speed;
    if immersion <= EPSILON {
        return 0.0;
    }
    let fni = speed / immersion.sqrt();
    0.11 * (-3.0 * pb.powi(-2)).exp() * fni.powi(3) * bulb.area.powf(1.5) * rho * g / (1.0 + fni * fni)
}

/// Transom resistance is not modelled; always zero.
pub(super) fn transom_resistance(_dim: &HullDimension, _speed: f32, _rho: f32, _g: f32) -> f32 {
    0.0
}

/// Dynamic pressure times total appendage area times its area-weighted
/// equivalent form factor, on the hull friction line.
pub(super) fn appendage_resistance(appendages: &[Appendage], cf: f32, q_dyn: f32) -> f32 {
    let total: f32 = appendages.iter().map(|a| a.area).sum();
    if total <= EPSILON {
        return 0.0;
    }
    let k2_eq = appendages.iter().map(|a| a.area * a.form_factor).sum::<f32>() / total;
    q_dyn * total * k2_eq * cf
}

/// Model–ship correlation allowance `C_A`.
pub(super) fn correlation_coefficient(dim: &HullDimension) -> f32 {
    let tf_l = safe_div(dim.forward_draught(), dim.l, 0.0);
    let c4 = tf_l.min(0.04);
    0.006 * (dim.l + 100.0).powf(-0.16) - 0.00205
        + 0.003 * (dim.l / 7.5).sqrt() * dim.cb().powi(4) * c2(dim) * (0.04 - c4)
}

/// Regression estimate of the wetted surface of the naked hull.
pub(super) fn wetted_surface(dim: &HullDimension) -> f32 {
    let cm = dim.cm();
    dim.l * (2.0 * dim.t + dim.b) * cm.max(0.0).sqrt()
        * (0.453 + 0.4425 * dim.cb() - 0.2862 * cm - 0.003467 * safe_div(dim.b, dim.t, 0.0) + 0.3696 * dim.cwp())
        + safe_div(2.38 * dim.bulb_area(), dim.cb(), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c7_branches() {
        assert!((c7(0.2) - 0.2).abs() < 1e-7);
        assert!((c7(0.3) - (0.5 - 0.0625 / 0.3)).abs() < 1e-6);
        assert!((c7(0.1) - 0.229577 * 0.1_f32.powf(0.33333)).abs() < 1e-6);
    }

    #[test]
    fn c12_is_continuous_at_lower_split() {
        assert!((c12(0.0201) - 0.479948).abs() < 1e-4);
        assert_eq!(c12(0.01), 0.479948);
    }

    #[test]
    fn c16_branches_at_cp_08() {
        let below = c16(0.79);
        let above = c16(0.81);
        assert!((below - above).abs() < 0.05, "{below} vs {above}");
    }

    #[test]
    fn friction_line_at_reference_reynolds() {
        // ITTC-57 at Rn = 1e9: 0.075 / 7²
        assert!((frictional_coefficient(1.0e9) - 0.075 / 49.0).abs() < 1e-7);
    }

    #[test]
    fn run_length_guards_quarter_cp() {
        assert!((run_length(100.0, 0.25, 3.0) - 75.0).abs() < 1e-4);
    }

    #[test]
    fn appendage_term_uses_weighted_form_factor() {
        let apps = [
            Appendage { area: 10.0, form_factor: 1.5 },
            Appendage { area: 30.0, form_factor: 2.5 },
        ];
        // Σ area·k = 15 + 75 = 90
        let r = appendage_resistance(&apps, 0.002, 1000.0);
        assert!((r - 1000.0 * 90.0 * 0.002).abs() < 1e-3, "{r}");
        assert_eq!(appendage_resistance(&[], 0.002, 1000.0), 0.0);
    }
}
