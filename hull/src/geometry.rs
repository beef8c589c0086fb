use serde::{Deserialize, Serialize};

use crate::{CurveTable, HullError};

/// Normalized parametric hull curves.
///
/// Frame conventions (hull-local):
/// - `v ∈ [0,1]` runs stern → bow; 0.5 is midship.
/// - `u ∈ [0,1]` runs centerline → beam extreme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullCurves {
    /// Keel depth below deck as a fraction of hull depth, by `v`.
    pub keel: CurveTable,
    /// Half-breadth as a fraction of beam/2, by `v`.
    pub half_breadth: CurveTable,
    /// Section bottom depth as a fraction of the local keel depth, by `u`.
    pub body: CurveTable,
}

/// Principal dimensions, parametric curves and discretization of a hull.
/// Read-only once configured; re-profiling is a full rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HullGeometry {
    pub length: f32,
    pub beam: f32,
    pub depth: f32,
    pub design_draught: f32,
    pub length_steps: usize,
    pub beam_steps: usize,
    pub curve_profiling_steps: usize,
    pub curves: HullCurves,
}

impl Default for HullGeometry {
    fn default() -> Self {
        crate::builtins::cargo_hull()
    }
}

impl HullGeometry {
    pub const MIN_LENGTH_STEPS: usize = 2;
    pub const MIN_BEAM_STEPS: usize = 1;
    pub const MIN_PROFILING_STEPS: usize = 2;

    pub fn validate(&self) -> Result<(), HullError> {
        for (name, value) in [
            ("length", self.length),
            ("beam", self.beam),
            ("depth", self.depth),
            ("design_draught", self.design_draught),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(HullError::InvalidDimension { name, value });
            }
        }
        if self.design_draught > self.depth {
            return Err(HullError::InvalidDimension { name: "design_draught", value: self.design_draught });
        }
        for (name, value, min) in [
            ("length_steps", self.length_steps, Self::MIN_LENGTH_STEPS),
            ("beam_steps", self.beam_steps, Self::MIN_BEAM_STEPS),
            ("curve_profiling_steps", self.curve_profiling_steps, Self::MIN_PROFILING_STEPS),
        ] {
            if value < min {
                return Err(HullError::InvalidSteps { name, value, min });
            }
        }
        for (name, curve) in [
            ("keel", &self.curves.keel),
            ("half_breadth", &self.curves.half_breadth),
            ("body", &self.curves.body),
        ] {
            if !unit_domain(curve) {
                return Err(HullError::CurveDomain { name });
            }
        }
        Ok(())
    }

    /// Longitudinal parameter of station `i` (midpoint rule).
    #[inline]
    pub fn station_v(&self, i: usize) -> f32 {
        (i as f32 + 0.5) / self.length_steps as f32
    }

    #[inline]
    pub fn station_length(&self) -> f32 {
        self.length / self.length_steps as f32
    }

    /// Hull-local Z of a longitudinal parameter (0 at midship, + toward the bow).
    #[inline]
    pub fn station_z(&self, v: f32) -> f32 {
        (v - 0.5) * self.length
    }

    pub fn half_breadth_at(&self, v: f32) -> f32 {
        self.curves.half_breadth.evaluate(v).clamp(0.0, 1.0) * self.beam * 0.5
    }

    pub fn keel_depth_at(&self, v: f32) -> f32 {
        self.curves.keel.evaluate(v).clamp(0.0, 1.0) * self.depth
    }

    pub fn body_shape(&self, u: f32) -> f32 {
        self.curves.body.evaluate(u).clamp(0.0, 1.0)
    }

    /// Depth of the hull bottom below deck at `(u, v)`.
    pub fn local_depth(&self, u: f32, v: f32) -> f32 {
        self.keel_depth_at(v) * self.body_shape(u)
    }

    /// Transverse offset of the section boundary at `(u, v)`.
    pub fn half_width(&self, u: f32, v: f32) -> f32 {
        u * self.half_breadth_at(v)
    }

    /// Height of the keel above the baseline at `v`.
    pub fn keel_height(&self, v: f32) -> f32 {
        self.depth - self.local_depth(0.0, v)
    }
}

fn unit_domain(curve: &CurveTable) -> bool {
    const SLACK: f32 = 1e-4;
    let (lo, hi) = curve.key_range();
    lo >= -SLACK
        && hi <= 1.0 + SLACK
        && curve.values().iter().all(|v| (-SLACK..=1.0 + SLACK).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn builtins_validate() {
        builtins::box_hull().validate().unwrap();
        builtins::cargo_hull().validate().unwrap();
    }

    #[test]
    fn rejects_nonpositive_beam() {
        let mut g = builtins::box_hull();
        g.beam = 0.0;
        assert_eq!(g.validate(), Err(HullError::InvalidDimension { name: "beam", value: 0.0 }));
    }

    #[test]
    fn rejects_draught_deeper_than_hull() {
        let mut g = builtins::box_hull();
        g.design_draught = g.depth * 2.0;
        assert!(matches!(g.validate(), Err(HullError::InvalidDimension { name: "design_draught", .. })));
    }

    #[test]
    fn rejects_single_length_step() {
        let mut g = builtins::box_hull();
        g.length_steps = 1;
        assert_eq!(
            g.validate(),
            Err(HullError::InvalidSteps { name: "length_steps", value: 1, min: 2 })
        );
    }

    #[test]
    fn rejects_curve_outside_unit_domain() {
        let mut g = builtins::box_hull();
        g.curves.body = CurveTable::from_points(&[(0.0, 1.0), (2.0, 1.0)], 1.0).unwrap();
        assert_eq!(g.validate(), Err(HullError::CurveDomain { name: "body" }));
    }

    #[test]
    fn stations_are_centered() {
        let g = builtins::box_hull();
        assert!((g.station_v(0) - 0.5 / g.length_steps as f32).abs() < 1e-6);
        let last = g.station_v(g.length_steps - 1);
        assert!((g.station_z(last) + g.station_z(g.station_v(0))).abs() < 1e-4);
    }
}
