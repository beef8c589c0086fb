use crate::profile::SMOOTH;
use crate::{CurveTable, HullCurves, HullGeometry};

// Literal presets only: a rejected table is a typo in this file.
fn curve(points: &[(f32, f32)]) -> CurveTable {
    CurveTable::from_points(points, SMOOTH).expect("builtin hull curve must have strictly increasing keys")
}

/// Rectangular barge: flat keel, vertical sides, full sections. All
/// hydrostatics have closed forms, which makes it the reference hull for
/// tests.
pub fn box_hull() -> HullGeometry {
    let flat = [(0.0, 1.0), (1.0, 1.0)];
    HullGeometry {
        length: 20.0,
        beam: 6.0,
        depth: 3.0,
        design_draught: 1.5,
        length_steps: 8,
        beam_steps: 4,
        curve_profiling_steps: 16,
        curves: HullCurves {
            keel: curve(&flat),
            half_breadth: curve(&flat),
            body: curve(&flat),
        },
    }
}

/// Medium cargo vessel with a raked bow, a cut-up stern and bilge rounding.
pub fn cargo_hull() -> HullGeometry {
    HullGeometry {
        length: 120.0,
        beam: 18.0,
        depth: 10.0,
        design_draught: 7.0,
        length_steps: 24,
        beam_steps: 6,
        curve_profiling_steps: 32,
        curves: HullCurves {
            // Keel rises toward both ends.
            keel: curve(&[(0.0, 0.55), (0.08, 0.85), (0.2, 1.0), (0.8, 1.0), (0.93, 0.85), (1.0, 0.5)]),
            half_breadth: curve(&[(0.0, 0.55), (0.15, 0.85), (0.3, 1.0), (0.7, 1.0), (0.85, 0.75), (1.0, 0.1)]),
            // Bilge: full depth out to 60% of the half-breadth, then rounding up.
            body: curve(&[(0.0, 1.0), (0.6, 1.0), (0.85, 0.9), (0.95, 0.7), (1.0, 0.45)]),
        },
    }
}
