//! Station-by-station integration of a [`HullGeometry`] into draught-indexed
//! tables.
//!
//! Every query is a pure function of the geometry: calling it twice yields
//! identical tables. Whole-hull tables are built once at setup; section
//! queries can be run on demand for diagnostics.

use tracing::debug;

use crate::math::EPSILON;
use crate::resistance::{BulbousBow, HullDimension, HullForm};
use crate::{CurveBuilder, CurveTable, HullError, HullGeometry, Vec3f};

/// Smoothing used for whole-hull and section tables.
pub const SMOOTH: f32 = 1.0;
/// Smoothing used for block tables, where corners at draught transitions
/// must be preserved exactly.
pub const SHARP: f32 = 0.0;

/// Submerged part of a column reaching `local_depth` below deck, at `draught`
/// above the baseline of a hull `total_depth` deep.
#[inline]
pub fn clip_depth(local_depth: f32, total_depth: f32, draught: f32) -> f32 {
    let local_depth = local_depth.max(0.0);
    (draught - total_depth + local_depth).clamp(0.0, local_depth)
}

/// Part of a segment spanning heights `h0..h1` that lies below `waterline`.
fn wet_fraction(h0: f32, h1: f32, waterline: f32) -> f32 {
    let (lo, hi) = if h0 <= h1 { (h0, h1) } else { (h1, h0) };
    if hi - lo < EPSILON {
        if lo < waterline { 1.0 } else { 0.0 }
    } else {
        ((waterline - lo) / (hi - lo)).clamp(0.0, 1.0)
    }
}

/// Length of a polyline `(offset, height)` lying below `waterline`.
pub fn wetted_length(points: &[(f32, f32)], waterline: f32) -> f32 {
    points
        .windows(2)
        .map(|seg| {
            let (y0, h0) = seg[0];
            let (y1, h1) = seg[1];
            let len = ((y1 - y0).powi(2) + (h1 - h0).powi(2)).sqrt();
            len * wet_fraction(h0, h1, waterline)
        })
        .sum()
}

/// Horizontal extent of a polyline `(offset, height)` lying below
/// `waterline`. Dry stretches in between are not counted.
pub fn wetted_run(points: &[(f32, f32)], waterline: f32) -> f32 {
    points
        .windows(2)
        .map(|seg| (seg[1].0 - seg[0].0).abs() * wet_fraction(seg[0].1, seg[1].1, waterline))
        .sum()
}

/// Draught-indexed tables of the whole hull.
#[derive(Debug, Clone, PartialEq)]
pub struct HullProfile {
    pub depth: f32,
    pub design_draught: f32,
    pub volume: CurveTable,
    pub wetted_surface: CurveTable,
    pub waterplane_area: CurveTable,
    pub midship_area: CurveTable,
    pub beam: CurveTable,
    pub waterline_length: CurveTable,
    /// Longitudinal centre of buoyancy, percent of length forward of midship.
    pub lcb: CurveTable,
}

impl HullProfile {
    pub fn build(geometry: &HullGeometry) -> Result<Self, HullError> {
        ProfileBuilder::new(geometry)?.hull_profile()
    }

    /// Hydrostatic snapshot at `draught` for the resistance estimator.
    pub fn dimension(&self, draught: f32, form: &HullForm) -> HullDimension {
        let t = draught.clamp(0.0, self.depth);
        HullDimension {
            l: self.waterline_length.evaluate(t),
            b: self.beam.evaluate(t),
            t,
            s: self.wetted_surface.evaluate(t),
            v: self.volume.evaluate(t),
            am: self.midship_area.evaluate(t),
            aw: self.waterplane_area.evaluate(t),
            lcb: form.lcb.unwrap_or_else(|| self.lcb.evaluate(t)),
            afterbody: form.afterbody,
            bulb: form.bulbous_bow.then(|| BulbousBow::estimate(t)),
            transom: (form.transom_area > 0.0).then_some(form.transom_area),
        }
    }

    /// Draught at which the hull displaces `volume`; clamps to the table range.
    pub fn draught_for_volume(&self, volume: f32) -> f32 {
        if volume <= self.volume.first_value() {
            return 0.0;
        }
        if volume >= self.volume.last_value() {
            return self.depth;
        }
        let (mut lo, mut hi) = (0.0_f32, self.depth);
        for _ in 0..48 {
            let mid = 0.5 * (lo + hi);
            if self.volume.evaluate(mid) < volume {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        0.5 * (lo + hi)
    }
}

/// Per-block hydrostatic tables, keyed by the block's own submerged depth.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockProfile {
    pub volume: CurveTable,
    pub surface: CurveTable,
    /// Distance from deck to the block's bottom point.
    pub local_depth: f32,
    /// Starboard bottom point in hull-local space; port mirrors X.
    pub bottom: Vec3f,
}

pub struct ProfileBuilder<'a> {
    geometry: &'a HullGeometry,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(geometry: &'a HullGeometry) -> Result<Self, HullError> {
        geometry.validate()?;
        Ok(Self { geometry })
    }

    pub fn geometry(&self) -> &HullGeometry {
        self.geometry
    }

    fn steps(&self) -> usize {
        self.geometry.curve_profiling_steps
    }

    fn draught_sample(&self, k: usize) -> f32 {
        self.geometry.depth * k as f32 / self.steps() as f32
    }

    /// Builds a table over all draught samples `0..=steps`.
    fn by_draught(&self, mut f: impl FnMut(f32) -> f32) -> Result<CurveTable, HullError> {
        let mut b = CurveBuilder::with_capacity(self.steps() + 1);
        for k in 0..=self.steps() {
            let t = self.draught_sample(k);
            b.push(t, f(t));
        }
        b.build(SMOOTH)
    }

    /// Section half-width by transverse parameter `u` at station `v`.
    pub fn body_profile(&self, v: f32) -> Result<CurveTable, HullError> {
        let n = self.steps();
        let mut b = CurveBuilder::with_capacity(n + 1);
        for k in 0..=n {
            let u = k as f32 / n as f32;
            b.push(u, self.geometry.half_width(u, v));
        }
        b.build(SMOOTH)
    }

    /// Section bottom depth below deck by `u` at station `v`.
    pub fn depth_profile(&self, v: f32) -> Result<CurveTable, HullError> {
        let n = self.steps();
        let mut b = CurveBuilder::with_capacity(n + 1);
        for k in 0..=n {
            let u = k as f32 / n as f32;
            b.push(u, self.geometry.local_depth(u, v));
        }
        b.build(SMOOTH)
    }

    /// Submerged area of one side of the section at `v`.
    pub fn half_section_area(&self, v: f32, draught: f32) -> f32 {
        let g = self.geometry;
        let n = self.steps();
        let du = g.half_breadth_at(v) / n as f32;
        (0..n)
            .map(|s| {
                let u = (s as f32 + 0.5) / n as f32;
                du * clip_depth(g.local_depth(u, v), g.depth, draught)
            })
            .sum()
    }

    /// Waterline half-breadth of the section at `v`.
    pub fn half_waterline_breadth(&self, v: f32, draught: f32) -> f32 {
        let g = self.geometry;
        let n = self.steps();
        let du = g.half_breadth_at(v) / n as f32;
        (0..n)
            .filter(|&s| {
                let u = (s as f32 + 0.5) / n as f32;
                clip_depth(g.local_depth(u, v), g.depth, draught) > 0.0
            })
            .count() as f32
            * du
    }

    /// Section boundary `(offset, height above baseline)`: centerline keel out
    /// to the beam extreme, then up the side to deck level.
    fn section_outline(&self, v: f32, u0: f32, u1: f32, close_side: bool) -> Vec<(f32, f32)> {
        let g = self.geometry;
        let n = self.steps();
        let mut pts = Vec::with_capacity(n + 2);
        for k in 0..=n {
            let u = u0 + (u1 - u0) * k as f32 / n as f32;
            pts.push((g.half_width(u, v), g.depth - g.local_depth(u, v)));
        }
        if close_side {
            pts.push((g.half_breadth_at(v), g.depth));
        }
        pts
    }

    /// Wetted girth of one side of the section at `v`.
    pub fn half_girth(&self, v: f32, draught: f32) -> f32 {
        wetted_length(&self.section_outline(v, 0.0, 1.0, true), draught)
    }

    /// Full (both sides) cross-section area by draught at station `v`.
    pub fn cross_section_area(&self, v: f32) -> Result<CurveTable, HullError> {
        self.by_draught(|t| 2.0 * self.half_section_area(v, t))
    }

    /// Full wetted girth by draught at station `v`.
    pub fn section_girth(&self, v: f32) -> Result<CurveTable, HullError> {
        let outline = self.section_outline(v, 0.0, 1.0, true);
        self.by_draught(|t| 2.0 * wetted_length(&outline, t))
    }

    /// Full waterline breadth by draught at station `v`.
    pub fn waterline_breadth(&self, v: f32) -> Result<CurveTable, HullError> {
        self.by_draught(|t| 2.0 * self.half_waterline_breadth(v, t))
    }

    fn sum_stations(&self, draught: f32, f: impl Fn(f32, f32) -> f32) -> f32 {
        let g = self.geometry;
        let dl = g.station_length();
        (0..g.length_steps).map(|i| dl * f(g.station_v(i), draught)).sum()
    }

    pub fn volume(&self) -> Result<CurveTable, HullError> {
        self.by_draught(|t| self.sum_stations(t, |v, t| 2.0 * self.half_section_area(v, t)))
    }

    pub fn wetted_surface(&self) -> Result<CurveTable, HullError> {
        let outlines: Vec<Vec<(f32, f32)>> = (0..self.geometry.length_steps)
            .map(|i| self.section_outline(self.geometry.station_v(i), 0.0, 1.0, true))
            .collect();
        let dl = self.geometry.station_length();
        self.by_draught(|t| outlines.iter().map(|o| 2.0 * dl * wetted_length(o, t)).sum())
    }

    pub fn waterplane_area(&self) -> Result<CurveTable, HullError> {
        self.by_draught(|t| self.sum_stations(t, |v, t| 2.0 * self.half_waterline_breadth(v, t)))
    }

    pub fn midship_area(&self) -> Result<CurveTable, HullError> {
        self.cross_section_area(0.5)
    }

    /// Largest waterline breadth over all stations, by draught.
    pub fn beam(&self) -> Result<CurveTable, HullError> {
        let g = self.geometry;
        self.by_draught(|t| {
            (0..g.length_steps)
                .map(|i| 2.0 * self.half_waterline_breadth(g.station_v(i), t))
                .fold(0.0, f32::max)
        })
    }

    /// Keel profile `(z, height above baseline)` from midship out to `end_v`.
    fn keel_profile(&self, end_v: f32) -> Vec<(f32, f32)> {
        let g = self.geometry;
        let n = self.steps();
        (0..=n)
            .map(|k| {
                let v = 0.5 + (end_v - 0.5) * k as f32 / n as f32;
                (g.station_z(v), g.keel_height(v))
            })
            .collect()
    }

    /// Waterline length by draught: wetted keel run of the forward half plus
    /// that of the aft half. Each half is walked independently, so a keel
    /// that is deepest away from midship still gets its wet ends counted.
    pub fn waterline_length(&self) -> Result<CurveTable, HullError> {
        let fwd = self.keel_profile(1.0);
        let aft = self.keel_profile(0.0);
        self.by_draught(|t| wetted_run(&fwd, t) + wetted_run(&aft, t))
    }

    /// Longitudinal centre of buoyancy by draught, percent of L forward of
    /// midship. Zero while nothing is submerged.
    pub fn longitudinal_center(&self) -> Result<CurveTable, HullError> {
        let g = self.geometry;
        self.by_draught(|t| {
            let (mut moment, mut volume) = (0.0_f32, 0.0_f32);
            for i in 0..g.length_steps {
                let v = g.station_v(i);
                let dv = g.station_length() * 2.0 * self.half_section_area(v, t);
                moment += dv * g.station_z(v);
                volume += dv;
            }
            if volume > EPSILON { 100.0 * moment / volume / g.length } else { 0.0 }
        })
    }

    pub fn hull_profile(&self) -> Result<HullProfile, HullError> {
        let profile = HullProfile {
            depth: self.geometry.depth,
            design_draught: self.geometry.design_draught,
            volume: self.volume()?,
            wetted_surface: self.wetted_surface()?,
            waterplane_area: self.waterplane_area()?,
            midship_area: self.midship_area()?,
            beam: self.beam()?,
            waterline_length: self.waterline_length()?,
            lcb: self.longitudinal_center()?,
        };
        debug!(
            displacement = profile.volume.evaluate(self.geometry.design_draught),
            wetted_surface = profile.wetted_surface.evaluate(self.geometry.design_draught),
            samples = profile.volume.len(),
            "hull profile built"
        );
        Ok(profile)
    }

    /// Tables of block `(i, j)`: station `i`, transverse band `j`.
    ///
    /// Volume is the block footprint times the submerged column height
    /// (prism approximation); surface accumulates the slant length of the
    /// band's boundary below the block waterline.
    pub fn block_profile(&self, i: usize, j: usize) -> Result<BlockProfile, HullError> {
        let g = self.geometry;
        let n = self.steps();
        let v = g.station_v(i);
        let bands = g.beam_steps as f32;
        let (u0, u1) = (j as f32 / bands, (j + 1) as f32 / bands);
        let uc = 0.5 * (u0 + u1);

        let local_depth = g.local_depth(uc, v);
        let bottom = Vec3f::new(g.half_width(uc, v), g.depth - local_depth, g.station_z(v));
        if local_depth < EPSILON {
            return Ok(BlockProfile {
                volume: CurveTable::constant(0.0),
                surface: CurveTable::constant(0.0),
                local_depth: 0.0,
                bottom,
            });
        }

        let footprint = g.station_length() * g.half_breadth_at(v) / bands;
        let outline: Vec<(f32, f32)> = self
            .section_outline(v, u0, u1, j + 1 == g.beam_steps)
            .into_iter()
            .map(|(y, h)| (y, h - bottom.y))
            .collect();

        let mut volume = CurveBuilder::with_capacity(n + 1);
        let mut surface = CurveBuilder::with_capacity(n + 1);
        for k in 0..=n {
            let d = local_depth * k as f32 / n as f32;
            volume.push(d, footprint * d.clamp(0.0, local_depth));
            surface.push(d, g.station_length() * wetted_length(&outline, d));
        }

        Ok(BlockProfile {
            volume: volume.build(SHARP)?,
            surface: surface.build(SHARP)?,
            local_depth,
            bottom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins;

    #[test]
    fn clip_depth_floors_and_saturates() {
        // 10 m hull, column reaching 4 m below deck: bottom sits 6 m above baseline.
        assert_eq!(clip_depth(4.0, 10.0, 5.0), 0.0);
        assert!((clip_depth(4.0, 10.0, 7.5) - 1.5).abs() < 1e-6);
        assert_eq!(clip_depth(4.0, 10.0, 12.0), 4.0);
    }

    #[test]
    fn wetted_length_clips_slanted_segment() {
        let pts = [(0.0, 0.0), (3.0, 4.0)];
        assert_eq!(wetted_length(&pts, 0.0), 0.0);
        assert!((wetted_length(&pts, 2.0) - 2.5).abs() < 1e-5);
        assert!((wetted_length(&pts, 9.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn box_section_is_rectangular() {
        let g = builtins::box_hull();
        let p = ProfileBuilder::new(&g).unwrap();
        let t = 0.5 * g.depth;
        let area = p.cross_section_area(0.5).unwrap().evaluate(t);
        assert!((area - g.beam * t).abs() < 1e-4, "area={area}");
        // bottom plus both sides up to the waterline
        let girth = p.section_girth(0.5).unwrap().evaluate(t);
        assert!((girth - (g.beam + 2.0 * t)).abs() < 1e-3, "girth={girth}");
    }

    #[test]
    fn wetted_run_skips_dry_stretches() {
        // Wet at both ends, dry hump in the middle.
        let pts = [(0.0, 0.0), (2.0, 2.0), (4.0, 0.0)];
        assert!((wetted_run(&pts, 1.0) - 2.0).abs() < 1e-5);
        assert_eq!(wetted_run(&pts, 0.0), 0.0);
        assert!((wetted_run(&pts, 5.0) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn waterline_follows_keel_deepest_at_stern() {
        // Keel height rises linearly from 0 at the stern to 1.5 m at the bow.
        let mut g = builtins::box_hull();
        g.curves.keel = CurveTable::from_points(&[(0.0, 1.0), (1.0, 0.5)], SMOOTH).unwrap();
        let wl = ProfileBuilder::new(&g).unwrap().waterline_length().unwrap();
        for (t, expected) in [(0.0, 0.0), (0.375, 5.0), (0.75, 10.0), (1.125, 15.0), (1.5, 20.0), (3.0, 20.0)] {
            let got = wl.evaluate(t);
            assert!((got - expected).abs() < 1e-3, "T={t}: {got} != {expected}");
        }
    }

    #[test]
    fn keel_rise_shortens_waterline() {
        let g = builtins::cargo_hull();
        let wl = ProfileBuilder::new(&g).unwrap().waterline_length().unwrap();
        let shallow = wl.evaluate(0.5);
        let design = wl.evaluate(g.design_draught);
        assert!(shallow < design, "shallow={shallow} design={design}");
        assert!(design <= g.length + 1e-3);
    }

    #[test]
    fn block_volume_is_prism() {
        let g = builtins::box_hull();
        let p = ProfileBuilder::new(&g).unwrap();
        let block = p.block_profile(0, 0).unwrap();
        let footprint = g.station_length() * 0.5 * g.beam / g.beam_steps as f32;
        assert!((block.local_depth - g.depth).abs() < 1e-5);
        assert!((block.volume.evaluate(1.0) - footprint).abs() < 1e-4);
        assert!((block.volume.evaluate(99.0) - footprint * g.depth).abs() < 1e-3);
        assert_eq!(block.volume.evaluate(0.0), 0.0);
    }

    #[test]
    fn draught_for_volume_inverts_table() {
        let g = builtins::box_hull();
        let profile = HullProfile::build(&g).unwrap();
        let target = g.length * g.beam * 1.2;
        let t = profile.draught_for_volume(target);
        assert!((t - 1.2).abs() < 1e-3, "t={t}");
    }
}
