//! Sampled 1-D lookup tables.
//!
//! A [`CurveTable`] is the interchange format between profiling and the
//! runtime loop: hull tables are indexed by draught, resistance tables by
//! Froude number. Tables are immutable once built; use [`CurveBuilder`] to
//! accumulate samples first.

use serde::{Deserialize, Serialize};

use crate::HullError;

/// Immutable key→value table with Hermite interpolation between samples.
///
/// Keys are strictly increasing. Evaluation outside the sampled range clamps
/// to the boundary value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f32; 2]>", into = "Vec<[f32; 2]>")]
pub struct CurveTable {
    keys: Vec<f32>,
    values: Vec<f32>,
    in_tangents: Vec<f32>,
    out_tangents: Vec<f32>,
}

impl CurveTable {
    /// Builds a table from `(key, value)` samples.
    ///
    /// `smoothing` blends tangents between the segment secants (0.0, exact
    /// piecewise-linear, corners preserved) and monotone averaged slopes
    /// (1.0, C1 smooth). Monotone samples stay monotone for any weight.
    pub fn from_points(points: &[(f32, f32)], smoothing: f32) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::EmptyCurve);
        }
        for (index, &(k, v)) in points.iter().enumerate() {
            if !k.is_finite() || !v.is_finite() {
                return Err(HullError::NonFiniteSample { index });
            }
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].0 <= pair[0].0 {
                return Err(HullError::NonMonotonicCurve {
                    index: index + 1,
                    previous: pair[0].0,
                    key: pair[1].0,
                });
            }
        }

        let keys: Vec<f32> = points.iter().map(|p| p.0).collect();
        let values: Vec<f32> = points.iter().map(|p| p.1).collect();
        let (in_tangents, out_tangents) = smooth_tangents(&keys, &values, smoothing.clamp(0.0, 1.0));
        Ok(Self { keys, values, in_tangents, out_tangents })
    }

    /// Single-sample table that evaluates to `value` everywhere.
    pub fn constant(value: f32) -> Self {
        Self {
            keys: vec![0.0],
            values: vec![value],
            in_tangents: vec![0.0],
            out_tangents: vec![0.0],
        }
    }

    pub fn evaluate(&self, key: f32) -> f32 {
        let n = self.keys.len();
        if n == 1 || key.is_nan() || key <= self.keys[0] {
            return self.values[0];
        }
        if key >= self.keys[n - 1] {
            return self.values[n - 1];
        }

        let i = self.keys.partition_point(|k| *k <= key) - 1;
        let (x0, x1) = (self.keys[i], self.keys[i + 1]);
        let (y0, y1) = (self.values[i], self.values[i + 1]);
        let h = x1 - x0;
        let t = (key - x0) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;
        h00 * y0 + h10 * h * self.out_tangents[i] + h01 * y1 + h11 * h * self.in_tangents[i + 1]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: a table holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[f32] {
        &self.keys
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn key_range(&self) -> (f32, f32) {
        (self.keys[0], self.keys[self.keys.len() - 1])
    }

    pub fn first_value(&self) -> f32 {
        self.values[0]
    }

    pub fn last_value(&self) -> f32 {
        self.values[self.values.len() - 1]
    }

    pub fn max_value(&self) -> f32 {
        self.values.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }
}

impl TryFrom<Vec<[f32; 2]>> for CurveTable {
    type Error = HullError;

    fn try_from(points: Vec<[f32; 2]>) -> Result<Self, Self::Error> {
        let points: Vec<(f32, f32)> = points.into_iter().map(|[k, v]| (k, v)).collect();
        Self::from_points(&points, 1.0)
    }
}

impl From<CurveTable> for Vec<[f32; 2]> {
    fn from(curve: CurveTable) -> Self {
        curve.iter().map(|(k, v)| [k, v]).collect()
    }
}

/// Accumulates samples before freezing them into a [`CurveTable`].
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    points: Vec<(f32, f32)>,
}

impl CurveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { points: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, key: f32, value: f32) {
        self.points.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Key of the most recent sample, if any.
    pub fn last_key(&self) -> Option<f32> {
        self.points.last().map(|p| p.0)
    }

    pub fn build(self, smoothing: f32) -> Result<CurveTable, HullError> {
        CurveTable::from_points(&self.points, smoothing)
    }
}

fn smooth_tangents(keys: &[f32], values: &[f32], weight: f32) -> (Vec<f32>, Vec<f32>) {
    let n = keys.len();
    if n < 2 {
        return (vec![0.0; n], vec![0.0; n]);
    }

    let secants: Vec<f32> = (0..n - 1)
        .map(|k| (values[k + 1] - values[k]) / (keys[k + 1] - keys[k]))
        .collect();

    let mut m = vec![0.0_f32; n];
    m[0] = secants[0];
    m[n - 1] = secants[n - 2];
    for i in 1..n - 1 {
        let (a, b) = (secants[i - 1], secants[i]);
        m[i] = if a * b <= 0.0 { 0.0 } else { 0.5 * (a + b) };
    }

    // Fritsch–Carlson limiter keeps monotone data monotone.
    for k in 0..n - 1 {
        let d = secants[k];
        if d == 0.0 {
            m[k] = 0.0;
            m[k + 1] = 0.0;
            continue;
        }
        let alpha = m[k] / d;
        let beta = m[k + 1] / d;
        let s = alpha * alpha + beta * beta;
        if s > 9.0 {
            let tau = 3.0 / s.sqrt();
            m[k] = tau * alpha * d;
            m[k + 1] = tau * beta * d;
        }
    }

    let lerp = |a: f32, b: f32| a + (b - a) * weight;
    let mut in_t = vec![0.0_f32; n];
    let mut out_t = vec![0.0_f32; n];
    for i in 0..n {
        if i > 0 {
            in_t[i] = lerp(secants[i - 1], m[i]);
        }
        if i < n - 1 {
            out_t[i] = lerp(secants[i], m[i]);
        }
    }
    (in_t, out_t)
}
