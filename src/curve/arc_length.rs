//! Arc length approximation for Bézier curves.
//!
//! Lengths come from flattening the curve into a polyline, so accuracy grows
//! with the sample count.

use super::CubicBezierCurve;

/// Default number of samples for arc length calculations.
pub const DEFAULT_ARC_LENGTH_SAMPLES: usize = 128;

impl CubicBezierCurve {
    /// Approximate the curve length by summing `samples` straight segments.
    ///
    /// With zero samples this is the chord length from `p0` to `p3`.
    pub fn approximate_length(&self, samples: usize) -> f32 {
        approximate_arc_length(self, samples)
    }
}

/// Approximate the total arc length of a curve between t = 0 and t = 1.
pub fn approximate_arc_length(curve: &CubicBezierCurve, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev_point = curve.evaluate(0.0);

    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let point = curve.evaluate(t);
        length += prev_point.distance(point);
        prev_point = point;
    }

    length
}
