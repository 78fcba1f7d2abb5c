use bevy::prelude::*;

/// Which formula [`CubicBezierCurve::tangent`](super::CubicBezierCurve::tangent) uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum TangentMode {
    /// Exact first derivative of the cubic Bézier polynomial.
    #[default]
    Analytic,
    /// Formula kept for parity with older curve data.
    ///
    /// Known deviation: the last term uses `p2` where `p3` belongs, so the
    /// result only matches [`TangentMode::Analytic`] when `p2 == p3`.
    Legacy,
}

impl TangentMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Analytic => "Analytic",
            Self::Legacy => "Legacy",
        }
    }

    /// Evaluate the tangent of the curve `p0..p3` at `t` with this mode.
    pub fn tangent(self, p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
        match self {
            Self::Analytic => cubic_bezier_derivative(p0, p1, p2, p3, t),
            Self::Legacy => legacy_cubic_bezier_tangent(p0, p1, p2, t),
        }
    }
}

/// Bernstein weights of the four control points at `t`.
///
/// On `[0, 1]` every weight is non-negative and they sum to one.
pub fn bernstein_weights(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    let mt3 = mt2 * mt;

    [mt3, 3.0 * mt2 * t, 3.0 * mt * t2, t3]
}

/// Point on the cubic Bézier `p0..p3` at `t`. `t` is not clamped.
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let [w0, w1, w2, w3] = bernstein_weights(t);

    p0 * w0 + p1 * w1 + p2 * w2 + p3 * w3
}

/// First derivative of the cubic Bézier `p0..p3` at `t`.
pub fn cubic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    (p1 - p0) * 3.0 * mt2 + (p2 - p1) * 6.0 * mt * t + (p3 - p2) * 3.0 * t2
}

/// The legacy tangent formula. `p3` never takes part.
pub fn legacy_cubic_bezier_tangent(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;

    -3.0 * p0 * mt * mt
        + 3.0 * p1 * mt * (1.0 - 3.0 * t)
        + 3.0 * p2 * t * (2.0 - 3.0 * t)
        + 3.0 * p2 * t * t
}
