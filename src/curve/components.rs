use bevy::prelude::*;

use super::render::BezierRenderer;
use super::types::{cubic_bezier, TangentMode};
use crate::geometry::HeadingAxes;

/// A single cubic Bézier curve in 3D that can be attached to entities.
///
/// `p0` and `p3` are the endpoints, `p1` and `p2` the handles. No invariant is
/// enforced on the points: any four vectors form a valid curve. Color and
/// width are only read when drawing. Fully serializable with Bevy's scene system.
#[derive(Component, Debug, Clone, PartialEq, Reflect, Default)]
#[reflect(Component, Default)]
pub struct CubicBezierCurve {
    /// Start point.
    pub p0: Vec3,
    /// Handle leaving the start point.
    pub p1: Vec3,
    /// Handle entering the end point.
    pub p2: Vec3,
    /// End point.
    pub p3: Vec3,
    /// Stroke color used when drawing.
    pub line_color: Color,
    /// Stroke width used when drawing. Non-positive widths draw nothing.
    pub line_width: f32,
    /// Formula used by [`CubicBezierCurve::tangent`].
    pub tangent_mode: TangentMode,
}

impl CubicBezierCurve {
    /// Create a curve from its four control points.
    pub fn new(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        Self {
            p0,
            p1,
            p2,
            p3,
            ..default()
        }
    }

    /// Create a curve from `[start, start_handle, end_handle, end]`.
    pub fn from_control_points([p0, p1, p2, p3]: [Vec3; 4]) -> Self {
        Self::new(p0, p1, p2, p3)
    }

    /// Set the stroke color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.line_color = color.into();
        self
    }

    /// Set the stroke width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the tangent formula.
    pub fn with_tangent_mode(mut self, mode: TangentMode) -> Self {
        self.tangent_mode = mode;
        self
    }

    /// The control points in curve order.
    pub fn control_points(&self) -> [Vec3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Evaluate the curve at parameter t.
    ///
    /// `t` is conventionally in `[0, 1]` but is not clamped.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        cubic_bezier(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Evaluate the tangent at parameter t.
    ///
    /// The result is the derivative, not a unit vector; normalize it if needed.
    pub fn tangent(&self, t: f32) -> Vec3 {
        self.tangent_mode
            .tangent(self.p0, self.p1, self.p2, self.p3, t)
    }

    /// Signed heading of the tangent at t in degrees, in `(-180, 180]`.
    ///
    /// Measured from +X, negative when the tangent points towards -Y.
    /// Returns `0.0` where the tangent vanishes.
    pub fn tangent_angle(&self, t: f32) -> f32 {
        self.tangent_angle_with(t, &HeadingAxes::default())
    }

    /// Signed heading of the tangent at t measured against custom axes.
    pub fn tangent_angle_with(&self, t: f32, axes: &HeadingAxes) -> f32 {
        axes.signed_angle(self.tangent(t))
    }

    /// Rotation about +Z by the heading at t.
    ///
    /// Orients an object whose local +X should follow the curve in the XY plane.
    pub fn heading_rotation(&self, t: f32) -> Quat {
        Quat::from_rotation_z(self.tangent_angle(t).to_radians())
    }

    /// The same curve traversed from `p3` to `p0`.
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
            ..self.clone()
        }
    }

    /// Sample `resolution + 1` evenly spaced points from t = 0 to t = 1.
    pub fn sample(&self, resolution: usize) -> Vec<Vec3> {
        let resolution = resolution.max(1);
        (0..=resolution)
            .map(|i| self.evaluate(i as f32 / resolution as f32))
            .collect()
    }

    /// Draw the curve through `renderer`.
    ///
    /// Passes start, end, start handle, end handle, color and width in that
    /// order. Pass `&mut None::<R>` or [`NoopRenderer`](super::NoopRenderer)
    /// where no renderer exists.
    pub fn draw<R: BezierRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_bezier(
            self.p0,
            self.p3,
            self.p1,
            self.p2,
            self.line_color,
            self.line_width,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::NoopRenderer;

    fn arch() -> CubicBezierCurve {
        CubicBezierCurve::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        )
    }

    fn twisted() -> CubicBezierCurve {
        CubicBezierCurve::new(
            Vec3::new(-2.0, 0.5, 1.0),
            Vec3::new(3.0, 4.0, -2.0),
            Vec3::new(-1.0, -3.0, 5.0),
            Vec3::new(2.0, 1.0, 0.0),
        )
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<(Vec3, Vec3, Vec3, Vec3, Color, f32)>,
    }

    impl BezierRenderer for RecordingRenderer {
        fn draw_bezier(
            &mut self,
            start: Vec3,
            end: Vec3,
            start_handle: Vec3,
            end_handle: Vec3,
            color: Color,
            width: f32,
        ) {
            self.calls
                .push((start, end, start_handle, end_handle, color, width));
        }
    }

    #[test]
    fn test_default_is_zeroed() {
        let curve = CubicBezierCurve::default();
        assert_eq!(curve.control_points(), [Vec3::ZERO; 4]);
        assert_eq!(curve.tangent_mode, TangentMode::Analytic);
        assert_eq!(curve.evaluate(0.7), Vec3::ZERO);
    }

    #[test]
    fn test_endpoints() {
        for curve in [arch(), twisted()] {
            assert!((curve.evaluate(0.0) - curve.p0).length() < 1e-5);
            assert!((curve.evaluate(1.0) - curve.p3).length() < 1e-5);
        }
    }

    #[test]
    fn test_arch_scenario() {
        let curve = arch();
        assert!((curve.evaluate(0.0) - Vec3::ZERO).length() < 1e-5);
        assert!((curve.evaluate(1.0) - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((curve.evaluate(0.5) - Vec3::new(0.5, 0.75, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_stays_within_control_point_bounds() {
        let curve = twisted();
        let points = curve.control_points();
        let min = points.iter().fold(Vec3::splat(f32::MAX), |a, p| a.min(*p));
        let max = points.iter().fold(Vec3::splat(f32::MIN), |a, p| a.max(*p));

        for i in 0..=50 {
            let point = curve.evaluate(i as f32 / 50.0);
            assert!(point.cmpge(min - 1e-4).all() && point.cmple(max + 1e-4).all());
        }
    }

    #[test]
    fn test_reversed_symmetry() {
        let curve = twisted();
        let reversed = curve.reversed();

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((curve.evaluate(t) - reversed.evaluate(1.0 - t)).length() < 1e-4);
        }
    }

    #[test]
    fn test_out_of_range_t_not_clamped() {
        let curve = arch();
        assert!((curve.evaluate(2.0) - curve.p3).length() > 0.1);
        assert!((curve.evaluate(-1.0) - curve.p0).length() > 0.1);
    }

    #[test]
    fn test_straight_line_tangent_parallel() {
        let direction = Vec3::new(1.0, 2.0, -0.5).normalize();
        let curve = CubicBezierCurve::new(
            Vec3::ZERO,
            direction,
            direction * 2.0,
            direction * 3.0,
        );

        for i in 0..=10 {
            let tangent = curve.tangent(i as f32 / 10.0);
            assert!(tangent.length() > 1e-3);
            assert!(tangent.cross(direction).length() < 1e-4);
            assert!(tangent.dot(direction) > 0.0);
        }
    }

    #[test]
    fn test_arch_headings() {
        let curve = arch();
        // Leaves straight up, arrives straight down, level at the apex.
        assert!((curve.tangent_angle(0.0) - 90.0).abs() < 1e-3);
        assert!((curve.tangent_angle(1.0) + 90.0).abs() < 1e-3);
        assert!(curve.tangent_angle(0.5).abs() < 1e-3);
    }

    #[test]
    fn test_angle_range_along_curve() {
        let curve = twisted();
        for i in 0..=100 {
            let angle = curve.tangent_angle(i as f32 / 100.0);
            assert!(angle > -180.0 && angle <= 180.0);
        }
    }

    #[test]
    fn test_heading_just_below_negative_x() {
        let curve = CubicBezierCurve::new(
            Vec3::ZERO,
            Vec3::new(-1.0, -1e-9, 0.0),
            Vec3::new(-2.0, -2e-9, 0.0),
            Vec3::new(-3.0, -3e-9, 0.0),
        );
        assert_eq!(curve.tangent_angle(0.5), 180.0);
    }

    #[test]
    fn test_heading_on_huge_curve() {
        let direction = Vec3::new(1.0, 1.0, 0.0) * 1e19;
        let curve =
            CubicBezierCurve::new(Vec3::ZERO, direction, direction * 2.0, direction * 3.0);
        assert!((curve.tangent_angle(0.5) - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_heading_on_tiny_curve() {
        let curve = CubicBezierCurve::from_control_points([
            Vec3::ZERO,
            Vec3::new(0.0, 1e-7, 0.0),
            Vec3::new(1e-7, 1e-7, 0.0),
            Vec3::new(1e-7, 0.0, 0.0),
        ]);
        assert!((curve.tangent_angle(0.0) - 90.0).abs() < 1e-3);
        assert!((curve.tangent_angle(1.0) + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_from_control_points_matches_new() {
        let points = twisted().control_points();
        let curve = CubicBezierCurve::from_control_points(points);
        assert_eq!(curve, twisted());
        assert_eq!(curve.control_points(), points);
    }

    #[test]
    fn test_degenerate_curve() {
        let point = Vec3::new(3.0, -1.0, 2.0);
        let curve = CubicBezierCurve::new(point, point, point, point);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((curve.evaluate(t) - point).length() < 1e-5);
            assert_eq!(curve.tangent_angle(t), 0.0);
            assert_eq!(curve.heading_rotation(t), Quat::IDENTITY);
        }
    }

    #[test]
    fn test_heading_rotation_turns_x_onto_tangent() {
        let curve = arch();
        let t = 0.2;
        let rotated = curve.heading_rotation(t) * Vec3::X;
        let tangent = curve.tangent(t).normalize();
        assert!((rotated - tangent).length() < 1e-4);
    }

    #[test]
    fn test_legacy_mode_on_curve() {
        let curve = arch().with_tangent_mode(TangentMode::Legacy);
        // The legacy tangent vanishes at t = 1, so the heading falls back to zero.
        assert_eq!(curve.tangent_angle(1.0), 0.0);
        assert!((arch().tangent_angle(1.0) + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample() {
        let curve = arch();
        let points = curve.sample(4);
        assert_eq!(points.len(), 5);
        assert!((points[0] - curve.p0).length() < 1e-5);
        assert!((points[2] - Vec3::new(0.5, 0.75, 0.0)).length() < 1e-5);
        assert!((points[4] - curve.p3).length() < 1e-5);

        assert_eq!(curve.sample(0).len(), 2);
    }

    #[test]
    fn test_draw_argument_order() {
        let curve = twisted()
            .with_color(Color::srgb(1.0, 0.0, 0.0))
            .with_width(2.5);
        let mut recorder = RecordingRenderer::default();

        curve.draw(&mut recorder);

        assert_eq!(
            recorder.calls,
            vec![(
                curve.p0,
                curve.p3,
                curve.p1,
                curve.p2,
                Color::srgb(1.0, 0.0, 0.0),
                2.5
            )]
        );
    }

    #[test]
    fn test_draw_without_renderer_is_noop() {
        let curve = twisted();
        curve.draw(&mut None::<RecordingRenderer>);
        curve.draw(&mut NoopRenderer);

        let mut wrapped = Some(RecordingRenderer::default());
        curve.draw(&mut wrapped);
        assert_eq!(wrapped.map(|r| r.calls.len()), Some(1));
    }

    #[test]
    fn test_draw_through_trait_object() {
        let mut recorder = RecordingRenderer::default();
        {
            let renderer: &mut dyn BezierRenderer = &mut recorder;
            arch().draw(renderer);
        }
        assert_eq!(recorder.calls.len(), 1);
    }
}
