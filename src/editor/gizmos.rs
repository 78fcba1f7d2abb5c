//! Curve gizmo rendering.

use bevy::prelude::*;

use crate::curve::{cubic_bezier, BezierRenderer, CubicBezierCurve};

use super::EditorSettings;

/// [`BezierRenderer`] that strokes curves with Bevy gizmos.
///
/// The curve is flattened into a line strip. Gizmo line width is global per
/// config group, so the per-curve width only decides whether anything is
/// drawn: non-positive or non-finite widths are skipped.
pub struct GizmoBezierRenderer<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    resolution: usize,
    transform: GlobalTransform,
    handles: Option<(Color, f32)>,
}

impl<'a, 'w, 's> GizmoBezierRenderer<'a, 'w, 's> {
    /// Stroke curves with `resolution` line segments each.
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, resolution: usize) -> Self {
        Self {
            gizmos,
            resolution,
            transform: GlobalTransform::IDENTITY,
            handles: None,
        }
    }

    /// Transform curve points from local to world space before drawing.
    pub fn with_transform(mut self, transform: GlobalTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Also draw handle lines and handle points in `color`.
    pub fn with_handles(mut self, color: Color, point_radius: f32) -> Self {
        self.handles = Some((color, point_radius));
        self
    }
}

impl BezierRenderer for GizmoBezierRenderer<'_, '_, '_> {
    fn draw_bezier(
        &mut self,
        start: Vec3,
        end: Vec3,
        start_handle: Vec3,
        end_handle: Vec3,
        color: Color,
        width: f32,
    ) {
        if !is_drawable_width(width) {
            trace!("skipping curve stroke with width {width}");
            return;
        }

        let points = curve_stroke_points(
            [start, start_handle, end_handle, end],
            self.resolution,
            &self.transform,
        );
        self.gizmos.linestrip(points, color);

        if let Some((handle_color, radius)) = self.handles {
            let [start, start_handle, end_handle, end] = [start, start_handle, end_handle, end]
                .map(|p| self.transform.transform_point(p));
            self.gizmos.line(start, start_handle, handle_color);
            self.gizmos.line(end, end_handle, handle_color);
            for handle in [start_handle, end_handle] {
                self.gizmos
                    .sphere(Isometry3d::from_translation(handle), radius, handle_color);
            }
        }
    }
}

/// Whether a stroke of this width produces anything.
pub fn is_drawable_width(width: f32) -> bool {
    width > 0.0 && width.is_finite()
}

/// Flatten a curve given as `[start, start_handle, end_handle, end]` into
/// `resolution + 1` world-space points.
pub fn curve_stroke_points(
    [p0, p1, p2, p3]: [Vec3; 4],
    resolution: usize,
    transform: &GlobalTransform,
) -> Vec<Vec3> {
    let resolution = resolution.max(1);
    (0..=resolution)
        .map(|i| {
            let t = i as f32 / resolution as f32;
            transform.transform_point(cubic_bezier(p0, p1, p2, p3, t))
        })
        .collect()
}

/// System to render all curves using Bevy gizmos.
///
/// Curves on entities with a [`GlobalTransform`] are drawn in world space,
/// others as-is.
pub fn render_bezier_curves(
    settings: Res<EditorSettings>,
    curves: Query<(&CubicBezierCurve, Option<&GlobalTransform>)>,
    mut gizmos: Gizmos,
) {
    if !settings.show_gizmos {
        return;
    }

    for (curve, global_transform) in &curves {
        let mut renderer = GizmoBezierRenderer::new(&mut gizmos, settings.curve_resolution)
            .with_transform(global_transform.copied().unwrap_or(GlobalTransform::IDENTITY));
        if settings.show_handles {
            renderer = renderer.with_handles(settings.handle_color, settings.handle_point_radius);
        }
        curve.draw(&mut renderer);
    }
}
