//! The rendering collaborator a curve draws itself through.

use bevy::prelude::*;

/// Something that can stroke a cubic Bézier curve.
///
/// Curves never read anything back from a renderer; drawing is a one-way
/// delegation. Implement this to route curves to gizmos, a debug overlay, or a
/// recorder in tests.
pub trait BezierRenderer {
    /// Stroke a curve from `start` to `end` shaped by the two handles.
    fn draw_bezier(
        &mut self,
        start: Vec3,
        end: Vec3,
        start_handle: Vec3,
        end_handle: Vec3,
        color: Color,
        width: f32,
    );
}

/// Renderer that draws nothing. Used in headless builds and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl BezierRenderer for NoopRenderer {
    fn draw_bezier(&mut self, _: Vec3, _: Vec3, _: Vec3, _: Vec3, _: Color, _: f32) {}
}

/// An absent renderer is a no-op.
impl<R: BezierRenderer> BezierRenderer for Option<R> {
    fn draw_bezier(
        &mut self,
        start: Vec3,
        end: Vec3,
        start_handle: Vec3,
        end_handle: Vec3,
        color: Color,
        width: f32,
    ) {
        if let Some(renderer) = self {
            renderer.draw_bezier(start, end, start_handle, end_handle, color, width);
        }
    }
}

impl<R: BezierRenderer + ?Sized> BezierRenderer for &mut R {
    fn draw_bezier(
        &mut self,
        start: Vec3,
        end: Vec3,
        start_handle: Vec3,
        end_handle: Vec3,
        color: Color,
        width: f32,
    ) {
        (**self).draw_bezier(start, end, start_handle, end_handle, color, width);
    }
}
