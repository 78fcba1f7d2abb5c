mod gizmos;

pub use gizmos::{
    curve_stroke_points, is_drawable_width, render_bezier_curves, GizmoBezierRenderer,
};

use bevy::{gizmos::config::GizmoConfigStore, prelude::*};

/// Settings for drawing curves in the editor.
#[derive(Resource, Debug, Clone)]
pub struct EditorSettings {
    /// Whether to show gizmos at all.
    pub show_gizmos: bool,
    /// Whether to show handle lines from endpoints to their handles.
    pub show_handles: bool,
    /// Number of line segments used to stroke each curve.
    pub curve_resolution: usize,
    /// Gizmo line width shared by every curve.
    pub line_width: f32,
    /// Color of handle lines and handle points.
    pub handle_color: Color,
    /// Radius of the spheres drawn at handle positions.
    pub handle_point_radius: f32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            show_gizmos: true,
            show_handles: true,
            curve_resolution: 32,
            line_width: 3.0,
            handle_color: Color::srgba(0.6, 0.6, 0.6, 0.5),
            handle_point_radius: 0.05,
        }
    }
}

impl EditorSettings {
    /// Toggle gizmo visibility.
    pub fn toggle_gizmos(&mut self) {
        self.show_gizmos = !self.show_gizmos;
    }
}

/// System to sync editor settings to gizmo config.
fn sync_gizmo_config(
    settings: Res<EditorSettings>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if !settings.is_changed() {
        return;
    }
    let (config, _) = config_store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = settings.line_width;
}

/// Plugin that draws every [`CubicBezierCurve`](crate::curve::CubicBezierCurve) with gizmos.
///
/// This plugin requires `BezierPlugin` to be added first, and Bevy's gizmo
/// plugin (part of `DefaultPlugins`).
///
/// Toggle drawing at runtime through [`EditorSettings`]:
/// ```ignore
/// fn toggle(mut settings: ResMut<EditorSettings>) {
///     settings.toggle_gizmos();
/// }
/// ```
pub struct BezierEditorPlugin;

impl Plugin for BezierEditorPlugin {
    fn build(&self, app: &mut App) {
        debug!("adding Bézier editor gizmos");
        app.init_resource::<EditorSettings>().add_systems(
            Update,
            (sync_gizmo_config, gizmos::render_bezier_curves).chain(),
        );
    }
}
