mod arc_length;
mod components;
mod render;
mod types;

pub use arc_length::*;
pub use components::*;
pub use render::*;
pub use types::*;

use bevy::prelude::*;

use crate::geometry::HeadingAxes;

/// Plugin that registers curve types for reflection/serialization.
/// This plugin does NOT draw anything - use `BezierEditorPlugin` for that.
pub struct BezierPlugin;

impl Plugin for BezierPlugin {
    fn build(&self, app: &mut App) {
        debug!("registering cubic Bézier curve types");
        app.register_type::<CubicBezierCurve>()
            .register_type::<TangentMode>()
            .register_type::<HeadingAxes>();
    }
}
