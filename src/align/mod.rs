//! Placing and orienting entities along Bézier curves.
//!
//! Useful for markers, signposts, or anything that should sit on a curve at a
//! fixed parameter and face along it.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use bevy_bezier_3d::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let curve = commands.spawn(CubicBezierCurve::new(
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(0.0, 2.0, 0.0),
//!         Vec3::new(4.0, 2.0, 0.0),
//!         Vec3::new(4.0, 0.0, 0.0),
//!     )).id();
//!
//!     commands.spawn((Transform::default(), AlignToCurve::new(curve).with_t(0.25)));
//! }
//! ```

mod components;
mod systems;

pub use components::*;
pub use systems::align_to_curves;

use bevy::prelude::*;

/// Plugin that keeps [`AlignToCurve`] entities on their curves.
pub struct BezierAlignPlugin;

impl Plugin for BezierAlignPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AlignToCurve>()
            .add_systems(Update, systems::align_to_curves);
    }
}
