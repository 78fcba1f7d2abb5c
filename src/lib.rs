//! # bevy_bezier_3d
//!
//! A Bevy plugin for cubic Bézier curves in 3D with editor gizmo visualization.
//!
//! ## Features
//!
//! - Closed-form point, tangent and signed heading queries
//! - Pluggable [`BezierRenderer`](curve::BezierRenderer); drawing is a no-op without one
//! - Gizmo drawing of every curve entity (feature `editor`)
//! - Entities pinned and oriented along curves
//! - Serializable with Bevy's scene system (RON format)
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_bezier_3d::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(BezierPlugin)
//!         .add_plugins(BezierEditorPlugin)  // Optional: draws curves with gizmos
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     commands.spawn(
//!         CubicBezierCurve::new(
//!             Vec3::new(0.0, 0.0, 0.0),
//!             Vec3::new(0.0, 1.0, 0.0),
//!             Vec3::new(1.0, 1.0, 0.0),
//!             Vec3::new(1.0, 0.0, 0.0),
//!         )
//!         .with_color(Color::WHITE)
//!         .with_width(2.0),
//!     );
//! }
//! ```
//!
//! ## Plugins
//!
//! - [`BezierPlugin`]: Curve type registration (required)
//! - [`BezierEditorPlugin`]: Gizmo drawing of curves (optional)
//! - [`BezierAlignPlugin`]: Keep entities on curves (optional)
//!
//! ## Drawing without Bevy gizmos
//!
//! ```ignore
//! curve.draw(&mut NoopRenderer);          // headless
//! curve.draw(&mut None::<MyRenderer>);    // renderer not available
//! curve.draw(&mut my_renderer);           // anything implementing BezierRenderer
//! ```

pub mod align;
pub mod curve;
pub mod geometry;

#[cfg(feature = "editor")]
pub mod editor;

pub use align::BezierAlignPlugin;
pub use curve::BezierPlugin;

#[cfg(feature = "editor")]
pub use editor::BezierEditorPlugin;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::align::{AlignToCurve, BezierAlignPlugin};
    pub use crate::curve::{
        BezierPlugin, BezierRenderer, CubicBezierCurve, NoopRenderer, TangentMode,
    };
    pub use crate::geometry::HeadingAxes;

    #[cfg(feature = "editor")]
    pub use crate::editor::{BezierEditorPlugin, EditorSettings, GizmoBezierRenderer};
}
