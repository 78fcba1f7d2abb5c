use bevy::prelude::*;

/// Component that pins an entity to a point on a [`CubicBezierCurve`](crate::curve::CubicBezierCurve).
///
/// The entity's [`Transform`] is updated each frame from the curve's point and
/// heading at `t`.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, Default)]
pub struct AlignToCurve {
    /// The curve entity to follow.
    pub curve: Entity,

    /// Parametric position on the curve. Not clamped.
    pub t: f32,

    /// Whether to rotate the entity to the curve heading.
    ///
    /// When true, local +X points along the tangent projected into the XY plane.
    pub align_rotation: bool,

    /// World-space offset added to the curve position.
    pub offset: Vec3,
}

impl Default for AlignToCurve {
    fn default() -> Self {
        Self {
            curve: Entity::PLACEHOLDER,
            t: 0.0,
            align_rotation: true,
            offset: Vec3::ZERO,
        }
    }
}

impl AlignToCurve {
    /// Align to the given curve entity at its start.
    pub fn new(curve: Entity) -> Self {
        Self { curve, ..default() }
    }

    /// Set the parametric position.
    pub fn with_t(mut self, t: f32) -> Self {
        self.t = t;
        self
    }

    /// Enable or disable heading alignment.
    pub fn with_align_rotation(mut self, align: bool) -> Self {
        self.align_rotation = align;
        self
    }

    /// Set a world-space offset from the curve position.
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }
}
