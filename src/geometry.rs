//! Geometry utilities for orienting things along curves.

use bevy::prelude::*;

/// Axes used to turn a direction into a signed heading angle.
///
/// The heading is the unsigned angle between `reference` and the direction,
/// negated when the direction points against `secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Default)]
pub struct HeadingAxes {
    /// Axis the angle is measured from (heading 0).
    pub reference: Vec3,
    /// Axis whose sign decides whether the heading is positive or negative.
    pub secondary: Vec3,
}

impl Default for HeadingAxes {
    fn default() -> Self {
        Self {
            reference: Vec3::X,
            secondary: Vec3::Y,
        }
    }
}

impl HeadingAxes {
    /// Create heading axes from a reference and a secondary axis.
    pub fn new(reference: Vec3, secondary: Vec3) -> Self {
        Self {
            reference,
            secondary,
        }
    }

    /// Signed angle in degrees from `reference` to `direction`, in `(-180, 180]`.
    ///
    /// Returns `0.0` for a zero (or non-finite) direction, which has no angle.
    /// Any nonzero direction has a heading, however short or long it is.
    pub fn signed_angle(&self, direction: Vec3) -> f32 {
        let (Some(direction), Some(reference)) =
            (rescaled(direction), rescaled(self.reference))
        else {
            return 0.0;
        };

        let angle = reference
            .cross(direction)
            .length()
            .atan2(reference.dot(direction))
            .to_degrees()
            .min(180.0);

        // Exactly opposite the reference stays at +180.
        if direction.dot(self.secondary) < 0.0 && angle < 180.0 {
            -angle
        } else {
            angle
        }
    }
}

/// Scale a vector so its largest component has magnitude one.
///
/// Keeps lengths, dot and cross products away from f32 overflow and underflow.
fn rescaled(v: Vec3) -> Option<Vec3> {
    let max = v.abs().max_element();
    (max > 0.0 && v.is_finite()).then(|| v / max)
}
