use bevy::prelude::*;

use crate::curve::CubicBezierCurve;

use super::AlignToCurve;

/// System that moves aligned entities onto their curves.
pub fn align_to_curves(
    mut aligned: Query<(Entity, &AlignToCurve, &mut Transform)>,
    curves: Query<&CubicBezierCurve>,
) {
    for (entity, align, mut transform) in &mut aligned {
        let Ok(curve) = curves.get(align.curve) else {
            debug!("{entity} is aligned to {}, which has no curve", align.curve);
            continue;
        };

        transform.translation = curve.evaluate(align.t) + align.offset;
        if align.align_rotation {
            transform.rotation = curve.heading_rotation(align.t);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arch() -> CubicBezierCurve {
        CubicBezierCurve::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        )
    }

    fn app() -> App {
        let mut app = App::new();
        app.add_systems(Update, align_to_curves);
        app
    }

    #[test]
    fn test_entity_moves_onto_curve() {
        let mut app = app();
        let curve = app.world_mut().spawn(arch()).id();
        let marker = app
            .world_mut()
            .spawn((Transform::default(), AlignToCurve::new(curve).with_t(0.5)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(marker).copied().unwrap();
        assert!((transform.translation - Vec3::new(0.5, 0.75, 0.0)).length() < 1e-5);
        // Level at the apex.
        assert!(transform.rotation.angle_between(Quat::IDENTITY) < 1e-3);
    }

    #[test]
    fn test_offset_and_rotation_toggle() {
        let mut app = app();
        let curve = app.world_mut().spawn(arch()).id();
        let start = Transform::from_rotation(Quat::from_rotation_y(1.0));
        let marker = app
            .world_mut()
            .spawn((
                start,
                AlignToCurve::new(curve)
                    .with_offset(Vec3::Z)
                    .with_align_rotation(false),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(marker).copied().unwrap();
        assert!((transform.translation - Vec3::Z).length() < 1e-5);
        assert_eq!(transform.rotation, start.rotation);
    }

    #[test]
    fn test_heading_rotation_applied() {
        let mut app = app();
        let curve = app.world_mut().spawn(arch()).id();
        let marker = app
            .world_mut()
            .spawn((Transform::default(), AlignToCurve::new(curve)))
            .id();

        app.update();

        // The arch leaves its start straight up.
        let transform = app.world().get::<Transform>(marker).copied().unwrap();
        assert!((transform.rotation * Vec3::X - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_missing_curve_leaves_transform() {
        let mut app = app();
        let start = Transform::from_xyz(4.0, 5.0, 6.0);
        let marker = app
            .world_mut()
            .spawn((start, AlignToCurve::default()))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(marker).copied().unwrap();
        assert_eq!(transform, start);
    }
}
