//! Example curve viewer: one arch and a marker riding along it.
//!
//! Run with: `cargo run`

use bevy::prelude::*;
use bevy_bezier_3d::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(BezierPlugin)
        .add_plugins(BezierEditorPlugin)
        .add_plugins(BezierAlignPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, (sweep_marker, show_help))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.0, 8.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    let curve = commands
        .spawn(
            CubicBezierCurve::new(
                Vec3::new(-3.0, 0.0, 0.0),
                Vec3::new(-3.0, 3.0, 0.0),
                Vec3::new(3.0, 3.0, 0.0),
                Vec3::new(3.0, 0.0, 0.0),
            )
            .with_color(Color::srgb(1.0, 0.8, 0.2))
            .with_width(2.0),
        )
        .id();

    commands.spawn((Transform::default(), AlignToCurve::new(curve)));
}

/// Sweep every marker back and forth along its curve and draw its heading.
fn sweep_marker(
    time: Res<Time>,
    mut markers: Query<(&mut AlignToCurve, &Transform)>,
    mut gizmos: Gizmos,
) {
    let t = (time.elapsed_secs().sin() + 1.0) * 0.5;
    for (mut align, transform) in &mut markers {
        align.t = t;
        let heading = transform.rotation * Vec3::X;
        gizmos.arrow(transform.translation, transform.translation + heading, Color::WHITE);
    }
}

fn show_help(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<EditorSettings>,
    markers: Query<&AlignToCurve>,
    curves: Query<&CubicBezierCurve>,
) {
    if keyboard.just_pressed(KeyCode::KeyG) {
        settings.toggle_gizmos();
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        println!("\n=== Bézier Viewer ===");
        for align in &markers {
            if let Ok(curve) = curves.get(align.curve) {
                println!(
                    "t = {:.2}  heading = {:.1}°  tangent = {}",
                    align.t,
                    curve.tangent_angle(align.t),
                    curve.tangent_mode.name()
                );
            }
        }
        println!("  H - Print marker headings");
        println!("  G - Toggle gizmos");
        println!("=====================\n");
    }
}
