use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Circle;
use bevy::window::{CursorMoved, WindowResized, WindowResolution};

use crate::configuration::config::{parse_color, ConfigError};
use crate::simulation::canvas::FrameRecorder;
use crate::simulation::params::Palette;
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{ColorToken, NVec2};

#[derive(Component)]
struct ParticleIndex(pub usize);

/// Palette resolved once at startup, indexed by `ColorToken`
#[derive(Resource)]
struct PaletteColors(Vec<Srgba>);

/// Primitives recorded during the last tick
#[derive(Resource, Default)]
struct Frame(FrameRecorder);

pub fn run_2d(sim: Simulation) -> Result<(), ConfigError> {
    info!("run_2d: starting Bevy 2D viewer with {} particles", sim.particles().len());

    let colors = palette_colors(&sim.palette)?;
    let width = sim.viewport.width as f32;
    let height = sim.viewport.height as f32;

    App::new()
        .insert_resource(sim)
        .insert_resource(PaletteColors(colors))
        .insert_resource(ClearColor(Color::WHITE))
        .init_resource::<Frame>()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "bounce".into(),
                resolution: WindowResolution::new(width, height),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_systems(Startup, setup_particles_system)
        .add_systems(Update, (input_system, physics_step_system, sync_particles_system).chain())
        .run();

    Ok(())
}

pub fn palette_colors(palette: &Palette) -> Result<Vec<Srgba>, ConfigError> {
    palette
        .colors
        .iter()
        .map(|name| parse_color(name).map(|[r, g, b]| Srgba::rgb_u8(r, g, b)))
        .collect()
}

/// Viewport coordinates (top-left origin, y down) to world coordinates of
/// a camera centered on the window (y up)
fn to_world(p: &NVec2, width: f64, height: f64) -> Vec2 {
    Vec2::new((p.x - width / 2.0) as f32, (height / 2.0 - p.y) as f32)
}

fn tint(colors: &PaletteColors, token: ColorToken, alpha: f64) -> Color {
    let base = colors.0.get(token.0).copied().unwrap_or(Srgba::WHITE);
    Color::Srgba(Srgba {
        alpha: alpha as f32,
        ..base
    })
}

fn setup_particles_system(
    mut commands: Commands,
    sim: Res<Simulation>,
    colors: Res<PaletteColors>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    // every particle shares one radius, so one mesh
    let mesh = Mesh2dHandle(meshes.add(Circle::new(sim.parameters.radius as f32)));

    for (i, p) in sim.particles().iter().enumerate() {
        let pos = to_world(&p.x, sim.viewport.width, sim.viewport.height);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: mesh.clone(),
                material: materials.add(ColorMaterial::from(tint(&colors, p.color, p.opacity))),
                transform: Transform::from_xyz(pos.x, pos.y, 0.0),
                ..Default::default()
            },
            ParticleIndex(i),
        ));
    }
}

/// Forward host events: pointer moves, window resizes, click to reseed
fn input_system(
    mut sim: ResMut<Simulation>,
    mut cursor: EventReader<CursorMoved>,
    mut resized: EventReader<WindowResized>,
    buttons: Res<ButtonInput<MouseButton>>,
) {
    for ev in cursor.read() {
        sim.set_pointer(ev.position.x as f64, ev.position.y as f64);
    }
    for ev in resized.read() {
        sim.resize(ev.width as f64, ev.height as f64);
    }
    if buttons.just_pressed(MouseButton::Left) {
        if let Err(e) = sim.reset() {
            warn!("reset ignored: {e}");
        }
    }
}

fn physics_step_system(mut sim: ResMut<Simulation>, mut frame: ResMut<Frame>) {
    frame.0.reset();
    sim.tick(&mut frame.0);
}

/// Apply the recorded frame: fill alpha through the material, outline
/// through gizmos
fn sync_particles_system(
    sim: Res<Simulation>,
    frame: Res<Frame>,
    colors: Res<PaletteColors>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut gizmos: Gizmos,
    mut query: Query<(&ParticleIndex, &mut Transform, &Handle<ColorMaterial>)>,
) {
    let circles = frame.0.circles();

    for (ParticleIndex(i), mut transform, material) in &mut query {
        let Some(c) = circles.get(*i) else {
            continue;
        };
        let pos = to_world(&c.center, sim.viewport.width, sim.viewport.height);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;

        if let Some(m) = materials.get_mut(material) {
            m.color = tint(&colors, c.color, c.fill_alpha);
        }
        gizmos.circle_2d(pos, c.radius as f32, tint(&colors, c.color, 1.0));
    }
}
