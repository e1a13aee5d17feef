//! Level domain: demo level and player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::Hazard;
use crate::movement::{
    CharacterController, GameLayer, GroundContact, MotionTuning, PIXELS_PER_UNIT, Player,
    Surface,
};
use crate::visuals::PlayerVisuals;

/// Player collider, in world units.
const PLAYER_SIZE: Vec2 = Vec2::new(0.5, 1.0);

pub(crate) fn spawn_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ladder_color = Color::srgba(0.7, 0.55, 0.3, 0.6);
    let hazard_color = Color::srgb(0.85, 0.2, 0.2);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Walls, tagged by side
    for (surface, x) in [(Surface::LeftWall, -420.0), (Surface::RightWall, 420.0)] {
        commands.spawn((
            surface,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(40.0, 500.0)),
                ..default()
            },
            Transform::from_xyz(x, 50.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(40.0, 500.0),
            CollisionEventsEnabled,
            wall_layers,
        ));
    }

    // Platforms
    for (pos, width) in [
        (Vec2::new(-250.0, -80.0), 150.0),
        (Vec2::new(250.0, 20.0), 150.0),
        (Vec2::new(0.0, 150.0), 120.0),
    ] {
        commands.spawn((
            Sprite {
                color: platform_color,
                custom_size: Some(Vec2::new(width, 20.0)),
                ..default()
            },
            Transform::from_xyz(pos.x, pos.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(width, 20.0),
            ground_layers,
        ));
    }

    // Ladder beside the center platform
    commands.spawn((
        Surface::LadderZone,
        Sprite {
            color: ladder_color,
            custom_size: Some(Vec2::new(40.0, 350.0)),
            ..default()
        },
        Transform::from_xyz(80.0, -5.0, -1.0),
        Collider::rectangle(40.0, 350.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    // Spikes on the floor near the right wall
    commands.spawn((
        Hazard,
        Sprite {
            color: hazard_color,
            custom_size: Some(Vec2::new(80.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(340.0, -174.0, 0.0),
        Collider::rectangle(80.0, 12.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));
}

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MotionTuning>) {
    let controller = match CharacterController::new(tuning.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            return;
        }
    };

    let size = PLAYER_SIZE * PIXELS_PER_UNIT;
    info!(
        "Spawning player: max_speed={}, jump_speed={}, gravity={}",
        tuning.max_speed,
        controller.derived().initial_jump_speed,
        controller.derived().gravity
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            controller,
            GroundContact::default(),
            PlayerVisuals::default(),
        ),
        // Rendering
        Sprite {
            color: Color::WHITE,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(-200.0, -150.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The controller integrates gravity itself
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollidingEntities::default(),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}
