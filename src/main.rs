use avian2d::prelude::*;
use bevy::prelude::*;

use ladder_runner::{content, level, movement, visuals};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ladder Runner".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_length_unit(movement::PIXELS_PER_UNIT))
        .add_plugins((
            ladder_runner::core::CorePlugin,
            movement::MovementPlugin,
            content::ContentPlugin,
            visuals::VisualsPlugin,
            level::LevelPlugin,
        ))
        .run();
}
