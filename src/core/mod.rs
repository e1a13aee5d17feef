//! Core domain: camera and fixed simulation rate.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

/// Controller steps per second.
pub const FIXED_STEP_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_STEP_HZ))
            .insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.14)))
            .add_systems(Startup, setup_camera);
    }
}
