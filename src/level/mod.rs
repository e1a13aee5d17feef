//! Level domain: demo level geometry, player spawn, and hazards.

mod components;
mod spawn;
mod systems;

pub use components::Hazard;

use bevy::prelude::*;

use crate::content::{load_tuning, tuning_usable};
use crate::level::spawn::{spawn_level, spawn_player};
use crate::level::systems::kill_on_hazard;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_level,
                spawn_player.after(load_tuning).run_if(tuning_usable),
            ),
        )
        .add_systems(Update, kill_on_hazard);
    }
}
