//! Visuals domain: presentation of movement state, facing, and dash tint.

mod components;
mod systems;

pub use components::{AnimationClip, PlayerVisuals, flip_x, tint_color};

use bevy::prelude::*;

use crate::visuals::systems::{apply_state_clips, sync_sprite, tick_clips};

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (tick_clips, apply_state_clips, sync_sprite).chain());
    }
}
