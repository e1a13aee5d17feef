//! Visuals domain: systems reacting to controller output.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{CharacterController, MovementStateChanged, Player};
use crate::visuals::{AnimationClip, PlayerVisuals, flip_x, tint_color};

/// Restart the matching clip whenever a character's movement state changes.
pub(crate) fn apply_state_clips(
    mut state_changes: MessageReader<MovementStateChanged>,
    mut query: Query<&mut PlayerVisuals>,
) {
    for change in state_changes.read() {
        let Ok(mut visuals) = query.get_mut(change.entity) else {
            continue;
        };
        let clip = AnimationClip::for_state(change.to);
        debug!(
            "Cross-fading {:?} to '{}' ({:?} -> {:?})",
            change.entity,
            clip.name(),
            change.from,
            change.to
        );
        visuals.cross_fade(clip);
    }
}

pub(crate) fn tick_clips(time: Res<Time>, mut query: Query<&mut PlayerVisuals>) {
    let dt = time.delta_secs();
    for mut visuals in &mut query {
        visuals.clip_elapsed += dt;
    }
}

/// Mirror the sprite by facing and tint it while dashing.
pub(crate) fn sync_sprite(mut query: Query<(&CharacterController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = flip_x(controller.facing());
        sprite.color = tint_color(controller.dash_tint());
    }
}
