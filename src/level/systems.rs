//! Level domain: hazard contact handling.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::level::Hazard;
use crate::movement::{CharacterController, Player};

/// Kill any player whose collider starts touching a hazard.
pub(crate) fn kill_on_hazard(
    mut collision_start: MessageReader<CollisionStart>,
    hazards: Query<(), With<Hazard>>,
    mut players: Query<&mut CharacterController, With<Player>>,
) {
    for event in collision_start.read() {
        let other = if hazards.contains(event.collider1) {
            event.collider2
        } else if hazards.contains(event.collider2) {
            event.collider1
        } else {
            continue;
        };

        if let Ok(mut controller) = players.get_mut(other) {
            controller.kill();
        }
    }
}
