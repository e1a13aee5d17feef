//! Movement domain: messages for movement state edges.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MovementState;

/// Event fired on the step a character's movement state changes
#[derive(Debug, Clone, Copy)]
pub struct MovementStateChanged {
    pub entity: Entity,
    pub from: MovementState,
    pub to: MovementState,
}

impl Message for MovementStateChanged {}
