//! Level domain: markers for level geometry with gameplay effects.

use bevy::prelude::*;

/// Touching a hazard kills the player.
#[derive(Component, Debug)]
pub struct Hazard;
