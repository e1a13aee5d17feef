//! Visuals domain: animation clip selection and sprite styling for the player.

use bevy::prelude::*;

use crate::movement::{DashTint, Facing, MovementState};

/// Animation clips, one per movement state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

impl AnimationClip {
    pub fn for_state(state: MovementState) -> Self {
        match state {
            MovementState::Idle => AnimationClip::Idle,
            MovementState::Walking => AnimationClip::Walking,
            MovementState::Jumping => AnimationClip::Jumping,
            MovementState::Dead => AnimationClip::Dead,
        }
    }

    /// Clip name as authored in the animator.
    pub fn name(&self) -> &'static str {
        match self {
            AnimationClip::Idle => "Idle",
            AnimationClip::Walking => "Walking",
            AnimationClip::Jumping => "Jumping",
            AnimationClip::Dead => "Dead",
        }
    }
}

/// Clip playback position for a character sprite.
///
/// The sprite itself is a flat quad; an animation backend samples frames from
/// `clip` at `clip_elapsed`.
#[derive(Component, Debug, Default)]
pub struct PlayerVisuals {
    pub clip: AnimationClip,
    /// Seconds since the clip was (re)started. Playback position for an
    /// animation backend; nothing in this crate samples it yet.
    pub clip_elapsed: f32,
}

impl PlayerVisuals {
    /// Switch clips immediately, restarting from the first frame.
    pub fn cross_fade(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.clip_elapsed = 0.0;
    }
}

pub fn tint_color(tint: DashTint) -> Color {
    match tint {
        DashTint::Neutral => Color::WHITE,
        DashTint::Dashing => Color::srgb(0.8, 0.8, 0.8),
    }
}

/// Sprites face right; left-facing characters are mirrored.
pub fn flip_x(facing: Facing) -> bool {
    facing == Facing::Left
}
