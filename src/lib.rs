//! Fixed-step movement for a single 2D platformer character: acceleration-based
//! running, an apex-derived jump arc with a one-shot extra jump, a timed dash,
//! wall push-back, and ladder climbing, driven by an idle/walking/jumping/dead
//! state machine.
//!
//! The pure controller lives in [`movement::CharacterController`]; the plugins
//! wire it to bevy input and avian2d physics.

pub mod content;
pub mod core;
pub mod level;
pub mod movement;
pub mod visuals;
