//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
#[cfg(test)]
mod tests;

pub(crate) use collisions::collect_surface_events;
pub(crate) use input::read_input;
pub(crate) use movement::{probe_ground, step_controllers};
