//! Movement domain: ground contact sensing.

use bevy::prelude::*;

/// Box-overlap query against ground colliders, provided by the physics side.
///
/// `center` and `size` are in world units.
pub trait GroundProbe {
    fn overlaps(&self, center: Vec2, size: Vec2) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, Vec2) -> bool,
{
    fn overlaps(&self, center: Vec2, size: Vec2) -> bool {
        self(center, size)
    }
}

/// Probe box placed below the character's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSensor {
    pub offset: f32,
    pub size: Vec2,
}

impl GroundSensor {
    pub fn new(offset: f32, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Center of the probe box for a character at `position`.
    pub fn probe_center(&self, position: Vec2) -> Vec2 {
        position + Vec2::NEG_Y * self.offset
    }

    pub fn sense(&self, position: Vec2, probe: &impl GroundProbe) -> bool {
        probe.overlaps(self.probe_center(position), self.size)
    }
}
