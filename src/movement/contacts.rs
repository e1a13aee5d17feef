//! Movement domain: wall and ladder contact accumulation from surface events.

use bevy::prelude::*;

use crate::movement::{ContactPhase, Surface, SurfaceEvent};

/// Left/right wall flags, set on enter/stay and cleared on exit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContactTracker {
    pub left: bool,
    pub right: bool,
}

impl WallContactTracker {
    pub fn apply(&mut self, event: SurfaceEvent) {
        let flag = match event.surface {
            Surface::LeftWall => &mut self.left,
            Surface::RightWall => &mut self.right,
            Surface::LadderZone => return,
        };
        let was = *flag;
        *flag = event.phase != ContactPhase::Exit;
        if was != *flag {
            debug!(
                "Wall contact changed: {:?} {:?} (left={}, right={})",
                event.surface, event.phase, self.left, self.right
            );
        }
    }

    /// Multiplier on horizontal acceleration.
    ///
    /// `push_force` applies when exactly one wall is touched; touching neither or
    /// both walls leaves acceleration unchanged.
    pub fn wall_force(&self, push_force: f32) -> f32 {
        if self.left != self.right {
            push_force
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LadderZoneTracker {
    pub triggered: bool,
}

impl LadderZoneTracker {
    pub fn apply(&mut self, event: SurfaceEvent) {
        if event.surface != Surface::LadderZone {
            return;
        }
        let was = self.triggered;
        self.triggered = event.phase != ContactPhase::Exit;
        if was != self.triggered {
            debug!("Ladder zone {:?}: triggered={}", event.phase, self.triggered);
        }
    }
}
