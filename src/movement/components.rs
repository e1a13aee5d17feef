//! Movement domain: components, physics layers, and surface tags for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (ladders, hazards) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Result of the last ground overlap query for a character, refreshed each
/// fixed step just before the controller runs.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact(pub bool);

/// Identity of a surface the player can touch, attached when the level is built.
///
/// Colliders without a `Surface` are ignored by the contact trackers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    LeftWall,
    RightWall,
    LadderZone,
}

/// Lifecycle phase of a collision or trigger overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Enter,
    Stay,
    Exit,
}

/// A tagged collision/trigger callback, queued on the controller until the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceEvent {
    pub surface: Surface,
    pub phase: ContactPhase,
}

impl SurfaceEvent {
    pub fn enter(surface: Surface) -> Self {
        Self {
            surface,
            phase: ContactPhase::Enter,
        }
    }

    pub fn stay(surface: Surface) -> Self {
        Self {
            surface,
            phase: ContactPhase::Stay,
        }
    }

    pub fn exit(surface: Surface) -> Self {
        Self {
            surface,
            phase: ContactPhase::Exit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Discrete locomotion state consumed by the visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

/// Sprite tint requested by the dash buff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashTint {
    #[default]
    Neutral,
    Dashing,
}
