//! Movement domain: character controller plugin wiring and public exports.

mod components;
mod contacts;
mod controller;
mod dash;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod ground;
mod horizontal;
mod resources;
mod state_machine;
mod systems;
mod vertical;

pub use components::{
    ContactPhase, DashTint, Facing, GameLayer, GroundContact, MovementState, Player, Surface,
    SurfaceEvent,
};
pub use controller::{CharacterController, StepInput, StepReport};
pub use dash::DashEvent;
pub use events::MovementStateChanged;
pub use ground::{GroundProbe, GroundSensor};
pub use resources::{DerivedMotion, MotionTuning, MovementInput, TuningError};
pub use vertical::JumpKind;

use bevy::prelude::*;

use crate::movement::systems::{collect_surface_events, probe_ground, read_input, step_controllers};

/// World units to pixels; tuning and the controller work in world units.
pub const PIXELS_PER_UNIT: f32 = 32.0;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionTuning>()
            .init_resource::<MovementInput>()
            .add_message::<MovementStateChanged>()
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (collect_surface_events, probe_ground, step_controllers).chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_ground_probe);
    }
}
