//! Movement domain: the per-character controller and its fixed-step update.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::movement::contacts::{LadderZoneTracker, WallContactTracker};
use crate::movement::dash::{DashEvent, DashModifier};
use crate::movement::ground::{GroundProbe, GroundSensor};
use crate::movement::horizontal::{facing_from_input, integrate_climb, integrate_horizontal};
use crate::movement::state_machine::MovementStateMachine;
use crate::movement::vertical::{JumpKind, JumpState, integrate_vertical};
use crate::movement::{
    DashTint, DerivedMotion, Facing, MotionTuning, MovementState, SurfaceEvent, TuningError,
};

/// Input for one controller step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepInput {
    /// Horizontal in `x`, vertical in `y`, each in [-1, 1].
    pub axis: Vec2,
    pub jump_held: bool,
    /// True only on the step the dash key went down.
    pub dash_pressed: bool,
}

/// What happened during a step beyond the velocity itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub velocity: Vec2,
    pub jump: Option<JumpKind>,
    pub dash: Option<DashEvent>,
}

/// Movement state for a single character. The controller is the only source of
/// the character's intended velocity; the physics body is write-only.
#[derive(Component, Debug, Clone)]
pub struct CharacterController {
    tuning: MotionTuning,
    derived: DerivedMotion,
    ground: GroundSensor,
    velocity: Vec2,
    gravity: f32,
    facing: Facing,
    grounded: bool,
    dead: bool,
    walls: WallContactTracker,
    ladder: LadderZoneTracker,
    dash: DashModifier,
    jump: JumpState,
    machine: MovementStateMachine,
    pending: VecDeque<SurfaceEvent>,
}

impl CharacterController {
    /// Build a controller, rejecting tuning that would yield infinite or NaN motion.
    pub fn new(tuning: MotionTuning) -> Result<Self, TuningError> {
        let derived = tuning.derive()?;
        Ok(Self {
            ground: GroundSensor::new(tuning.ground_check_offset, tuning.ground_check_size),
            dash: DashModifier::new(tuning.max_speed, tuning.dash_max_speed),
            velocity: Vec2::ZERO,
            gravity: derived.gravity,
            facing: Facing::Right,
            grounded: false,
            dead: false,
            walls: WallContactTracker::default(),
            ladder: LadderZoneTracker::default(),
            jump: JumpState::default(),
            machine: MovementStateMachine::default(),
            pending: VecDeque::new(),
            derived,
            tuning,
        })
    }

    /// Queue a collision/trigger callback; applied at the start of the next step.
    pub fn push_event(&mut self, event: SurfaceEvent) {
        self.pending.push_back(event);
    }

    /// Mark the character dead. Permanent for the controller's lifetime.
    pub fn kill(&mut self) {
        if !self.dead {
            info!("Character killed");
        }
        self.dead = true;
    }

    /// Advance one fixed step of `dt` seconds for a character at `position`.
    pub fn step(
        &mut self,
        input: StepInput,
        position: Vec2,
        probe: &impl GroundProbe,
        dt: f32,
    ) -> StepReport {
        self.machine.snapshot();

        while let Some(event) = self.pending.pop_front() {
            self.walls.apply(event);
            self.ladder.apply(event);
        }

        self.grounded = self.ground.sense(position, probe);

        let on_ladder = self.ladder.triggered;
        let axis = if on_ladder {
            self.gravity = 0.0;
            input.axis
        } else {
            self.gravity = self.derived.gravity;
            Vec2::new(input.axis.x, 0.0)
        };

        self.machine.advance(self.dead, self.grounded, self.velocity.x);

        let wall_force = self.walls.wall_force(self.tuning.wall_push_force);
        self.facing = facing_from_input(self.facing, axis.x);
        self.velocity.x = integrate_horizontal(
            self.velocity.x,
            axis.x,
            wall_force,
            self.derived.acceleration_rate,
            self.derived.deceleration_rate,
            self.dash.max_speed,
            dt,
        );
        self.velocity.y = integrate_climb(
            self.velocity.y,
            axis.y,
            self.derived.acceleration_rate,
            self.dash.max_speed,
            dt,
        );

        let dash = self.dash.update(
            input.dash_pressed,
            self.velocity.x,
            self.tuning.dash_coyote_time,
            dt,
        );

        let jump = self.jump.update(
            &mut self.grounded,
            input.jump_held,
            &mut self.velocity.y,
            self.derived.initial_jump_speed,
            self.tuning.jump_coyote_time,
            dt,
        );

        self.velocity.y = integrate_vertical(
            self.velocity.y,
            self.grounded,
            on_ladder,
            self.gravity,
            &mut self.jump,
            dt,
        );

        StepReport {
            velocity: self.velocity,
            jump,
            dash,
        }
    }

    pub fn tuning(&self) -> &MotionTuning {
        &self.tuning
    }

    pub fn derived(&self) -> DerivedMotion {
        self.derived
    }

    pub fn ground_sensor(&self) -> GroundSensor {
        self.ground
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn state(&self) -> MovementState {
        self.machine.current
    }

    pub fn previous_state(&self) -> MovementState {
        self.machine.previous
    }

    /// True when the last step changed the movement state.
    pub fn just_changed(&self) -> bool {
        self.machine.just_changed()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn is_walking(&self) -> bool {
        self.velocity.x != 0.0
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn on_ladder(&self) -> bool {
        self.ladder.triggered
    }

    /// Wall contact flags after the last step's queued events were applied.
    pub fn touching_left_wall(&self) -> bool {
        self.walls.left
    }

    pub fn touching_right_wall(&self) -> bool {
        self.walls.right
    }

    pub fn wall_force(&self) -> f32 {
        self.walls.wall_force(self.tuning.wall_push_force)
    }

    /// Gravity used by the last step; zero inside a ladder zone.
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Current speed cap, raised while dashing.
    pub fn max_speed(&self) -> f32 {
        self.dash.max_speed
    }

    pub fn can_dash_again(&self) -> bool {
        self.dash.can_dash_again
    }

    pub fn dash_timer(&self) -> f32 {
        self.dash.timer
    }

    pub fn dash_tint(&self) -> DashTint {
        self.dash.tint
    }

    pub fn can_jump_again(&self) -> bool {
        self.jump.can_jump_again
    }

    pub fn jump_timer(&self) -> f32 {
        self.jump.timer
    }
}
