//! Movement domain: idle/walking/jumping/dead transitions.

use crate::movement::MovementState;

/// Next state from the current one. `Dead` never transitions.
pub fn next_state(current: MovementState, grounded: bool, vx: f32) -> MovementState {
    match current {
        MovementState::Dead => MovementState::Dead,
        MovementState::Idle => {
            if !grounded {
                MovementState::Jumping
            } else if vx != 0.0 {
                MovementState::Walking
            } else {
                MovementState::Idle
            }
        }
        MovementState::Walking => {
            if !grounded {
                MovementState::Jumping
            } else if vx == 0.0 {
                MovementState::Idle
            } else {
                MovementState::Walking
            }
        }
        MovementState::Jumping => {
            if !grounded {
                MovementState::Jumping
            } else if vx != 0.0 {
                MovementState::Walking
            } else {
                MovementState::Idle
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementStateMachine {
    pub current: MovementState,
    pub previous: MovementState,
}

impl MovementStateMachine {
    /// Record the current state as the previous one; first thing each step.
    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }

    pub fn advance(&mut self, dead: bool, grounded: bool, vx: f32) {
        if dead {
            self.current = MovementState::Dead;
        }
        self.current = next_state(self.current, grounded, vx);
    }

    pub fn just_changed(&self) -> bool {
        self.previous != self.current
    }
}
