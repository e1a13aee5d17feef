//! Movement domain: jump impulses and gravity integration.

/// Which jump rule fired on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    /// Jump from the ground; always allowed.
    Ground,
    /// One-shot jump in the air, re-armed on landing.
    Extra,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpState {
    /// Seconds since the last jump.
    pub timer: f32,
    pub can_jump_again: bool,
}

impl Default for JumpState {
    fn default() -> Self {
        Self {
            timer: 0.0,
            can_jump_again: true,
        }
    }
}

impl JumpState {
    /// Apply the jump rules for one step, before gravity integration.
    ///
    /// A ground jump clears `grounded` so the same step integrates gravity.
    pub fn update(
        &mut self,
        grounded: &mut bool,
        jump_held: bool,
        vy: &mut f32,
        initial_jump_speed: f32,
        jump_coyote_time: f32,
        dt: f32,
    ) -> Option<JumpKind> {
        self.timer += dt;

        if !jump_held {
            return None;
        }

        if *grounded {
            *vy = initial_jump_speed;
            *grounded = false;
            self.timer = 0.0;
            self.can_jump_again = true;
            Some(JumpKind::Ground)
        } else if self.timer >= jump_coyote_time && self.can_jump_again {
            *vy = initial_jump_speed;
            self.timer = 0.0;
            self.can_jump_again = false;
            Some(JumpKind::Extra)
        } else {
            None
        }
    }
}

/// Integrate one step of vertical velocity outside of the jump rules.
///
/// Airborne characters fall under `gravity` (zero inside a ladder zone).
/// Standing on ground outside a ladder cancels vertical speed and re-arms the
/// extra jump; standing on ground inside a ladder keeps the climb speed.
pub fn integrate_vertical(
    vy: f32,
    grounded: bool,
    on_ladder: bool,
    gravity: f32,
    jump: &mut JumpState,
    dt: f32,
) -> f32 {
    if !grounded {
        vy + gravity * dt
    } else if !on_ladder {
        jump.can_jump_again = true;
        0.0
    } else {
        vy
    }
}
