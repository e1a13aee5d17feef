//! Movement domain: timed speed-cap boost.

use crate::movement::DashTint;

/// Outcome of a dash update, logged by the fixed-step system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashEvent {
    Started,
    Expired,
}

/// Owns the current speed cap, raised while the dash buff is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashModifier {
    pub timer: f32,
    pub can_dash_again: bool,
    pub max_speed: f32,
    pub tint: DashTint,
    base_max_speed: f32,
    dash_max_speed: f32,
}

impl DashModifier {
    pub fn new(base_max_speed: f32, dash_max_speed: f32) -> Self {
        Self {
            timer: 0.0,
            can_dash_again: true,
            max_speed: base_max_speed,
            tint: DashTint::Neutral,
            base_max_speed,
            dash_max_speed,
        }
    }

    /// Tick the dash timer, start a dash on a fresh press while moving, and
    /// revert the buff once `dash_coyote_time` has elapsed.
    ///
    /// The revert is checked every step, so with a zero coyote time a dash
    /// started this step also ends this step.
    pub fn update(
        &mut self,
        dash_pressed: bool,
        vx: f32,
        dash_coyote_time: f32,
        dt: f32,
    ) -> Option<DashEvent> {
        self.timer += dt;

        let mut event = None;
        if dash_pressed && vx != 0.0 && self.can_dash_again {
            self.timer = 0.0;
            self.max_speed = self.dash_max_speed;
            self.tint = DashTint::Dashing;
            self.can_dash_again = false;
            event = Some(DashEvent::Started);
        }

        if self.timer >= dash_coyote_time {
            let was_dashing = !self.can_dash_again;
            self.can_dash_again = true;
            self.max_speed = self.base_max_speed;
            self.tint = DashTint::Neutral;
            if was_dashing {
                event = Some(DashEvent::Expired);
            }
        }

        event
    }
}
