//! Movement domain: horizontal acceleration, friction stop, and ladder climbing.

use crate::movement::Facing;

/// Facing follows the sign of the input; zero input keeps the current facing.
pub fn facing_from_input(current: Facing, input_x: f32) -> Facing {
    if input_x < 0.0 {
        Facing::Left
    } else if input_x > 0.0 {
        Facing::Right
    } else {
        current
    }
}

/// Integrate one step of horizontal velocity.
///
/// Nonzero input accelerates (scaled by `wall_force`) and clamps to
/// `max_speed`. Zero input decays toward zero without crossing it.
pub fn integrate_horizontal(
    vx: f32,
    input_x: f32,
    wall_force: f32,
    acceleration_rate: f32,
    deceleration_rate: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if input_x != 0.0 {
        let vx = vx + acceleration_rate * wall_force * input_x * dt;
        return vx.clamp(-max_speed, max_speed);
    }

    let decel = deceleration_rate * dt;
    if vx > 0.0 {
        (vx - decel).max(0.0)
    } else if vx < 0.0 {
        (vx + decel).min(0.0)
    } else {
        0.0
    }
}

/// Free vertical movement inside a ladder zone; no input keeps the current speed.
pub fn integrate_climb(
    vy: f32,
    input_y: f32,
    acceleration_rate: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if input_y == 0.0 {
        return vy;
    }
    (vy + acceleration_rate * input_y * dt).clamp(-max_speed, max_speed)
}
