//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-session movement configuration, in world units and seconds.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MotionTuning {
    pub max_speed: f32,
    /// Speed cap while the dash buff is active.
    pub dash_max_speed: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
    pub apex_height: f32,
    pub apex_time: f32,
    pub dash_coyote_time: f32,
    pub jump_coyote_time: f32,
    /// Horizontal force multiplier while pinned against a single wall.
    pub wall_push_force: f32,
    pub ground_check_offset: f32,
    pub ground_check_size: Vec2,
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            dash_max_speed: 10.0,
            acceleration_time: 0.25,
            deceleration_time: 0.15,
            apex_height: 3.0,
            apex_time: 0.5,
            dash_coyote_time: 1.0,
            jump_coyote_time: 1.0,
            wall_push_force: -20.0,
            ground_check_offset: 0.5,
            ground_check_size: Vec2::new(0.4, 0.1),
        }
    }
}

/// Constants derived once from [`MotionTuning`] when a controller is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMotion {
    pub acceleration_rate: f32,
    pub deceleration_rate: f32,
    pub gravity: f32,
    pub initial_jump_speed: f32,
}

impl MotionTuning {
    /// Rate at which full input reaches `max_speed` in `acceleration_time`.
    pub fn acceleration_rate(&self) -> f32 {
        self.max_speed / self.acceleration_time
    }

    pub fn deceleration_rate(&self) -> f32 {
        self.max_speed / self.deceleration_time
    }

    /// Constant (negative) gravity giving an apex of `apex_height` at `apex_time`.
    pub fn gravity(&self) -> f32 {
        -2.0 * self.apex_height / (self.apex_time * self.apex_time)
    }

    pub fn initial_jump_speed(&self) -> f32 {
        2.0 * self.apex_height / self.apex_time
    }

    /// Peak height of a jump from rest, using h = v² / (2g).
    pub fn jump_height(&self) -> f32 {
        let v = self.initial_jump_speed();
        v * v / (2.0 * -self.gravity())
    }

    /// Check every field a derived constant divides by or a step relies on.
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("max_speed", self.max_speed),
            ("dash_max_speed", self.dash_max_speed),
            ("acceleration_time", self.acceleration_time),
            ("deceleration_time", self.deceleration_time),
            ("apex_height", self.apex_height),
            ("apex_time", self.apex_time),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("dash_coyote_time", self.dash_coyote_time),
            ("jump_coyote_time", self.jump_coyote_time),
            ("ground_check_offset", self.ground_check_offset),
            ("ground_check_size.x", self.ground_check_size.x),
            ("ground_check_size.y", self.ground_check_size.y),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() {
                return Err(TuningError::NotFinite { field, value });
            }
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !self.wall_push_force.is_finite() {
            return Err(TuningError::NotFinite {
                field: "wall_push_force",
                value: self.wall_push_force,
            });
        }

        if self.dash_max_speed < self.max_speed {
            return Err(TuningError::DashSlowerThanBase {
                max_speed: self.max_speed,
                dash_max_speed: self.dash_max_speed,
            });
        }

        Ok(())
    }

    /// Validate, then compute the derived constants.
    pub fn derive(&self) -> Result<DerivedMotion, TuningError> {
        self.validate()?;
        Ok(DerivedMotion {
            acceleration_rate: self.acceleration_rate(),
            deceleration_rate: self.deceleration_rate(),
            gravity: self.gravity(),
            initial_jump_speed: self.initial_jump_speed(),
        })
    }
}

/// Error type for malformed movement tuning.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    NotFinite { field: &'static str, value: f32 },
    NotPositive { field: &'static str, value: f32 },
    Negative { field: &'static str, value: f32 },
    DashSlowerThanBase { max_speed: f32, dash_max_speed: f32 },
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::NotFinite { field, value } => {
                write!(f, "tuning field '{}' must be finite, got {}", field, value)
            }
            TuningError::NotPositive { field, value } => {
                write!(f, "tuning field '{}' must be > 0, got {}", field, value)
            }
            TuningError::Negative { field, value } => {
                write!(f, "tuning field '{}' must be >= 0, got {}", field, value)
            }
            TuningError::DashSlowerThanBase {
                max_speed,
                dash_max_speed,
            } => write!(
                f,
                "dash_max_speed ({}) must not be below max_speed ({})",
                dash_max_speed, max_speed
            ),
        }
    }
}

impl std::error::Error for TuningError {}

/// Latest sampled player input.
///
/// `dash_just_pressed` is latched by the frame-rate input system and cleared by
/// the fixed-rate controller step once consumed.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_held: bool,
    pub dash_just_pressed: bool,
}
