//! Content domain: data-driven tuning loaded from `assets/data`.

mod loader;

pub use loader::{ContentLoadError, TuningLoadError, load_motion_tuning, parse_motion_tuning};

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use std::path::Path;

use crate::movement::MotionTuning;

/// Path to the movement tuning file, relative to the working directory.
pub const MOTION_TUNING_PATH: &str = "assets/data/motion_tuning.ron";

/// Where the active [`MotionTuning`] came from.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TuningStatus {
    /// No file was found; built-in defaults are active.
    #[default]
    Defaults,
    Loaded,
    /// The file was malformed or invalid and the app is shutting down.
    Rejected,
}

impl TuningStatus {
    pub fn is_usable(&self) -> bool {
        *self != TuningStatus::Rejected
    }
}

/// Run condition: false once the tuning file has been rejected.
pub fn tuning_usable(status: Res<TuningStatus>) -> bool {
    status.is_usable()
}

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TuningStatus>()
            .add_systems(Startup, load_tuning);
    }
}

/// Replace the default tuning with the file's, or exit on a configuration error.
pub fn load_tuning(
    mut tuning: ResMut<MotionTuning>,
    mut status: ResMut<TuningStatus>,
    mut exit: MessageWriter<AppExit>,
) {
    *status = install_tuning(load_motion_tuning(Path::new(MOTION_TUNING_PATH)), &mut tuning);
    if *status == TuningStatus::Rejected {
        exit.write(AppExit::error());
    }
}

/// Apply a load result to the active tuning, leaving it untouched unless the
/// file loaded cleanly.
pub(crate) fn install_tuning(
    result: Result<Option<MotionTuning>, TuningLoadError>,
    tuning: &mut MotionTuning,
) -> TuningStatus {
    match result {
        Ok(Some(loaded)) => {
            info!(
                "Loaded motion tuning from {}: max_speed={}, gravity={}, jump_speed={}",
                MOTION_TUNING_PATH,
                loaded.max_speed,
                loaded.gravity(),
                loaded.initial_jump_speed()
            );
            *tuning = loaded;
            TuningStatus::Loaded
        }
        Ok(None) => {
            warn!("{} not found, using default motion tuning", MOTION_TUNING_PATH);
            TuningStatus::Defaults
        }
        Err(e) => {
            error!("Fatal configuration error: {}", e);
            TuningStatus::Rejected
        }
    }
}
