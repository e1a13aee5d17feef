//! Loader for RON tuning files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::{MotionTuning, TuningError};

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Everything that can stop the tuning from being used.
#[derive(Debug)]
pub enum TuningLoadError {
    Load(ContentLoadError),
    Invalid { file: String, error: TuningError },
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningLoadError::Load(e) => write!(f, "{}", e),
            TuningLoadError::Invalid { file, error } => {
                write!(f, "Invalid tuning in {}: {}", file, error)
            }
        }
    }
}

impl std::error::Error for TuningLoadError {}

impl From<ContentLoadError> for TuningLoadError {
    fn from(e: ContentLoadError) -> Self {
        TuningLoadError::Load(e)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct; `file` is used for error context.
fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse and validate movement tuning from RON text.
pub fn parse_motion_tuning(file: &str, contents: &str) -> Result<MotionTuning, TuningLoadError> {
    let tuning: MotionTuning = parse_single(file, contents)?;
    tuning.validate().map_err(|error| TuningLoadError::Invalid {
        file: file.to_string(),
        error,
    })?;
    Ok(tuning)
}

/// Load and validate movement tuning.
///
/// Returns `Ok(None)` when the file does not exist so callers can fall back to
/// defaults; a file that exists but is malformed or invalid is an error.
pub fn load_motion_tuning(path: &Path) -> Result<Option<MotionTuning>, TuningLoadError> {
    if !path.exists() {
        return Ok(None);
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_motion_tuning(&file_name, &contents).map(Some)
}
