use std::{path::PathBuf, time::Duration};

use errors::DirectoryError;

pub mod config;
pub mod errors;
pub mod library;
pub mod logger;

/// Get the location of the musadora config directory.
///
/// On linux this is `$XDG_CONFIG_HOME/musadora` (usually `~/.config/musadora`).
///
/// # Errors
///
/// Returns [`DirectoryError::Config`] if no home directory could be found.
pub fn get_config_dir() -> Result<PathBuf, DirectoryError> {
    directories::ProjectDirs::from("", "", "musadora")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(DirectoryError::Config)
}

/// Format a duration as `seconds.milliseconds`, e.g. `12.034`.
#[must_use]
pub fn format_duration(duration: &Duration) -> String {
    format!("{}.{:03}", duration.as_secs(), duration.subsec_millis())
}
