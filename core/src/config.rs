//! Handles the configuration of the cli.
//!
//! this module is responsible for parsing the Musadora.toml file, layering environment variables
//! and cli arguments on top of it.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use strum::{Display, EnumString};

use std::{path::PathBuf, str::FromStr};

pub static DEFAULT_CONFIG: &str = include_str!("../Musadora.toml");

#[derive(Clone, Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// General CLI Settings
    #[serde(default)]
    pub cli: CliSettings,
}

impl Settings {
    /// Load settings from the config file, environment variables, and CLI arguments.
    ///
    /// The environment variables are prefixed with `MUSADORA_`, and nested keys are separated by `__`,
    /// e.g. `MUSADORA_CLI__LOG_LEVEL=debug`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the config file is not found or if the config file is
    /// invalid.
    #[inline]
    pub fn init(
        config: PathBuf,
        log_level: Option<log::LevelFilter>,
        format: Option<OutputFormat>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::from(config))
            .add_source(
                Environment::with_prefix("MUSADORA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        if let Some(library) = settings.cli.library.as_mut() {
            *library = shellexpand::tilde(&library.to_string_lossy())
                .into_owned()
                .into();
        }

        if let Some(log_level) = log_level {
            settings.cli.log_level = log_level;
        }

        if let Some(format) = format {
            settings.cli.format = format;
        }

        Ok(settings)
    }

    /// Get the (default) path to the config file.
    /// If the config file does not exist at this path, it will be created with the default config.
    ///
    /// See [`crate::get_config_dir`] for more information about where this default path is located.
    ///
    /// # Errors
    ///
    /// This function will return an error if the system config directory (e.g., `~/.config` on linux) could not be found, or if the config file was missing and could not be created.
    #[inline]
    pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
        let config_dir = crate::get_config_dir()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }
        let config_file = config_dir.join("Musadora.toml");

        if !config_file.exists() {
            std::fs::write(&config_file, DEFAULT_CONFIG)?;
        }

        Ok(config_file)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CliSettings {
    /// What level of logging to use.
    /// Default is "warn".
    #[serde(default = "default_log_level")]
    #[serde(deserialize_with = "de_log_level")]
    pub log_level: log::LevelFilter,
    /// How decoded items are printed.
    #[serde(default)]
    pub format: OutputFormat,
    /// The library response to read when no file is given on the command line.
    /// `~` is expanded to the home directory.
    #[serde(default)]
    pub library: Option<PathBuf>,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            library: None,
        }
    }
}

/// How decoded items are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// One human readable line per item.
    #[default]
    Plain,
    /// The wrapped records, as JSON.
    Json,
}

fn de_log_level<'de, D>(deserializer: D) -> Result<log::LevelFilter, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(log::LevelFilter::from_str(&s).unwrap_or_else(|_| default_log_level()))
}

const fn default_log_level() -> log::LevelFilter {
    log::LevelFilter::Warn
}
