//! Bootstrap configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument (or its environment variable, which clap folds in)
//! 2. TOML config file
//! 3. Compiled default
//!
//! A missing TOML file is not an error: a warning is logged and the compiled
//! defaults apply. A TOML file that exists but cannot be parsed is an error.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Bootstrap configuration loaded from TOML file
///
/// Every key is optional; absent keys fall through to [`CompiledDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Directory tree holding the music library files
    #[serde(default)]
    pub music_library_path: Option<PathBuf>,

    /// Extension filter, including the leading dot (e.g. ".pdf")
    #[serde(default)]
    pub extension: Option<String>,

    /// CSV output file
    #[serde(default)]
    pub csv_filename: Option<PathBuf>,

    /// JSON output file
    #[serde(default)]
    pub json_filename: Option<PathBuf>,

    /// Embedded database file
    #[serde(default)]
    pub database_filename: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Built-in defaults used when neither CLI nor TOML provide a value
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefaults {
    pub music_library_path: PathBuf,
    pub extension: String,
    pub csv_filename: PathBuf,
    pub json_filename: PathBuf,
    pub database_filename: PathBuf,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            music_library_path: PathBuf::from("."),
            extension: ".pdf".to_string(),
            csv_filename: PathBuf::from("csv_output_full.csv"),
            json_filename: PathBuf::from("output_file_full.json"),
            database_filename: PathBuf::from("musiclibrary.db"),
        }
    }
}

/// Values supplied on the command line (already merged with their env vars)
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub music_library_path: Option<PathBuf>,
    pub extension: Option<String>,
    pub csv_filename: Option<PathBuf>,
    pub json_filename: Option<PathBuf>,
    pub database_filename: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved run configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub music_library_path: PathBuf,
    pub extension: String,
    pub csv_filename: PathBuf,
    pub json_filename: PathBuf,
    pub database_filename: PathBuf,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Merge CLI overrides, TOML values and compiled defaults
    pub fn resolve(overrides: ConfigOverrides, toml_config: TomlConfig) -> Self {
        let defaults = CompiledDefaults::default();

        let level = overrides
            .log_level
            .unwrap_or(toml_config.logging.level);

        Self {
            music_library_path: overrides
                .music_library_path
                .or(toml_config.music_library_path)
                .unwrap_or(defaults.music_library_path),
            extension: overrides
                .extension
                .or(toml_config.extension)
                .unwrap_or(defaults.extension),
            csv_filename: overrides
                .csv_filename
                .or(toml_config.csv_filename)
                .unwrap_or(defaults.csv_filename),
            json_filename: overrides
                .json_filename
                .or(toml_config.json_filename)
                .unwrap_or(defaults.json_filename),
            database_filename: overrides
                .database_filename
                .or(toml_config.database_filename)
                .unwrap_or(defaults.database_filename),
            logging: LoggingConfig {
                level,
                file: toml_config.logging.file,
            },
        }
    }
}

/// Platform config file location (`~/.config/mlib/mlib.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mlib").join("mlib.toml"))
}

/// Load the TOML config file at `path`
///
/// Returns the default (empty) config when the file does not exist.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!(
            "Config file {} not found, using compiled defaults",
            path.display()
        );
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed ({}): {}", path.display(), e)))?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;

    info!("Loaded TOML configuration from {}", path.display());
    Ok(config)
}

/// Load the config from an explicit path, or from the platform default location
pub fn load_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    match explicit {
        Some(path) => load_toml_config(path),
        None => match default_config_path() {
            Some(path) => load_toml_config(&path),
            None => {
                warn!("Could not determine config directory, using compiled defaults");
                Ok(TomlConfig::default())
            }
        },
    }
}
