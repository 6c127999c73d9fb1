//! # Configuration Utilities
//!
//! Configuration structures and the TOML loader used by the library and the
//! `pixel-stash` binary. Every table is optional; missing values fall back to
//! the defaults below.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::processing::{StegoOptions, DEFAULT_MARKER};

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: AppConfig = load_config("config/pixel-stash.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Top-level configuration for encode/decode runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub steganography: SteganographyConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Protocol settings. Encoder and decoder must use the same marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteganographyConfig {
    /// 32-bit value stamped into the header (default `1635021427`)
    pub marker: u32,
}

impl Default for SteganographyConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

impl From<&SteganographyConfig> for StegoOptions {
    fn from(config: &SteganographyConfig) -> Self {
        StegoOptions {
            marker: config.marker,
        }
    }
}

/// How output files are named and whether existing files may be replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Extension appended to package names that lack it (without the dot)
    pub package_extension: String,
    /// Replace files that already exist at the output path
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            package_extension: "png".to_string(),
            overwrite: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Carrier byte dumps for inspecting what an encode or decode touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Directory that receives the dump files; dumps are off when unset
    pub byte_dump_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        load_config(path)
    }

    pub fn stego_options(&self) -> StegoOptions {
        StegoOptions::from(&self.steganography)
    }
}
