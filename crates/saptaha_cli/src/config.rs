//! TOML configuration: location, corpus path, and natal overrides.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use saptaha_engine::Location;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read failed: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse failed: {e}"),
        }
    }
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Whole-file configuration. Every section is optional; missing sections
/// take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub location: LocationConfig,
    pub corpus: CorpusConfig,
    pub janam_patri: JanamPatriConfig,
}

/// Geographic defaults for panchanga computation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub utc_offset_hours: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        let loc = Location::default();
        Self {
            latitude_deg: loc.latitude_deg,
            longitude_deg: loc.longitude_deg,
            utc_offset_hours: loc.utc_offset_hours,
        }
    }
}

impl LocationConfig {
    pub fn to_location(&self) -> Location {
        Location::new(self.latitude_deg, self.longitude_deg, self.utc_offset_hours)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    /// Path to the verse corpus JSON file.
    pub path: Option<PathBuf>,
}

/// Birth data plus optional manual overrides for the computed chart.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JanamPatriConfig {
    pub birth_date: Option<String>,
    pub birth_time: Option<String>,
    pub utc_offset_hours: Option<f64>,
    /// Manual nakshatra name; wins over the computed one.
    pub nakshatra: Option<String>,
    /// Manual rashi name; wins over the computed one.
    pub rashi: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
