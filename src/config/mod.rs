use crate::core::analysis::{AnalysisConfig, DEFAULT_CONFIDENCE_Z, DEFAULT_MAX_GAP_HOURS};
use crate::core::daytime::{DEFAULT_MORNING_HOUR, DEFAULT_NIGHT_HOUR, DayBoundaries};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_morning_hour")]
    pub morning_hour: u32,
    #[serde(default = "default_night_hour")]
    pub night_hour: u32,
    #[serde(default = "default_max_gap_hours")]
    pub max_gap_hours: f64,
    #[serde(default = "default_confidence_z")]
    pub confidence_z: f64,
    #[serde(default = "default_weeks")]
    pub default_weeks: u32,
}

fn default_morning_hour() -> u32 {
    DEFAULT_MORNING_HOUR
}
fn default_night_hour() -> u32 {
    DEFAULT_NIGHT_HOUR
}
fn default_max_gap_hours() -> f64 {
    DEFAULT_MAX_GAP_HOURS
}
fn default_confidence_z() -> f64 {
    DEFAULT_CONFIDENCE_Z
}
fn default_weeks() -> u32 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            morning_hour: default_morning_hour(),
            night_hour: default_night_hour(),
            max_gap_hours: default_max_gap_hours(),
            confidence_z: default_confidence_z(),
            default_weeks: default_weeks(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.babystats`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".babystats")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("babystats.conf")
    }

    /// Load configuration from `path` (or the standard file).
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map_or_else(Self::config_file, Path::to_path_buf);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), ?cfg, "loaded configuration");
        Ok(cfg)
    }

    /// Write the defaults to `path` (or the standard file), creating parent folders.
    pub fn write_default(path: Option<&Path>) -> AppResult<PathBuf> {
        let path = path.map_or_else(Self::config_file, Path::to_path_buf);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn day_boundaries(&self) -> AppResult<DayBoundaries> {
        DayBoundaries::new(self.morning_hour, self.night_hour)
    }

    pub fn analysis(&self) -> AppResult<AnalysisConfig> {
        if !(self.max_gap_hours.is_finite() && self.max_gap_hours > 0.0) {
            return Err(AppError::Config(format!(
                "max_gap_hours must be a positive number, got {}",
                self.max_gap_hours
            )));
        }
        if !(self.confidence_z.is_finite() && self.confidence_z > 0.0) {
            return Err(AppError::Config(format!(
                "confidence_z must be a positive number, got {}",
                self.confidence_z
            )));
        }

        Ok(AnalysisConfig {
            max_gap_hours: self.max_gap_hours,
            confidence_z: self.confidence_z,
        })
    }
}
