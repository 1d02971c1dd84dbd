//! TOML configuration for the career pipeline.
//!
//! Every field carries a default, so a missing file, a missing section or a
//! missing key all fall back to the values below.

use std::path::Path;
use std::time::Duration;

use dhruv_vedic_base::dasha::{DEFAULT_TOTAL_YEARS, MAX_TOTAL_YEARS};
use serde::{Deserialize, Serialize};

use crate::error::CareerError;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerConfig {
    pub dasha: DashaConfig,
    pub cache: CacheConfig,
    pub log: LogConfig,
    pub profession: ProfessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaConfig {
    /// Span of the Mahadasha table in years.
    #[serde(default = "default_total_years")]
    pub total_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_chart_ttl")]
    pub chart_ttl_secs: u64,
    #[serde(default = "default_prediction_ttl")]
    pub prediction_ttl_secs: u64,
    #[serde(default = "default_validation_ttl")]
    pub validation_ttl_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `env_logger` filter; `RUST_LOG` still wins.
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_reasons")]
    pub reasons_per_profession: usize,
}

fn default_total_years() -> f64 {
    DEFAULT_TOTAL_YEARS
}

fn default_true() -> bool {
    true
}

fn default_chart_ttl() -> u64 {
    3600
}

fn default_prediction_ttl() -> u64 {
    1800
}

fn default_validation_ttl() -> u64 {
    86400
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_top_n() -> usize {
    5
}

fn default_reasons() -> usize {
    3
}

impl Default for DashaConfig {
    fn default() -> Self {
        Self {
            total_years: default_total_years(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            chart_ttl_secs: default_chart_ttl(),
            prediction_ttl_secs: default_prediction_ttl(),
            validation_ttl_secs: default_validation_ttl(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ProfessionConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            reasons_per_profession: default_reasons(),
        }
    }
}

impl CacheConfig {
    pub fn chart_ttl(&self) -> Duration {
        Duration::from_secs(self.chart_ttl_secs)
    }

    pub fn prediction_ttl(&self) -> Duration {
        Duration::from_secs(self.prediction_ttl_secs)
    }

    pub fn validation_ttl(&self) -> Duration {
        Duration::from_secs(self.validation_ttl_secs)
    }
}

impl CareerConfig {
    /// Parse configuration text and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, CareerError> {
        let config: Self = toml::from_str(text)?;
        config.check().map_err(|reason| CareerError::Config {
            path: "<inline>".into(),
            reason,
        })?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, CareerError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text).map_err(|e| CareerError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.check().map_err(|reason| CareerError::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        log::debug!("loaded career config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CareerError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Reject values the pipeline cannot honour.
    pub fn validate(&self) -> Result<(), CareerError> {
        self.check().map_err(|reason| CareerError::Config {
            path: "<memory>".into(),
            reason,
        })
    }

    fn check(&self) -> Result<(), String> {
        let years = self.dasha.total_years;
        if !years.is_finite() || years <= 0.0 || years > MAX_TOTAL_YEARS {
            return Err(format!(
                "dasha.total_years must be in (0, {MAX_TOTAL_YEARS}], got {years}"
            ));
        }
        let level = self.log.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!("unknown log level {:?}", self.log.level));
        }
        if self.profession.top_n == 0 {
            return Err("profession.top_n must be at least 1".to_string());
        }
        Ok(())
    }
}
