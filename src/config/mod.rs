use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::{
    errors::TrackerError,
    ledger::DEFAULT_STARTING_BALANCE,
    storage::json_backend::{tmp_path, write_atomic},
    utils::paths,
};

const MIN_CHART_WIDTH: usize = 5;
const MAX_CHART_WIDTH: usize = 120;

/// User preferences persisted next to the tracker data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    /// Balance used when no wallet has been persisted yet.
    pub starting_balance: f64,
    /// Width in cells of the longest chart bar.
    pub chart_width: usize,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            chart_width: 30,
            plain_output: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] = [
        "currency_symbol",
        "starting_balance",
        "chart_width",
        "plain_output",
    ];

    /// Updates a single key from its textual value. The configuration is
    /// left unchanged when the value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        let value = value.trim();
        let mut next = self.clone();
        match key {
            "currency_symbol" => next.currency_symbol = value.to_string(),
            "starting_balance" => {
                next.starting_balance = value.parse::<f64>().map_err(|_| {
                    TrackerError::Config(format!("starting_balance must be a number, got `{value}`"))
                })?;
            }
            "chart_width" => {
                next.chart_width = value.parse::<usize>().map_err(|_| {
                    TrackerError::Config(format!("chart_width must be a whole number, got `{value}`"))
                })?;
            }
            "plain_output" => {
                next.plain_output = parse_bool(value).ok_or_else(|| {
                    TrackerError::Config(format!("plain_output must be on/off, got `{value}`"))
                })?;
            }
            other => {
                return Err(TrackerError::Config(format!(
                    "unknown key `{other}` (expected one of: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Range checks shared by `config set` and values read from disk.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(TrackerError::Config(format!(
                "starting_balance must be zero or more, got `{}`",
                self.starting_balance
            )));
        }
        if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&self.chart_width) {
            return Err(TrackerError::Config(format!(
                "chart_width must be between {MIN_CHART_WIDTH} and {MAX_CHART_WIDTH}, got `{}`",
                self.chart_width
            )));
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("starting_balance", format!("{:.2}", self.starting_balance)),
            ("chart_width", self.chart_width.to_string()),
            (
                "plain_output",
                if self.plain_output { "on" } else { "off" }.to_string(),
            ),
        ]
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, TrackerError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, TrackerError> {
        paths::ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, TrackerError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data).map_err(|err| {
                TrackerError::Config(format!("{} is malformed: {err}", self.path.display()))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("currency_symbol", "€").unwrap();
        config.set("chart_width", "12").unwrap();
        config.set("plain_output", "on").unwrap();
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"starting_balance": 250.0}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.starting_balance, 250.0);
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("chart_width", "2").is_err());
        assert!(config.set("starting_balance", "plenty").is_err());
        assert!(config.set("plain_output", "maybe").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("starting_balance", "-10").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn out_of_range_file_values_are_rejected() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        fs::write(manager.path(), r#"{"chart_width": 0}"#).unwrap();
        let err = manager.load().unwrap_err();
        assert!(err.to_string().contains("chart_width must be between 5 and 120"));

        fs::write(manager.path(), r#"{"starting_balance": -50.0}"#).unwrap();
        assert!(matches!(manager.load(), Err(TrackerError::Config(_))));
    }
}
