//! User settings for Coinwise
//!
//! Manages user preferences: currency symbol, the weekday that starts a
//! weekly budget window, and whether record changes are audited.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::paths::CoinwisePaths;
use crate::error::CoinwiseError;

/// User settings for Coinwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used by `format_currency`
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// First day of week (0 = Sunday, 1 = Monday, ... 6 = Saturday)
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,

    /// Whether record mutations are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            first_day_of_week: default_first_day_of_week(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// The weekday a weekly budget window starts on.
    ///
    /// Out-of-range values fall back to Sunday.
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CoinwisePaths) -> Result<Self, CoinwiseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CoinwiseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CoinwiseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CoinwisePaths) -> Result<(), CoinwiseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CoinwiseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CoinwiseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
