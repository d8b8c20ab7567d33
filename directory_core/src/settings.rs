//! # Directory Settings
//!
//! Startup options shared by the GUI and TUI. There is no settings file;
//! front-ends start from [`DirectorySettings::default`] and validate before use.

use serde::{Deserialize, Serialize};

use crate::errors::{DirectoryError, DirectoryResult};
use crate::layout::LayoutMode;
use crate::records::DEFAULT_RECORD_COUNT;
use crate::table::USER_TABLE;

/// Largest record count whose ids stay three digits wide
pub const MAX_RECORD_COUNT: usize = 999;

/// Share of the width given to the master table in two-pane mode
pub const DEFAULT_MASTER_RATIO_PERCENT: u16 = 67;

/// Startup options for a directory session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectorySettings {
    /// Number of synthetic users to generate
    pub record_count: usize,

    /// Master pane width (percent) while the detail pane is open
    pub master_ratio_percent: u16,

    /// Table row height in pixels
    pub row_height: f32,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        DirectorySettings {
            record_count: DEFAULT_RECORD_COUNT,
            master_ratio_percent: DEFAULT_MASTER_RATIO_PERCENT,
            row_height: USER_TABLE.row_height,
        }
    }
}

impl DirectorySettings {
    pub fn with_record_count(mut self, record_count: usize) -> Self {
        self.record_count = record_count;
        self
    }

    pub fn with_master_ratio(mut self, percent: u16) -> Self {
        self.master_ratio_percent = percent;
        self
    }

    /// Check every field, returning the settings unchanged when valid.
    pub fn validate(self) -> DirectoryResult<Self> {
        if self.record_count > MAX_RECORD_COUNT {
            return Err(DirectoryError::invalid_setting(
                "record_count",
                self.record_count.to_string(),
                format!("at most {} users keep ids three digits wide", MAX_RECORD_COUNT),
            ));
        }
        if !(10..=90).contains(&self.master_ratio_percent) {
            return Err(DirectoryError::invalid_setting(
                "master_ratio_percent",
                self.master_ratio_percent.to_string(),
                "must be between 10 and 90",
            ));
        }
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(DirectoryError::invalid_setting(
                "row_height",
                self.row_height.to_string(),
                "must be a positive number",
            ));
        }
        Ok(self)
    }

    /// Width portions (master, detail) out of 100 for `mode`
    pub fn column_portions(&self, mode: LayoutMode) -> (u16, u16) {
        match mode {
            LayoutMode::Single => (100, 0),
            LayoutMode::MasterDetail => (
                self.master_ratio_percent,
                100 - self.master_ratio_percent,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DirectorySettings::default().validate().unwrap();
        assert_eq!(settings.record_count, 100);
        assert_eq!(settings.master_ratio_percent, 67);
        assert_eq!(settings.row_height, 30.0);
    }

    #[test]
    fn test_record_count_limit() {
        assert!(DirectorySettings::default().with_record_count(999).validate().is_ok());
        assert!(DirectorySettings::default().with_record_count(0).validate().is_ok());

        let err = DirectorySettings::default()
            .with_record_count(1000)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::invalid_setting(
                "record_count",
                "1000",
                "at most 999 users keep ids three digits wide"
            )
        );
    }

    #[test]
    fn test_ratio_limits() {
        assert!(DirectorySettings::default().with_master_ratio(9).validate().is_err());
        assert!(DirectorySettings::default().with_master_ratio(91).validate().is_err());
        assert!(DirectorySettings::default().with_master_ratio(50).validate().is_ok());
    }

    #[test]
    fn test_row_height_must_be_positive() {
        let settings = DirectorySettings {
            row_height: 0.0,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap_err().error_code(), "INVALID_SETTING");
    }

    #[test]
    fn test_column_portions() {
        let settings = DirectorySettings::default();
        assert_eq!(settings.column_portions(LayoutMode::Single), (100, 0));
        assert_eq!(settings.column_portions(LayoutMode::MasterDetail), (67, 33));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: DirectorySettings = serde_json::from_str(r#"{"record_count": 5}"#).unwrap();
        assert_eq!(settings.record_count, 5);
        assert_eq!(settings.master_ratio_percent, DEFAULT_MASTER_RATIO_PERCENT);
    }
}
