//! Sleep policy configuration.
//!
//! Mirrors the process-wide sleep preferences: duration bounds, the
//! preferred pivot wake hour, and the buffers around the two anchor
//! prayers. A policy can be built from defaults or loaded from a TOML
//! file, and is validated before the optimizer will accept it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Sleep scheduling policy.
///
/// All fields have defaults; a TOML policy file may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SleepPolicy {
    /// Informational target duration; not enforced directly.
    pub default_duration_hours: f64,
    /// Hard lower bound on the output duration.
    pub min_duration_hours: f64,
    /// Hard upper bound on the output duration.
    pub max_duration_hours: f64,
    /// Preferred wake hour (0-23) used when ample margin exists.
    pub pivot_wake_hour: u8,
    /// Minutes added after Isha before sleep may start.
    pub isha_buffer_minutes: i64,
    /// Minutes subtracted from Fajr to get the latest acceptable wake instant.
    pub fajr_buffer_minutes: i64,
    /// Minimum available window, in hours, required before the pivot wake
    /// hour is considered. Deliberately a separate knob from
    /// `max_duration_hours` so the two can be tuned independently.
    pub pivot_margin_threshold_hours: f64,
}

impl Default for SleepPolicy {
    fn default() -> Self {
        Self {
            default_duration_hours: 7.0,
            min_duration_hours: 6.0,
            max_duration_hours: 7.5,
            pivot_wake_hour: 4,
            isha_buffer_minutes: 30,
            fajr_buffer_minutes: 0,
            pivot_margin_threshold_hours: 8.0,
        }
    }
}

impl SleepPolicy {
    /// Parse a policy from TOML text. Unset fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let policy: SleepPolicy =
            toml::from_str(text).context("Failed to parse sleep policy TOML")?;
        Ok(policy)
    }

    /// Load a policy from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read policy file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// Check internal consistency.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidPolicy` when the duration bounds are
    /// inverted or non-positive, the pivot hour is not a valid clock hour,
    /// a buffer is negative, or the pivot margin threshold sits below the
    /// maximum duration (which would let the pivot branch fire without
    /// enough slack).
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.min_duration_hours <= 0.0 {
            return Err(ScheduleError::invalid_policy(
                "min_duration_hours must be positive",
            ));
        }
        if self.min_duration_hours > self.max_duration_hours {
            return Err(ScheduleError::invalid_policy(format!(
                "min_duration_hours ({}) exceeds max_duration_hours ({})",
                self.min_duration_hours, self.max_duration_hours
            )));
        }
        if self.pivot_wake_hour > 23 {
            return Err(ScheduleError::invalid_policy(format!(
                "pivot_wake_hour ({}) must be in 0-23",
                self.pivot_wake_hour
            )));
        }
        if self.isha_buffer_minutes < 0 || self.fajr_buffer_minutes < 0 {
            return Err(ScheduleError::invalid_policy(
                "prayer buffers must be non-negative",
            ));
        }
        if self.pivot_margin_threshold_hours < self.max_duration_hours {
            return Err(ScheduleError::invalid_policy(format!(
                "pivot_margin_threshold_hours ({}) must be at least max_duration_hours ({})",
                self.pivot_margin_threshold_hours, self.max_duration_hours
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SleepPolicy;
    use std::io::Write;

    #[test]
    fn test_default_policy_values() {
        let policy = SleepPolicy::default();
        assert_eq!(policy.default_duration_hours, 7.0);
        assert_eq!(policy.min_duration_hours, 6.0);
        assert_eq!(policy.max_duration_hours, 7.5);
        assert_eq!(policy.pivot_wake_hour, 4);
        assert_eq!(policy.isha_buffer_minutes, 30);
        assert_eq!(policy.fajr_buffer_minutes, 0);
        assert_eq!(policy.pivot_margin_threshold_hours, 8.0);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let policy = SleepPolicy::from_toml_str(
            r#"
            min_duration_hours = 5.5
            pivot_wake_hour = 5
            "#,
        )
        .unwrap();
        assert_eq!(policy.min_duration_hours, 5.5);
        assert_eq!(policy.pivot_wake_hour, 5);
        // Unset fields keep their defaults.
        assert_eq!(policy.max_duration_hours, 7.5);
        assert_eq!(policy.isha_buffer_minutes, 30);
    }

    #[test]
    fn test_invalid_toml_fails() {
        assert!(SleepPolicy::from_toml_str("min_duration_hours = ").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_duration_hours = 8.0").unwrap();
        writeln!(file, "pivot_margin_threshold_hours = 8.5").unwrap();

        let policy = SleepPolicy::from_path(file.path()).unwrap();
        assert_eq!(policy.max_duration_hours, 8.0);
        assert_eq!(policy.pivot_margin_threshold_hours, 8.5);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(SleepPolicy::from_path("/nonexistent/policy.toml").is_err());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let policy = SleepPolicy {
            min_duration_hours: 8.0,
            max_duration_hours: 7.5,
            pivot_margin_threshold_hours: 8.0,
            ..SleepPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_bad_pivot_hour() {
        let policy = SleepPolicy {
            pivot_wake_hour: 24,
            ..SleepPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_negative_buffer() {
        let policy = SleepPolicy {
            fajr_buffer_minutes: -10,
            ..SleepPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_validate_threshold_below_max() {
        let policy = SleepPolicy {
            pivot_margin_threshold_hours: 7.0,
            ..SleepPolicy::default()
        };
        assert!(policy.validate().is_err());
    }
}
