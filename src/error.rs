//! Error types for schedule computation.
//!
//! The core is pure and fails synchronously: malformed upstream time text
//! is surfaced to the caller, never clamped or replaced with a default.

/// Result type for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Error type for schedule computation and time parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// Time text did not parse as a wall-clock time.
    /// Covers both structural failures (too few fields, non-numeric) and
    /// out-of-range components (hour > 23, minute > 59).
    #[error("invalid time format '{input}': {reason}")]
    InvalidTimeFormat { input: String, reason: String },

    /// Policy configuration failed validation before use.
    #[error("invalid sleep policy: {0}")]
    InvalidPolicy(String),
}

impl ScheduleError {
    /// Create an invalid-time-format error.
    pub fn invalid_time(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-policy error.
    pub fn invalid_policy(message: impl Into<String>) -> Self {
        Self::InvalidPolicy(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_display() {
        let err = ScheduleError::invalid_time("25:99", "hour out of range");
        assert_eq!(
            err.to_string(),
            "invalid time format '25:99': hour out of range"
        );
    }

    #[test]
    fn test_invalid_policy_display() {
        let err = ScheduleError::invalid_policy("min_duration_hours exceeds max_duration_hours");
        assert!(err.to_string().starts_with("invalid sleep policy:"));
    }
}
