use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ScheduleError;

/// Wall-clock time of day (hour and minute, no date, no timezone).
///
/// Upstream prayer-time providers deliver times as `"HH:MM"` or
/// `"HH:MM:SS"` strings; seconds are ignored when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallClockTime {
    hour: u8,
    minute: u8,
}

impl WallClockTime {
    /// Create a new wall-clock time. Fails if the components are out of range.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ScheduleError> {
        if hour > 23 {
            return Err(ScheduleError::invalid_time(
                format!("{:02}:{:02}", hour, minute),
                "hour out of range 0-23",
            ));
        }
        if minute > 59 {
            return Err(ScheduleError::invalid_time(
                format!("{:02}:{:02}", hour, minute),
                "minute out of range 0-59",
            ));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Convert to a chrono time for date arithmetic.
    pub fn to_naive_time(&self) -> NaiveTime {
        // Components are range-checked at construction.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Create from a chrono time, discarding seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl FromStr for WallClockTime {
    type Err = ScheduleError;

    /// Parse `"HH:MM"` or `"HH:MM:SS"` (seconds ignored).
    ///
    /// Surrounding whitespace is trimmed. Fails when the text does not
    /// split into at least two numeric components, or when a component is
    /// out of range.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        let mut parts = trimmed.split(':');

        let hour_text = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ScheduleError::invalid_time(text, "expected HH:MM or HH:MM:SS"))?;
        let minute_text = parts
            .next()
            .ok_or_else(|| ScheduleError::invalid_time(text, "expected HH:MM or HH:MM:SS"))?;

        let hour: u8 = hour_text
            .parse()
            .map_err(|_| ScheduleError::invalid_time(text, "hour is not a number"))?;
        let minute: u8 = minute_text
            .parse()
            .map_err(|_| ScheduleError::invalid_time(text, "minute is not a number"))?;

        if hour > 23 {
            return Err(ScheduleError::invalid_time(text, "hour out of range 0-23"));
        }
        if minute > 59 {
            return Err(ScheduleError::invalid_time(text, "minute out of range 0-59"));
        }

        Ok(Self { hour, minute })
    }
}

impl fmt::Display for WallClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for WallClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
