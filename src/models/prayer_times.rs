//! Core data model: daily prayer times in, sleep schedule out.
//!
//! `DailyPrayerTimes` keeps the six time fields as the raw strings received
//! from the upstream provider; only `fajr` and `isha` are interpreted, the
//! rest pass through untouched. Parsing happens inside the optimizer so a
//! malformed upstream value fails loudly instead of being defaulted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::time::WallClockTime;

/// Canonical prayer timestamps for one calendar date at one location.
///
/// Times are local wall-clock strings (`"HH:MM"` or `"HH:MM:SS"`).
/// `fajr` is interpreted as occurring on `date + 1 day` relative to `isha`
/// on `date`: the pre-dawn prayer of the morning that ends a dusk-to-dawn
/// sleep window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrayerTimes {
    /// Calendar date the evening prayer falls on.
    pub date: NaiveDate,
    /// Pre-dawn prayer (belongs to the following morning).
    pub fajr: String,
    pub sunrise: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    /// Evening prayer, anchor for sleep onset.
    pub isha: String,
}

impl DailyPrayerTimes {
    /// Construct with only the two fields the optimizer consumes populated.
    /// The pass-through fields are left empty.
    pub fn from_isha_fajr(
        date: NaiveDate,
        isha: impl Into<String>,
        fajr: impl Into<String>,
    ) -> Self {
        Self {
            date,
            fajr: fajr.into(),
            sunrise: String::new(),
            dhuhr: String::new(),
            asr: String::new(),
            maghrib: String::new(),
            isha: isha.into(),
        }
    }
}

/// Recommended sleep window for one night.
///
/// `sleep_end` is understood to occur on the day following `date`.
/// Produced fresh by each optimizer call; immutable, no identity beyond
/// its date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSchedule {
    /// Same date as the input `DailyPrayerTimes`.
    pub date: NaiveDate,
    pub sleep_start: WallClockTime,
    pub sleep_end: WallClockTime,
    /// Hours of sleep, rounded to 2 decimal places.
    pub duration_hours: f64,
    /// Echoed input, for traceability.
    pub isha_time: String,
    /// Echoed input, for traceability.
    pub fajr_time: String,
    /// Which branch of the policy produced this result.
    pub notes: String,
}
