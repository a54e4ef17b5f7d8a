//! # Sleepy Rust Core
//!
//! Prayer-aware sleep schedule optimization engine.
//!
//! Given the evening prayer (Isha) and pre-dawn prayer (Fajr) times for a
//! calendar day, this crate computes a recommended sleep window: onset
//! anchored to Isha plus a buffer, wake time anchored to Fajr or an early
//! pivot hour, duration forced into configurable `[min, max]` bounds.
//!
//! ## Features
//!
//! - **Schedule optimization**: [`services::compute_schedule`], a pure and
//!   deterministic function over immutable inputs
//! - **Wall-clock parsing**: [`models::WallClockTime`] for the `"HH:MM"` /
//!   `"HH:MM:SS"` text delivered by prayer-time providers
//! - **Time-until-sleep query**: [`services::time_remaining_until`] for
//!   presentation layers
//! - **Policy configuration**: [`config::SleepPolicy`] with defaults and
//!   TOML loading
//!
//! ## Architecture
//!
//! - [`models`]: immutable data types crossing the crate boundary
//! - [`services`]: the optimization logic
//! - [`config`]: the sleep policy and its validation
//! - [`error`]: the error taxonomy
//!
//! Upstream collaborators (prayer-time providers, caches, geocoding,
//! calendars, HTTP) are out of scope; they supply a [`models::DailyPrayerTimes`]
//! value per day and consume one [`models::SleepSchedule`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::SleepPolicy;
pub use error::{ScheduleError, ScheduleResult};
pub use models::{DailyPrayerTimes, SleepSchedule, WallClockTime};
pub use services::{compute_schedule, time_remaining_until, time_until_sleep};
