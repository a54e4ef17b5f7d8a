//! Sleep schedule optimization.
//!
//! Derives a recommended nightly sleep window from a day's prayer times.
//! Sleep onset is anchored to Isha plus a settling buffer; wake time is
//! pulled between two competing anchors, the next morning's Fajr and a
//! preferred early-riser pivot hour, then the duration is forced into the
//! policy's `[min, max]` bounds.
//!
//! `compute_schedule` is a pure function: no I/O, no clock reads, no shared
//! state. Concurrent calls with different inputs are independent. The only
//! impure operation in this module is [`time_until_sleep`], which reads the
//! local clock once per call.

use chrono::{Days, NaiveDateTime, TimeDelta};
use log::{debug, warn};

use crate::config::SleepPolicy;
use crate::error::ScheduleResult;
use crate::models::{DailyPrayerTimes, SleepSchedule, WallClockTime};

/// Compute the recommended sleep window for one night.
///
/// Algorithm:
/// 1. Sleep starts at Isha plus `isha_buffer_minutes`.
/// 2. The latest acceptable wake instant is Fajr (next morning) minus
///    `fajr_buffer_minutes`.
/// 3. When the dusk-to-dawn window is at least
///    `pivot_margin_threshold_hours` and the pivot hour falls strictly
///    before the Fajr hour, wake at the pivot instead.
/// 4. The resulting duration is clamped to `[min, max]`: a too-short night
///    moves sleep start earlier (the wake anchor wins), a too-long night
///    moves the wake instant earlier in absolute terms (the onset anchor
///    wins).
///
/// # Errors
/// Returns `ScheduleError::InvalidTimeFormat` when `isha` or `fajr` does
/// not parse as a wall-clock time, and `ScheduleError::InvalidPolicy` when
/// the policy fails validation. Malformed upstream data is never replaced
/// with a default.
pub fn compute_schedule(
    prayer_times: &DailyPrayerTimes,
    policy: &SleepPolicy,
) -> ScheduleResult<SleepSchedule> {
    policy.validate()?;

    let isha: WallClockTime = prayer_times.isha.parse()?;
    let fajr: WallClockTime = prayer_times.fajr.parse()?;

    let date = prayer_times.date;
    let next_day = date + Days::new(1);

    let mut sleep_start_dt =
        date.and_time(isha.to_naive_time()) + TimeDelta::minutes(policy.isha_buffer_minutes);

    // Fajr belongs to the following morning of a dusk-to-dawn window.
    let fajr_dt = next_day.and_time(fajr.to_naive_time());
    let latest_wake = fajr_dt - TimeDelta::minutes(policy.fajr_buffer_minutes);
    let pivot_dt = next_day.and_time(
        WallClockTime::new(policy.pivot_wake_hour, 0)?.to_naive_time(),
    );

    let available_hours = hours_between(sleep_start_dt, fajr_dt);

    let (mut wake_dt, mut notes) = if available_hours >= policy.pivot_margin_threshold_hours {
        // Enough slack above the maximum to consider the pivot, but only
        // when the pivot lands strictly before the Fajr hour.
        if policy.pivot_wake_hour < fajr.hour() {
            debug!(
                "{}: pivot wake at {:02}:00 ({:.2}h window)",
                date, policy.pivot_wake_hour, available_hours
            );
            (
                pivot_dt,
                format!(
                    "Wake early at {}:00 for maximum productivity before Fajr",
                    policy.pivot_wake_hour
                ),
            )
        } else {
            (latest_wake, "Wake at Fajr time".to_string())
        }
    } else if available_hours >= policy.min_duration_hours {
        (latest_wake, "Wake at Fajr time".to_string())
    } else {
        // Shouldn't happen with sane upstream data (Isha later than Fajr,
        // or a pathologically short night). Flag it and keep going; the
        // bounds pass below restores the minimum.
        warn!(
            "{}: available sleep window {:.2}h is below minimum {:.2}h (isha={}, fajr={})",
            date, available_hours, policy.min_duration_hours, prayer_times.isha, prayer_times.fajr
        );
        (
            latest_wake,
            "Warning: Less than minimum sleep duration available".to_string(),
        )
    };

    let mut duration_hours = round2(hours_between(sleep_start_dt, wake_dt));

    // Bounds enforcement. The two violation directions move different
    // endpoints: below-minimum keeps the wake anchor and pulls sleep start
    // earlier, above-maximum keeps the onset anchor and pulls the wake
    // instant in.
    if duration_hours < policy.min_duration_hours {
        sleep_start_dt = wake_dt - hours_delta(policy.min_duration_hours);
        duration_hours = policy.min_duration_hours;
        notes = format!(
            "Adjusted to minimum {} hours (may overlap with Isha buffer)",
            policy.min_duration_hours
        );
    } else if duration_hours > policy.max_duration_hours {
        wake_dt = sleep_start_dt + hours_delta(policy.max_duration_hours);
        duration_hours = policy.max_duration_hours;
        notes = format!("Capped at maximum {} hours", policy.max_duration_hours);
    }

    Ok(SleepSchedule {
        date,
        sleep_start: WallClockTime::from_naive_time(sleep_start_dt.time()),
        sleep_end: WallClockTime::from_naive_time(wake_dt.time()),
        duration_hours,
        isha_time: prayer_times.isha.clone(),
        fajr_time: prayer_times.fajr.clone(),
        notes,
    })
}

/// Time remaining until the schedule's sleep start, relative to `now`.
///
/// Schedules describe "tonight": when `date` + `sleep_start` is already in
/// the past, the start is reinterpreted as the next occurrence on
/// `date + 1` before comparing. Returns `None` if even the rolled-forward
/// instant has passed.
pub fn time_remaining_until(schedule: &SleepSchedule, now: NaiveDateTime) -> Option<TimeDelta> {
    let start_time = schedule.sleep_start.to_naive_time();
    let mut sleep_dt = schedule.date.and_time(start_time);

    if sleep_dt < now {
        sleep_dt = (schedule.date + Days::new(1)).and_time(start_time);
    }

    let remaining = sleep_dt - now;
    if remaining < TimeDelta::zero() {
        None
    } else {
        Some(remaining)
    }
}

/// Human-readable rendering of a remaining-time delta,
/// e.g. `"2 hours 30 minutes"` or `"45 minutes"`.
pub fn describe_time_remaining(remaining: TimeDelta) -> String {
    let total_minutes = remaining.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let minute_part = format!("{} minute{}", minutes, if minutes == 1 { "" } else { "s" });
    if hours > 0 {
        format!(
            "{} hour{} {}",
            hours,
            if hours == 1 { "" } else { "s" },
            minute_part
        )
    } else {
        minute_part
    }
}

/// Time remaining until sleep start as display text, evaluated against the
/// local clock. Reads the clock once per call; never cached.
pub fn time_until_sleep(schedule: &SleepSchedule) -> Option<String> {
    let now = chrono::Local::now().naive_local();
    time_remaining_until(schedule, now).map(describe_time_remaining)
}

fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_seconds() as f64 / 3600.0
}

fn hours_delta(hours: f64) -> TimeDelta {
    TimeDelta::seconds((hours * 3600.0).round() as i64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
