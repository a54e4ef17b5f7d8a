//! Service layer for business logic.
//!
//! The optimizer is the only service: upstream prayer-time lookup and
//! downstream calendar/notification concerns live outside this crate and
//! interact with it through plain values.

pub mod sleep_optimizer;

pub use sleep_optimizer::{
    compute_schedule, describe_time_remaining, time_remaining_until, time_until_sleep,
};
