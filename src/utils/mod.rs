//! Utility functions and helpers
//!
//! This module contains UTC calendar helpers.

pub mod time;

pub use time::{day_label, end_of_day, parse_date_param, start_of_day, utc_day, DayBound};
