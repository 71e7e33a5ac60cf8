//! Creation Timestamps
//!
//! Todos carry their creation time as display text, not as a date.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::config::CREATED_AT_FORMAT;

/// Format `at` as `YYYY-MM-DD HH:MM`
pub fn format_created_at<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format(CREATED_AT_FORMAT).to_string()
}

/// Current local time, formatted for a new todo
pub fn now() -> String {
    format_created_at(&Local::now())
}
