//! Error types for calendar parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date/time parsing and calendar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string does not match `YYYY-MM-DD` or has out-of-range fields.
    InvalidDate(String),
    /// Time string does not match `HH:MM` or has out-of-range fields.
    InvalidTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s}"),
        }
    }
}

impl Error for TimeError {}
