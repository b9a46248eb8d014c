//! Error types for calendar computation.
//!
//! Two fault families are kept apart: malformed inputs are the caller's
//! to correct, ephemeris faults belong to the external oracle. Neither is
//! retried here.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saptaha_time::TimeError;

/// Errors from the ephemeris oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The oracle cannot answer (missing data, out-of-range epoch, ...).
    Unavailable(&'static str),
    /// The sun does not rise at this location on this date.
    NoSunrise,
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::NoSunrise => write!(f, "sun does not rise at this location"),
        }
    }
}

impl Error for EphemerisError {}

/// Errors from the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    /// Malformed date/time/location input; caller-correctable.
    Input(TimeError),
    /// The ephemeris oracle could not answer; no calendar data can be
    /// synthesized without it.
    Ephemeris(EphemerisError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(e) => write!(f, "input error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for EngineError {}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Input(e)
    }
}

impl From<EphemerisError> for EngineError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
