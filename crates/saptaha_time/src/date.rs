//! Civil date and wall-clock time with strict parsing.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A civil calendar date with no attached time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl LocalDate {
    /// Construct a date, validating month and day ranges.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(TimeError::InvalidDate(format!("{year}-{month}-{day}")));
        }
        // Reject days past the end of the month via a JD roundtrip.
        let d = Self { year, month, day };
        let (y2, m2, frac) = jd_to_calendar(d.jd_midnight());
        if (y2, m2, frac.floor() as u32) != (year, month, day) {
            return Err(TimeError::InvalidDate(format!("{year}-{month}-{day}")));
        }
        Ok(d)
    }

    /// Julian Day at 0h UT on this civil date.
    pub fn jd_midnight(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The date `n` whole days after this one.
    pub fn plus_days(&self, n: i64) -> Self {
        let (year, month, frac) = jd_to_calendar(self.jd_midnight() + n as f64);
        Self {
            year,
            month,
            day: frac.floor() as u32,
        }
    }
}

impl FromStr for LocalDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::InvalidDate(s.to_string());
        let mut parts = s.split('-');
        let year = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let month = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let day = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }
        Self::new(year, month, day)
    }
}

impl Display for LocalDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for LocalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A wall-clock time of day (minute resolution).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTime {
    pub hour: u32,
    pub minute: u32,
}

impl LocalTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::InvalidTime(format!("{hour}:{minute}")));
        }
        Ok(Self { hour, minute })
    }

    /// Time of day as fractional hours in [0, 24).
    pub fn as_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

impl FromStr for LocalTime {
    type Err = TimeError;

    /// Parse `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeError::InvalidTime(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        let hour = h.parse().map_err(|_| err())?;
        let minute = m.parse().map_err(|_| err())?;
        Self::new(hour, minute)
    }
}

impl Display for LocalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for LocalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
