//! Calendar and Julian Day arithmetic for the saptaha engine.
//!
//! This crate provides:
//! - Gregorian calendar <-> Julian Day conversion
//! - [`LocalDate`] and [`LocalTime`] with strict string parsing
//!
//! All conversions are pure arithmetic; time scales (UT vs TDB) are the
//! caller's concern. The panchanga convention works in JD UT throughout.

pub mod date;
pub mod error;
pub mod julian;

pub use date::{LocalDate, LocalTime};
pub use error::TimeError;
pub use julian::{calendar_to_jd, jd_to_calendar};
