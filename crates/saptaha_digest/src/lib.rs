//! Weekly digest assembly: observance detection, week aggregation, and
//! verse pairing.
//!
//! This crate provides:
//! - The stateless observance rule table over a single [`CalendarDay`]
//! - The week aggregator: seven independent daily computations
//! - The digest composer joining calendar data with retrieved verses and
//!   lifestyle notes
//!
//! Faults from inputs or the ephemeris abort digest construction; a
//! degraded or empty retrieval tier never does: the digest is always
//! produced, possibly with absent verses.

pub mod digest;
pub mod observance;
pub mod week;

pub use digest::{DailyVerse, MAX_LIFESTYLE_NOTES, WeeklyDigest, build_digest, format_digest};
pub use observance::{OBSERVANCE_RULES, Observance, ObservanceRule, detect_observances};
pub use week::week_data;

pub use saptaha_engine::CalendarDay;
