//! Pure panchanga segment math: name tables and index lookups.
//!
//! This crate provides:
//! - Tithi (30 segments of Moon-Sun elongation, 12 deg each)
//! - Nakshatra (27 sidereal mansions, 13 deg 20' each)
//! - Yoga (27 segments of the sidereal longitude sum)
//! - Karana (11 named types over 60 half-tithi slots)
//! - Vaara (7 weekdays) and Rashi (12 sidereal signs)
//!
//! All functions are pure: longitude in, classified segment out. Index
//! fields are the source of truth; names are derived lookups, and every
//! index is reduced modulo its cycle length before touching a name table.
//!
//! Clean-room implementation from standard Vedic panchanga conventions.

pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod vaara;
pub mod yoga;

pub use karana::{ALL_KARANAS, KARANA_SEGMENT_DEG, KARANA_TABLE, Karana, KaranaInfo, karana_from_elongation};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, rashi_from_longitude};
pub use tithi::{
    ALL_TITHI_NAMES, Paksha, TITHI_SEGMENT_DEG, TithiInfo, tithi_from_elongation,
};
pub use util::normalize_360;
pub use vaara::{ALL_VAARAS, Vaara, vaara_from_jd};
pub use yoga::{ALL_YOGA_NAMES, YOGA_SEGMENT_DEG, YogaInfo, yoga_from_sum};
