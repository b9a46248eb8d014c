//! The ephemeris oracle contract and geographic location.

use crate::error::EphemerisError;

/// Bodies the calendar computation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Source of astronomical positions and events.
///
/// The engine treats this as a pure oracle: no caching or retry contract
/// beyond "may be unavailable". All longitudes are tropical ecliptic
/// degrees in [0, 360); all instants are Julian Day UT.
pub trait Ephemeris {
    /// Tropical ecliptic longitude of `body` at `jd`.
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError>;

    /// Julian Day of sunrise on the civil day starting at `jd` (0h UT)
    /// for the given geographic coordinates (east longitude positive).
    fn sunrise(&self, jd: f64, latitude_deg: f64, longitude_deg: f64)
    -> Result<f64, EphemerisError>;

    /// Sidereal correction (ayanamsha) in degrees at `jd`.
    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError>;
}

/// Geographic location with its fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Offset from UTC in hours (EST = -5.0).
    pub utc_offset_hours: f64,
}

impl Location {
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        }
    }
}

impl Default for Location {
    /// New Jersey, USA (EST), the traditional configuration default.
    fn default() -> Self {
        Self::new(40.7128, -74.2060, -5.0)
    }
}
