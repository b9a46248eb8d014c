//! Birth chart: natal nakshatra and rashi from a birth instant.

use serde::Serialize;

use saptaha_base::{nakshatra_from_longitude, normalize_360, rashi_from_longitude};
use saptaha_time::{LocalDate, LocalTime, calendar_to_jd};

use crate::ephemeris::{Body, Ephemeris};
use crate::error::EngineError;

/// A value that may be overridden by explicit configuration.
///
/// Explicit config beats derived astronomy: `value()` is the single
/// resolution point, so callers never branch on the override themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provided<T> {
    pub computed: T,
    pub manual: Option<T>,
}

impl<T> Provided<T> {
    pub fn computed(computed: T) -> Self {
        Self {
            computed,
            manual: None,
        }
    }

    /// The effective value: manual when present, computed otherwise.
    pub fn value(&self) -> &T {
        self.manual.as_ref().unwrap_or(&self.computed)
    }
}

/// Natal nakshatra and rashi, produced once from a birth instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChart {
    /// 0-based natal nakshatra index in [0, 26].
    pub nakshatra_index: u8,
    /// 0-based natal rashi index in [0, 11].
    pub rashi_index: u8,
    pub nakshatra: Provided<String>,
    pub rashi: Provided<String>,
}

impl BirthChart {
    /// Apply manual overrides from configuration.
    pub fn with_overrides(mut self, nakshatra: Option<String>, rashi: Option<String>) -> Self {
        self.nakshatra.manual = nakshatra;
        self.rashi.manual = rashi;
        self
    }
}

/// Compute the birth chart from local birth date/time and UTC offset.
///
/// The local birth time converts to UT hours mod 24; day rollover is
/// handled implicitly by the Julian Day arithmetic. The sidereal moon
/// longitude at that instant yields the 27-way nakshatra split and the
/// 30-degree rashi split.
pub fn compute_chart(
    eph: &dyn Ephemeris,
    birth_date: &str,
    birth_time: &str,
    utc_offset_hours: f64,
) -> Result<BirthChart, EngineError> {
    let date: LocalDate = birth_date.parse()?;
    let time: LocalTime = birth_time.parse()?;

    let ut_hours = (time.as_hours() - utc_offset_hours).rem_euclid(24.0);
    let jd = calendar_to_jd(date.year, date.month, date.day as f64 + ut_hours / 24.0);

    let moon = eph.longitude(jd, Body::Moon)?;
    let ayanamsha = eph.ayanamsha(jd)?;
    let sidereal = normalize_360(moon - ayanamsha);

    let nakshatra = nakshatra_from_longitude(sidereal);
    let rashi = rashi_from_longitude(sidereal);

    Ok(BirthChart {
        nakshatra_index: nakshatra.nakshatra_index,
        rashi_index: rashi.index(),
        nakshatra: Provided::computed(nakshatra.nakshatra.name().to_string()),
        rashi: Provided::computed(rashi.name().to_string()),
    })
}
