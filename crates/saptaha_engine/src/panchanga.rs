//! Daily panchanga computation anchored at local sunrise.
//!
//! All five attributes are evaluated at the sunrise instant of the civil
//! date, not at local midnight. This is the defining convention of the
//! traditional calendar. Only the vaara follows the civil date itself.

use serde::Serialize;

use saptaha_base::{
    Paksha, karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation,
    vaara_from_jd, yoga_from_sum,
};
use saptaha_time::{LocalDate, LocalTime};

use crate::ephemeris::{Body, Ephemeris, Location};
use crate::error::EngineError;

/// The five classical calendar attributes of one civil date at one place.
///
/// Immutable once computed. Index fields are the source of truth; names
/// are table lookups over mod-reduced indices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: LocalDate,
    pub vaara: &'static str,
    pub tithi: &'static str,
    pub tithi_index: u8,
    pub paksha: Paksha,
    pub nakshatra: &'static str,
    pub yoga: &'static str,
    pub karana: &'static str,
    /// Sunrise wall-clock time at the location's UTC offset.
    pub sunrise: LocalTime,
}

/// Compute the panchanga for a civil date at a location.
///
/// Resolves the sunrise instant via the oracle, then evaluates tithi,
/// nakshatra, yoga, and karana at that instant. Oracle faults propagate;
/// nothing is synthesized without ephemeris data.
pub fn compute_day(
    eph: &dyn Ephemeris,
    date: LocalDate,
    location: &Location,
) -> Result<CalendarDay, EngineError> {
    let jd = date.jd_midnight();
    let sunrise_jd = eph.sunrise(jd, location.latitude_deg, location.longitude_deg)?;

    let sun = eph.longitude(sunrise_jd, Body::Sun)?;
    let moon = eph.longitude(sunrise_jd, Body::Moon)?;
    let ayanamsha = eph.ayanamsha(sunrise_jd)?;

    let tithi = tithi_from_elongation(moon - sun);
    let nakshatra = nakshatra_from_longitude(moon - ayanamsha);
    // Ayanamsha does not cancel in the sum, so both terms go sidereal.
    let yoga = yoga_from_sum((sun - ayanamsha) + (moon - ayanamsha));
    let karana = karana_from_elongation(moon - sun);
    let vaara = vaara_from_jd(jd);

    Ok(CalendarDay {
        date,
        vaara: vaara.name(),
        tithi: tithi.name,
        tithi_index: tithi.tithi_index,
        paksha: tithi.paksha,
        nakshatra: nakshatra.nakshatra.name(),
        yoga: yoga.name,
        karana: karana.karana.name(),
        sunrise: sunrise_local_time(sunrise_jd, location.utc_offset_hours),
    })
}

/// Convert a sunrise Julian Day (UT) to local wall-clock time.
///
/// The UT fractional component is shifted by the UTC offset and wrapped
/// into [0, 24) hours before formatting.
fn sunrise_local_time(sunrise_jd: f64, utc_offset_hours: f64) -> LocalTime {
    let ut_hours = (sunrise_jd.rem_euclid(1.0) - 0.5) * 24.0;
    let local = (ut_hours + utc_offset_hours).rem_euclid(24.0);
    let hour = local.floor();
    let minute = ((local - hour) * 60.0).floor();
    LocalTime {
        hour: hour as u32,
        minute: minute as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunrise_time_wraps_westward_offset() {
        // 11:45 UT at offset -5 -> 06:45 local
        let jd = 2_460_324.5 + 11.75 / 24.0;
        let t = sunrise_local_time(jd, -5.0);
        assert_eq!((t.hour, t.minute), (6, 45));
    }

    #[test]
    fn sunrise_time_wraps_past_midnight() {
        // 02:00 UT at offset -5 -> 21:00 local the previous civil day
        let jd = 2_460_324.5 + 2.0 / 24.0;
        let t = sunrise_local_time(jd, -5.0);
        assert_eq!((t.hour, t.minute), (21, 0));
    }

    #[test]
    fn sunrise_time_eastward_offset() {
        // 01:00 UT at offset +5.5 -> 06:30 local
        let jd = 2_460_324.5 + 1.0 / 24.0;
        let t = sunrise_local_time(jd, 5.5);
        assert_eq!((t.hour, t.minute), (6, 30));
    }
}
