//! Golden-value tests for sunrise-anchored panchanga computation.
//!
//! Uses a scripted oracle so attribute math is verified independently of
//! any real ephemeris model.

use saptaha_base::{Paksha, normalize_360};
use saptaha_engine::{
    Body, Ephemeris, EngineError, EphemerisError, Location, compute_chart, compute_day,
};
use saptaha_time::LocalDate;

/// Oracle with a fixed sun, a moon advancing at a constant rate, and a
/// sunrise at a fixed UT hour every day.
struct ScriptedEphemeris {
    epoch_jd: f64,
    sun_lon: f64,
    moon_at_epoch: f64,
    moon_rate_deg_per_day: f64,
    ayanamsha: f64,
    sunrise_ut_hours: f64,
}

impl Ephemeris for ScriptedEphemeris {
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        Ok(match body {
            Body::Sun => self.sun_lon,
            Body::Moon => normalize_360(
                self.moon_at_epoch + (jd - self.epoch_jd) * self.moon_rate_deg_per_day,
            ),
        })
    }

    fn sunrise(&self, jd: f64, _lat: f64, _lon: f64) -> Result<f64, EphemerisError> {
        Ok(jd + self.sunrise_ut_hours / 24.0)
    }

    fn ayanamsha(&self, _jd: f64) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsha)
    }
}

/// Oracle that always fails.
struct DownEphemeris;

impl Ephemeris for DownEphemeris {
    fn longitude(&self, _jd: f64, _body: Body) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("down"))
    }
    fn sunrise(&self, _jd: f64, _lat: f64, _lon: f64) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("down"))
    }
    fn ayanamsha(&self, _jd: f64) -> Result<f64, EphemerisError> {
        Err(EphemerisError::Unavailable("down"))
    }
}

fn date(s: &str) -> LocalDate {
    s.parse().unwrap()
}

/// Moon pinned so the elongation at sunrise lands mid-Ekadashi (tithi 10).
fn ekadashi_oracle(start: LocalDate) -> ScriptedEphemeris {
    ScriptedEphemeris {
        epoch_jd: start.jd_midnight() + 11.75 / 24.0,
        sun_lon: 100.0,
        moon_at_epoch: normalize_360(100.0 + 10.0 * 12.0 + 6.0),
        moon_rate_deg_per_day: 12.0,
        ayanamsha: 24.0,
        sunrise_ut_hours: 11.75,
    }
}

#[test]
fn attributes_evaluated_at_sunrise() {
    let start = date("2024-01-15");
    let eph = ekadashi_oracle(start);
    let day = compute_day(&eph, start, &Location::default()).unwrap();

    assert_eq!(day.tithi, "Ekadashi");
    assert_eq!(day.tithi_index, 10);
    assert_eq!(day.paksha, Paksha::Shukla);
    // Moon sidereal = 226 - 24 = 202 -> nakshatra 15 (Vishakha)
    assert_eq!(day.nakshatra, "Vishakha");
    // Sum sidereal = 76 + 202 = 278 -> yoga floor(278/13.33) = 20 (Siddha)
    assert_eq!(day.yoga, "Siddha");
    // Elongation 126 -> slot 21 -> (21-1) mod 7 = 6 -> Vishti
    assert_eq!(day.karana, "Vishti");
    // 2024-01-15 was a Monday
    assert_eq!(day.vaara, "Somavara");
    // 11:45 UT at offset -5 is 06:45 local
    assert_eq!(day.sunrise.to_string(), "06:45");
}

#[test]
fn moon_rate_advances_tithi_daily() {
    let start = date("2024-01-15");
    let eph = ekadashi_oracle(start);
    let loc = Location::default();
    for offset in 0..7 {
        let day = compute_day(&eph, start.plus_days(offset), &loc).unwrap();
        assert_eq!(day.tithi_index, 10 + offset as u8);
    }
}

#[test]
fn dark_half_tithi_names() {
    let start = date("2024-01-15");
    let mut eph = ekadashi_oracle(start);
    // Elongation 15 tithis in: first name of the dark half.
    eph.moon_at_epoch = normalize_360(eph.sun_lon + 15.0 * 12.0 + 3.0);
    let day = compute_day(&eph, start, &Location::default()).unwrap();
    assert_eq!(day.paksha, Paksha::Krishna);
    assert_eq!(day.tithi, "Pratipada");
    assert_eq!(day.tithi_index, 15);
}

#[test]
fn oracle_fault_propagates() {
    let res = compute_day(&DownEphemeris, date("2024-01-15"), &Location::default());
    assert!(matches!(res, Err(EngineError::Ephemeris(_))));
}

#[test]
fn chart_known_sidereal_longitude() {
    // Moon sidereal 100.0 -> nakshatra 7 (Pushya), rashi 3 (Karka).
    let eph = ScriptedEphemeris {
        epoch_jd: 0.0,
        sun_lon: 0.0,
        moon_at_epoch: 124.0,
        moon_rate_deg_per_day: 0.0,
        ayanamsha: 24.0,
        sunrise_ut_hours: 11.75,
    };
    let chart = compute_chart(&eph, "1990-01-01", "10:30", -5.0).unwrap();
    assert_eq!(chart.nakshatra_index, 7);
    assert_eq!(chart.rashi_index, 3);
    assert_eq!(chart.nakshatra.value(), "Pushya");
    assert_eq!(chart.rashi.value(), "Karka");
}

#[test]
fn chart_override_beats_computed() {
    let eph = ScriptedEphemeris {
        epoch_jd: 0.0,
        sun_lon: 0.0,
        moon_at_epoch: 124.0,
        moon_rate_deg_per_day: 0.0,
        ayanamsha: 24.0,
        sunrise_ut_hours: 11.75,
    };
    let chart = compute_chart(&eph, "1990-01-01", "10:30", -5.0)
        .unwrap()
        .with_overrides(Some("Rohini".to_string()), None);
    assert_eq!(chart.nakshatra.value(), "Rohini");
    assert_eq!(chart.nakshatra.computed, "Pushya");
    assert_eq!(chart.rashi.value(), "Karka");
}

#[test]
fn chart_malformed_input_is_input_error() {
    let eph = ekadashi_oracle(date("2024-01-15"));
    assert!(matches!(
        compute_chart(&eph, "1990/01/01", "10:30", -5.0),
        Err(EngineError::Input(_))
    ));
    assert!(matches!(
        compute_chart(&eph, "1990-01-01", "25:00", -5.0),
        Err(EngineError::Input(_))
    ));
}
