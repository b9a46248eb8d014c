//! Built-in low-precision analytic ephemeris.
//!
//! Truncated series for solar and lunar tropical longitudes (roughly
//! 0.01 deg and 0.3 deg accuracy over 1800-2200), a linear Lahiri
//! ayanamsha model, and hour-angle sunrise with one refinement pass.
//!
//! Clean-room implementation from public astronomical formulas. Good
//! enough for calendar classification, where segment boundaries are
//! degrees wide; not suitable for eclipse or occultation work.

use saptaha_base::normalize_360;

use crate::ephemeris::{Body, Ephemeris};
use crate::error::EphemerisError;

/// JD of 1800-01-01 0h UT, lower bound of the fitted range.
const JD_MIN: f64 = 2_378_496.5;
/// JD of 2200-01-01 0h UT, upper bound of the fitted range.
const JD_MAX: f64 = 2_524_593.5;

const J2000: f64 = 2_451_545.0;

/// Analytic Sun/Moon provider with no external data files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxEphemeris;

impl ApproxEphemeris {
    pub fn new() -> Self {
        Self
    }
}

fn centuries(jd: f64) -> f64 {
    (jd - J2000) / 36525.0
}

fn check_range(jd: f64) -> Result<(), EphemerisError> {
    if !(JD_MIN..=JD_MAX).contains(&jd) {
        return Err(EphemerisError::Unavailable("epoch outside 1800-2200"));
    }
    Ok(())
}

/// Mean solar anomaly in degrees.
fn sun_mean_anomaly(t: f64) -> f64 {
    357.52911 + 35999.05029 * t - 0.0001537 * t * t
}

/// Geometric mean solar longitude in degrees.
fn sun_mean_longitude(t: f64) -> f64 {
    280.46646 + 36000.76983 * t + 0.0003032 * t * t
}

/// True tropical longitude of the Sun in degrees.
fn sun_longitude(jd: f64) -> f64 {
    let t = centuries(jd);
    let l0 = sun_mean_longitude(t);
    let m = sun_mean_anomaly(t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    normalize_360(l0 + c)
}

/// Tropical longitude of the Moon in degrees (principal terms).
fn moon_longitude(jd: f64) -> f64 {
    let t = centuries(jd);
    // Mean elements (degrees)
    let lp = 218.316_447_7 + 481_267.881_234_21 * t; // mean longitude
    let d = 297.850_192_1 + 445_267.111_403_4 * t; // mean elongation
    let m = 357.529_109_2 + 35_999.050_290_9 * t; // solar anomaly
    let mp = 134.963_396_4 + 477_198.867_505_5 * t; // lunar anomaly
    let f = 93.272_095_0 + 483_202.017_523_3 * t; // argument of latitude

    let (d, m, mp, f) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let correction = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin();

    normalize_360(lp + correction)
}

/// Lahiri ayanamsha, linear model: ~23.857 deg at J2000, 50.29"/year.
fn lahiri_ayanamsha(jd: f64) -> f64 {
    let t = centuries(jd);
    23.856_75 + 1.396_97 * t
}

/// Mean obliquity of the ecliptic in degrees.
fn obliquity(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t
}

/// Equation of time in minutes (true solar time minus mean solar time).
fn equation_of_time(jd: f64) -> f64 {
    let t = centuries(jd);
    let eps = obliquity(t).to_radians();
    let l0 = sun_mean_longitude(t).to_radians();
    let m = sun_mean_anomaly(t).to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t;
    let y = (eps / 2.0).tan().powi(2);

    let e_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * e_rad.to_degrees()
}

/// Solar declination in degrees at `jd`.
fn sun_declination(jd: f64) -> f64 {
    let t = centuries(jd);
    let eps = obliquity(t).to_radians();
    let lambda = sun_longitude(jd).to_radians();
    (eps.sin() * lambda.sin()).asin().to_degrees()
}

/// Sunrise hour angle in degrees, or None when the sun never crosses the
/// horizon (polar day/night). Uses the standard -0.8333 deg altitude for
/// refraction plus the solar semidiameter.
fn sunrise_hour_angle(latitude_deg: f64, declination_deg: f64) -> Option<f64> {
    let phi = latitude_deg.to_radians();
    let delta = declination_deg.to_radians();
    let h0 = (-0.8333_f64).to_radians();
    let cos_h = (h0.sin() - phi.sin() * delta.sin()) / (phi.cos() * delta.cos());
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(cos_h.acos().to_degrees())
}

/// Sunrise UT in minutes after 0h for the given instant's solar geometry.
fn sunrise_minutes_at(jd_estimate: f64, latitude_deg: f64, longitude_deg: f64)
-> Result<f64, EphemerisError> {
    let decl = sun_declination(jd_estimate);
    let hour_angle =
        sunrise_hour_angle(latitude_deg, decl).ok_or(EphemerisError::NoSunrise)?;
    let eot = equation_of_time(jd_estimate);
    Ok(720.0 - 4.0 * (longitude_deg + hour_angle) - eot)
}

impl Ephemeris for ApproxEphemeris {
    fn longitude(&self, jd: f64, body: Body) -> Result<f64, EphemerisError> {
        check_range(jd)?;
        Ok(match body {
            Body::Sun => sun_longitude(jd),
            Body::Moon => moon_longitude(jd),
        })
    }

    fn sunrise(
        &self,
        jd: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, EphemerisError> {
        check_range(jd)?;
        // First pass at approximate local noon, second at the estimate.
        let noon = jd + 0.5 - longitude_deg / 360.0;
        let first = sunrise_minutes_at(noon, latitude_deg, longitude_deg)?;
        let refined =
            sunrise_minutes_at(jd + first / 1440.0, latitude_deg, longitude_deg)?;
        Ok(jd + refined / 1440.0)
    }

    fn ayanamsha(&self, jd: f64) -> Result<f64, EphemerisError> {
        check_range(jd)?;
        Ok(lahiri_ayanamsha(jd))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_longitude_at_equinox() {
        // 2024-03-20 03:06 UT equinox: solar longitude crosses 0.
        let jd = 2_460_389.5 + 3.1 / 24.0;
        let lon = sun_longitude(jd);
        assert!(lon < 0.2 || lon > 359.8, "got {lon}");
    }

    #[test]
    fn moon_advances_about_13_degrees_per_day() {
        let jd = 2_460_324.5;
        let delta = normalize_360(moon_longitude(jd + 1.0) - moon_longitude(jd));
        assert!((11.5..=15.5).contains(&delta), "got {delta}");
    }

    #[test]
    fn sun_advances_about_1_degree_per_day() {
        let jd = 2_460_324.5;
        let delta = normalize_360(sun_longitude(jd + 1.0) - sun_longitude(jd));
        assert!((0.9..=1.1).contains(&delta), "got {delta}");
    }

    #[test]
    fn lahiri_near_24_19_in_2024() {
        let jd = 2_460_324.5; // 2024-01-15
        let aya = lahiri_ayanamsha(jd);
        assert!((aya - 24.19).abs() < 0.1, "got {aya}");
    }

    #[test]
    fn elongation_small_near_known_new_moon() {
        // New moon 2024-02-09 22:59 UT; half a day earlier the elongation
        // sits in the final tithi segment.
        let jd = 2_460_350.0; // 2024-02-09 12:00 UT
        let elong = normalize_360(moon_longitude(jd) - sun_longitude(jd));
        assert!((348.0..360.0).contains(&elong), "got {elong}");
    }

    #[test]
    fn new_jersey_summer_sunrise() {
        // 2024-06-21, Newark: sunrise ~09:25 UT.
        let eph = ApproxEphemeris::new();
        let jd = 2_460_482.5;
        let rise = eph.sunrise(jd, 40.7128, -74.2060).unwrap();
        let ut_hours = (rise - jd) * 24.0;
        assert!((9.0..10.0).contains(&ut_hours), "got {ut_hours}");
    }

    #[test]
    fn new_jersey_winter_sunrise() {
        // 2024-12-21, Newark: sunrise ~12:17 UT.
        let eph = ApproxEphemeris::new();
        let jd = 2_460_665.5;
        let rise = eph.sunrise(jd, 40.7128, -74.2060).unwrap();
        let ut_hours = (rise - jd) * 24.0;
        assert!((11.8..12.8).contains(&ut_hours), "got {ut_hours}");
    }

    #[test]
    fn polar_night_reports_no_sunrise() {
        let eph = ApproxEphemeris::new();
        // Svalbard in late December
        let jd = 2_460_665.5;
        assert_eq!(
            eph.sunrise(jd, 78.22, 15.65),
            Err(EphemerisError::NoSunrise)
        );
    }

    #[test]
    fn epoch_out_of_range_is_unavailable() {
        let eph = ApproxEphemeris::new();
        assert!(eph.longitude(1_000_000.0, Body::Sun).is_err());
        assert!(eph.ayanamsha(3_000_000.0).is_err());
    }
}
