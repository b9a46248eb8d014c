//! Week aggregation: seven independent daily computations.

use saptaha_engine::{CalendarDay, EngineError, Ephemeris, Location, compute_day};
use saptaha_time::LocalDate;

use crate::observance::{Observance, detect_observances};

/// Compute the panchanga and detect observances for a 7-day window
/// starting at `start` (inclusive).
///
/// Days are independent of each other; the returned day list always
/// matches input date order, and observances keep (date, rule) order.
pub fn week_data(
    eph: &dyn Ephemeris,
    start: LocalDate,
    location: &Location,
) -> Result<(Vec<CalendarDay>, Vec<Observance>), EngineError> {
    let days = (0..7)
        .map(|i| compute_day(eph, start.plus_days(i), location))
        .collect::<Result<Vec<_>, _>>()?;
    let observances = days.iter().flat_map(detect_observances).collect();
    Ok((days, observances))
}
