//! Tithi (lunar day) classification from Moon-Sun elongation.
//!
//! The synodic month is divided into 30 tithis of 12 degrees of elongation
//! each. The first 15 form the bright half (Shukla paksha, ending in
//! Purnima), the last 15 the dark half (Krishna paksha, ending in
//! Amavasya). The 30-entry name table encodes the repetition of the 14
//! shared names across both halves.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation: 360/30.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// The 30 tithi names in elongation order.
///
/// Indices 0-14 are the bright half (ending in Purnima), 15-29 the dark
/// half (ending in Amavasya).
pub const ALL_TITHI_NAMES: [&str; 30] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima",
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Amavasya",
];

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    /// Sanskrit name of the paksha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Result of tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 0-based index in the 30-tithi cycle (0 = Shukla Pratipada).
    pub tithi_index: u8,
    /// Tithi name from the 30-entry table.
    pub name: &'static str,
    /// Which half of the lunar month the tithi falls in.
    pub paksha: Paksha,
}

/// Determine the tithi from Moon-Sun elongation in degrees.
///
/// `tithi_index = floor((elongation mod 360) / 12)`, always in [0, 29].
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SEGMENT_DEG).floor() as usize).min(29);
    let paksha = if idx < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        tithi_index: idx as u8,
        name: ALL_TITHI_NAMES[idx],
        paksha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_always_in_range() {
        for i in 0..720 {
            let info = tithi_from_elongation(i as f64 * 0.5 - 90.0);
            assert!(info.tithi_index <= 29);
        }
    }

    #[test]
    fn first_tithi_is_shukla_pratipada() {
        let info = tithi_from_elongation(0.0);
        assert_eq!(info.tithi_index, 0);
        assert_eq!(info.name, "Pratipada");
        assert_eq!(info.paksha, Paksha::Shukla);
    }

    #[test]
    fn paksha_boundary_at_purnima() {
        // tithi 14 is Purnima (bright half), tithi 15 opens the dark half.
        let purnima = tithi_from_elongation(14.0 * 12.0 + 6.0);
        assert_eq!(purnima.tithi_index, 14);
        assert_eq!(purnima.name, "Purnima");
        assert_eq!(purnima.paksha, Paksha::Shukla);

        let dark_first = tithi_from_elongation(15.0 * 12.0 + 6.0);
        assert_eq!(dark_first.tithi_index, 15);
        assert_eq!(dark_first.name, "Pratipada");
        assert_eq!(dark_first.paksha, Paksha::Krishna);
    }

    #[test]
    fn last_tithi_is_amavasya() {
        let info = tithi_from_elongation(359.9);
        assert_eq!(info.tithi_index, 29);
        assert_eq!(info.name, "Amavasya");
        assert_eq!(info.paksha, Paksha::Krishna);
    }

    #[test]
    fn ekadashi_in_both_halves() {
        assert_eq!(tithi_from_elongation(10.0 * 12.0).name, "Ekadashi");
        assert_eq!(tithi_from_elongation(25.0 * 12.0).name, "Ekadashi");
    }

    #[test]
    fn negative_elongation_wraps() {
        let info = tithi_from_elongation(-6.0);
        assert_eq!(info.tithi_index, 29);
    }
}
