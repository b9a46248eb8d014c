//! Yoga classification from the sum of sidereal Sun and Moon longitudes.
//!
//! The 27 yogas divide the sum (Moon_sid + Sun_sid) mod 360 into equal
//! segments of 13 deg 20'. Unlike tithi, the ayanamsha does not cancel in
//! the sum, so sidereal longitudes are required.

use crate::util::normalize_360;

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yoga names from Vishkambha to Vaidhriti.
pub const ALL_YOGA_NAMES: [&str; 27] = [
    "Vishkambha", "Priti", "Ayushman", "Saubhagya", "Shobhana",
    "Atiganda", "Sukarma", "Dhriti", "Shula", "Ganda",
    "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra",
    "Siddhi", "Vyatipata", "Variyan", "Parigha", "Shiva",
    "Siddha", "Sadhya", "Shubha", "Shukla", "Brahma",
    "Indra", "Vaidhriti",
];

/// Result of yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaInfo {
    /// 0-based index (0 = Vishkambha .. 26 = Vaidhriti).
    pub yoga_index: u8,
    pub name: &'static str,
}

/// Determine the yoga from (Moon_sid + Sun_sid) mod 360 in degrees.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sidereal_sum_deg);
    let idx = ((sum / YOGA_SEGMENT_DEG).floor() as usize).min(26);
    YogaInfo {
        yoga_index: idx as u8,
        name: ALL_YOGA_NAMES[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_always_in_range() {
        for i in 0..1000 {
            assert!(yoga_from_sum(i as f64 * 1.37 - 400.0).yoga_index <= 26);
        }
    }

    #[test]
    fn first_and_last() {
        assert_eq!(yoga_from_sum(0.0).name, "Vishkambha");
        assert_eq!(yoga_from_sum(359.9).name, "Vaidhriti");
    }

    #[test]
    fn sum_wraps_past_full_circle() {
        assert_eq!(yoga_from_sum(360.0 + 20.0).yoga_index, 1);
    }
}
