//! Observance detection: stateless predicates over a single day.
//!
//! The rule list is an open, ordered table. New rules append at the end;
//! the order feeds downstream query construction, so existing rules are
//! never reordered. Rules are not mutually exclusive; one day can match
//! several.

use serde::Serialize;

use saptaha_base::Paksha;
use saptaha_engine::CalendarDay;
use saptaha_time::LocalDate;

/// A named ritual occasion detected from calendar attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observance {
    pub name: &'static str,
    pub date: LocalDate,
    pub deity: &'static str,
    pub description: &'static str,
}

/// One row of the observance rule table.
pub struct ObservanceRule {
    pub name: &'static str,
    pub deity: &'static str,
    pub description: &'static str,
    matches: fn(&CalendarDay) -> bool,
}

/// The observance rules in declaration order.
pub const OBSERVANCE_RULES: [ObservanceRule; 5] = [
    ObservanceRule {
        name: "Ekadashi",
        deity: "Vishnu",
        description: "Fast and Vishnu worship",
        matches: |day| day.tithi == "Ekadashi",
    },
    ObservanceRule {
        name: "Pradosham",
        deity: "Shiva",
        description: "Shiva puja during twilight",
        matches: |day| day.tithi == "Trayodashi",
    },
    ObservanceRule {
        name: "Amavasya",
        deity: "Pitrus",
        description: "Tarpanam for ancestors",
        matches: |day| day.tithi == "Amavasya",
    },
    ObservanceRule {
        name: "Purnima",
        deity: "All",
        description: "Full moon observance",
        matches: |day| day.tithi == "Purnima",
    },
    ObservanceRule {
        name: "Sankashti Chaturthi",
        deity: "Ganesha",
        description: "Ganesha vrata",
        matches: |day| day.tithi == "Chaturthi" && day.paksha == Paksha::Krishna,
    },
];

/// Evaluate every rule against one day, unconditionally and in order.
pub fn detect_observances(day: &CalendarDay) -> Vec<Observance> {
    OBSERVANCE_RULES
        .iter()
        .filter(|rule| (rule.matches)(day))
        .map(|rule| Observance {
            name: rule.name,
            date: day.date,
            deity: rule.deity,
            description: rule.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saptaha_time::LocalTime;

    fn day(tithi: &'static str, paksha: Paksha) -> CalendarDay {
        CalendarDay {
            date: "2024-01-15".parse().unwrap(),
            vaara: "Somavara",
            tithi,
            tithi_index: 0,
            paksha,
            nakshatra: "Ashwini",
            yoga: "Vishkambha",
            karana: "Bava",
            sunrise: LocalTime { hour: 6, minute: 45 },
        }
    }

    #[test]
    fn ekadashi_matches_either_paksha() {
        for paksha in [Paksha::Shukla, Paksha::Krishna] {
            let obs = detect_observances(&day("Ekadashi", paksha));
            assert_eq!(obs.len(), 1);
            assert_eq!(obs[0].name, "Ekadashi");
            assert_eq!(obs[0].deity, "Vishnu");
        }
    }

    #[test]
    fn chaturthi_requires_dark_half() {
        assert!(detect_observances(&day("Chaturthi", Paksha::Shukla)).is_empty());
        let obs = detect_observances(&day("Chaturthi", Paksha::Krishna));
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].name, "Sankashti Chaturthi");
        assert_eq!(obs[0].deity, "Ganesha");
    }

    #[test]
    fn purnima_and_amavasya() {
        assert_eq!(
            detect_observances(&day("Purnima", Paksha::Shukla))[0].name,
            "Purnima"
        );
        assert_eq!(
            detect_observances(&day("Amavasya", Paksha::Krishna))[0].deity,
            "Pitrus"
        );
    }

    #[test]
    fn plain_day_matches_nothing() {
        assert!(detect_observances(&day("Saptami", Paksha::Shukla)).is_empty());
    }
}
