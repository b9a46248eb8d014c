//! Karana (half-tithi) classification from Moon-Sun elongation.
//!
//! The lunar month holds 60 karana slots of 6 degrees of elongation each,
//! mapped onto 11 names: one fixed karana at slot 0 (Kimstughna), seven
//! movable karanas rotating through slots 1-56, and three fixed karanas
//! closing the month at slots 57-59 (Shakuni, Chatushpada, Nagava).
//!
//! The irregular mapping is materialized as a single 60-entry lookup table
//! built at compile time, so the boundary constants live in exactly one
//! place.

use crate::util::normalize_360;

/// Span of one karana in degrees of elongation: 360/60.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Nagava,
    Kimstughna,
}

/// All 11 karanas in conventional order (movable first, then fixed).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Nagava,
    Karana::Kimstughna,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Nagava => "Nagava",
            Self::Kimstughna => "Kimstughna",
        }
    }
}

/// The seven movable karanas that rotate through slots 1-56.
const MOVABLE: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

const fn build_karana_table() -> [Karana; 60] {
    let mut table = [Karana::Bava; 60];
    table[0] = Karana::Kimstughna;
    let mut slot = 1;
    while slot <= 56 {
        table[slot] = MOVABLE[(slot - 1) % 7];
        slot += 1;
    }
    table[57] = Karana::Shakuni;
    table[58] = Karana::Chatushpada;
    table[59] = Karana::Nagava;
    table
}

/// Karana for each of the 60 half-tithi slots of the lunar month.
pub const KARANA_TABLE: [Karana; 60] = build_karana_table();

/// Result of karana lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaInfo {
    /// Half-tithi slot in [0, 59].
    pub slot: u8,
    pub karana: Karana,
}

/// Determine the karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let slot = (((elong / KARANA_SEGMENT_DEG).floor() as usize) % 60).min(59);
    KaranaInfo {
        slot: slot as u8,
        karana: KARANA_TABLE[slot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_zero_is_kimstughna() {
        assert_eq!(karana_from_elongation(0.0).karana, Karana::Kimstughna);
        assert_eq!(karana_from_elongation(5.9).karana, Karana::Kimstughna);
    }

    #[test]
    fn fixed_tail_slots() {
        assert_eq!(KARANA_TABLE[57], Karana::Shakuni);
        assert_eq!(KARANA_TABLE[58], Karana::Chatushpada);
        assert_eq!(KARANA_TABLE[59], Karana::Nagava);
        assert_eq!(karana_from_elongation(57.0 * 6.0).karana, Karana::Shakuni);
        assert_eq!(
            karana_from_elongation(58.0 * 6.0).karana,
            Karana::Chatushpada
        );
        assert_eq!(karana_from_elongation(59.5 * 6.0).karana, Karana::Nagava);
    }

    #[test]
    fn movable_rotation_one_slot_per_residue() {
        // slot 1 -> Bava, slot 2 -> Balava, ..., slot 7 -> Vishti, slot 8 -> Bava again
        let expected = [
            (1, Karana::Bava),
            (2, Karana::Balava),
            (3, Karana::Kaulava),
            (4, Karana::Taitila),
            (5, Karana::Garaja),
            (6, Karana::Vanija),
            (7, Karana::Vishti),
            (8, Karana::Bava),
            (56, Karana::Vishti), // (56-1) mod 7 == 6
        ];
        for (slot, karana) in expected {
            assert_eq!(KARANA_TABLE[slot], karana, "slot {slot}");
        }
    }

    #[test]
    fn every_movable_slot_follows_rotation() {
        for slot in 1..=56usize {
            assert_eq!(KARANA_TABLE[slot], MOVABLE[(slot - 1) % 7]);
        }
    }

    #[test]
    fn negative_elongation_wraps() {
        // -3 deg -> 357 deg -> slot 59
        assert_eq!(karana_from_elongation(-3.0).karana, Karana::Nagava);
    }
}
