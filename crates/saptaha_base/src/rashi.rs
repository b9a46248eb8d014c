//! Rashi (sidereal zodiac sign) classification.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha at 0 degrees sidereal.

use crate::util::normalize_360;

/// Span of one rashi: 30 degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha = 0 .. Meena = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }
}

/// Determine the rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / RASHI_SPAN).floor() as usize).min(11);
    ALL_RASHIS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(359.9), Rashi::Meena);
    }

    #[test]
    fn boundary_at_30_degrees() {
        assert_eq!(rashi_from_longitude(30.0 - 1e-9), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0), Rashi::Vrishabha);
    }

    #[test]
    fn index_matches_position() {
        for i in 0..12u8 {
            let r = rashi_from_longitude(i as f64 * 30.0 + 15.0);
            assert_eq!(r.index(), i);
        }
    }
}
