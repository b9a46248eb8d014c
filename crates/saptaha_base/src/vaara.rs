//! Vaara (weekday) determination from Julian Day.
//!
//! The vaara is a solar-day convention: it follows the civil date, not the
//! sunrise instant.

/// The seven vaaras, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All seven vaaras in order (0 = Ravivara/Sunday).
pub const ALL_VAARAS: [Vaara; 7] = [
    Vaara::Ravivara,
    Vaara::Somavara,
    Vaara::Mangalavara,
    Vaara::Budhavara,
    Vaara::Guruvara,
    Vaara::Shukravara,
    Vaara::Shanivara,
];

impl Vaara {
    /// Sanskrit name of the vaara.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    /// 0-based index (Ravivara = 0 .. Shanivara = 6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivara => 0,
            Self::Somavara => 1,
            Self::Mangalavara => 2,
            Self::Budhavara => 3,
            Self::Guruvara => 4,
            Self::Shukravara => 5,
            Self::Shanivara => 6,
        }
    }
}

/// Determine the vaara for a Julian Day: `floor(jd + 1.5) mod 7`.
pub fn vaara_from_jd(jd: f64) -> Vaara {
    let idx = ((jd + 1.5).floor().rem_euclid(7.0)) as usize;
    ALL_VAARAS[idx]
}
