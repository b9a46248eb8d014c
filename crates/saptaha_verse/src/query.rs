//! Retrieval query construction from calendar context.
//!
//! Queries concatenate observance terms in rule-declaration order, then
//! panchanga terms in day order, so tie-breaks downstream are stable.

/// Observance terms feeding a query: (name, deity, description).
pub type ObservanceTerms<'a> = (&'a str, &'a str, &'a str);

/// Static tithi -> search theme table for days without an observance.
const TITHI_THEMES: [(&str, &str); 7] = [
    ("Pratipada", "Ganesha beginning auspicious"),
    ("Chaturthi", "Ganesha chaturthi obstacles"),
    ("Ekadashi", "Vishnu ekadashi devotion"),
    ("Trayodashi", "Shiva pradosham"),
    ("Amavasya", "pitru ancestors amavasya tarpanam"),
    ("Purnima", "full moon devotion"),
    ("Dwadashi", "Vishnu devotion"),
];

fn tithi_theme(tithi: &str) -> Option<&'static str> {
    TITHI_THEMES
        .iter()
        .find(|(name, _)| *name == tithi)
        .map(|(_, theme)| *theme)
}

/// Build the whole-week query: every observance's terms, then every
/// day's tithi and nakshatra.
pub fn build_week_query(
    observances: &[ObservanceTerms<'_>],
    days: &[(&str, &str)],
) -> String {
    let obs_terms = observances
        .iter()
        .map(|(name, deity, description)| format!("{name} {deity} {description}"));
    let day_terms = days
        .iter()
        .map(|(tithi, nakshatra)| format!("{tithi} {nakshatra}"));
    obs_terms.chain(day_terms).collect::<Vec<_>>().join(" ")
}

/// Build the query for a single day.
///
/// Observance terms win when the day has any; otherwise the static tithi
/// theme table; otherwise a generic dharma phrase.
pub fn day_query(
    tithi: &str,
    nakshatra: &str,
    observances: &[ObservanceTerms<'_>],
) -> String {
    if !observances.is_empty() {
        return observances
            .iter()
            .map(|(name, deity, description)| format!("{name} {deity} {description}"))
            .collect::<Vec<_>>()
            .join(" ");
    }
    match tithi_theme(tithi) {
        Some(theme) => theme.to_string(),
        None => format!("{tithi} {nakshatra} dharma"),
    }
}

/// Curated janma nakshatra -> lifestyle guidance entries.
const NAKSHATRA_LIFESTYLE: [(&str, [&str; 3]); 1] = [(
    "Punarvasu",
    [
        "Keep mornings uncluttered; begin with a short prayer and fresh air.",
        "Nurture home energy: one small act of care in your living space daily.",
        "Prefer steady routines over sudden lifestyle swings this week.",
    ],
)];

/// Guidance shared by every nakshatra without a curated entry.
const DEFAULT_LIFESTYLE: [&str; 3] = [
    "Maintain a steady wake-sleep cycle and keep one daily reflection practice.",
    "Choose sattvic food and avoid over-stimulation in late evenings.",
    "Do one intentional act of service each week.",
];

/// Lifestyle guidance for a janma nakshatra; curated entry when one
/// exists, the generic defaults otherwise.
pub fn nakshatra_lifestyle(nakshatra: &str) -> &'static [&'static str; 3] {
    NAKSHATRA_LIFESTYLE
        .iter()
        .find(|(name, _)| *name == nakshatra)
        .map(|(_, notes)| notes)
        .unwrap_or(&DEFAULT_LIFESTYLE)
}

/// Janma nakshatra -> verse search theme (deity / tradition).
pub fn nakshatra_theme(nakshatra: &str) -> String {
    let theme = match nakshatra {
        "Ashwini" => "healing vitality Ashwini Kumaras",
        "Bharani" => "transformation Yama dharma",
        "Krittika" => "Agni fire purification",
        "Rohini" => "moon devotion beauty",
        "Mrigashira" => "Soma moon seeking",
        "Ardra" => "Shiva Rudra storm",
        "Punarvasu" => "Aditi abundance home",
        "Pushya" => "Brihaspati wisdom Jupiter",
        "Ashlesha" => "serpent wisdom Naga",
        "Magha" => "pitru ancestors royalty",
        "Purva Phalguni" => "love devotion Venus",
        "Uttara Phalguni" => "grace Aryaman",
        "Hasta" => "skill Savitr sun",
        "Chitra" => "Vishwakarma creation",
        "Swati" => "Vayu wind freedom",
        "Vishakha" => "Indra Agni victory",
        "Anuradha" => "Mitra friendship devotion",
        "Jyeshtha" => "Indra protection elder",
        "Mula" => "Nirriti dissolution",
        "Purva Ashadha" => "Apah waters",
        "Uttara Ashadha" => "Vishvedeva universal",
        "Shravana" => "Vishnu listening",
        "Dhanishta" => "Vasudeva rhythm",
        "Shatabhisha" => "Varuna healing",
        "Purva Bhadrapada" => "Aja Ekapada",
        "Uttara Bhadrapada" => "Ahir Budhnya",
        "Revati" => "Pushan nourishment",
        other => return format!("{other} devotion dharma"),
    };
    theme.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_query_orders_observances_before_days() {
        let q = build_week_query(
            &[("Ekadashi", "Vishnu", "Fast and Vishnu worship")],
            &[("Ekadashi", "Vishakha"), ("Dwadashi", "Anuradha")],
        );
        assert_eq!(
            q,
            "Ekadashi Vishnu Fast and Vishnu worship Ekadashi Vishakha Dwadashi Anuradha"
        );
    }

    #[test]
    fn day_query_prefers_observance_terms() {
        let q = day_query("Ekadashi", "Vishakha", &[("Ekadashi", "Vishnu", "Fast")]);
        assert_eq!(q, "Ekadashi Vishnu Fast");
    }

    #[test]
    fn day_query_falls_back_to_theme_table() {
        assert_eq!(day_query("Ekadashi", "Vishakha", &[]), "Vishnu ekadashi devotion");
    }

    #[test]
    fn day_query_generic_when_unthemed() {
        assert_eq!(day_query("Saptami", "Hasta", &[]), "Saptami Hasta dharma");
    }

    #[test]
    fn nakshatra_theme_has_generic_fallback() {
        assert_eq!(nakshatra_theme("Shravana"), "Vishnu listening");
        assert_eq!(nakshatra_theme("Unknown"), "Unknown devotion dharma");
    }

    #[test]
    fn punarvasu_has_curated_lifestyle() {
        let notes = nakshatra_lifestyle("Punarvasu");
        assert!(notes[0].starts_with("Keep mornings uncluttered"));
        assert!(notes[1].contains("home energy"));
        assert!(notes[2].contains("steady routines"));
    }

    #[test]
    fn uncurated_nakshatras_share_default_lifestyle() {
        let notes = nakshatra_lifestyle("Pushya");
        assert!(notes[0].contains("wake-sleep cycle"));
        assert_eq!(notes, nakshatra_lifestyle("Revati"));
    }
}
