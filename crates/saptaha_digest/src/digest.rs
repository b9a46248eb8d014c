//! The weekly digest: calendar week, observances, verses, and notes.

use serde::Serialize;
use tracing::info;

use saptaha_base::Paksha;
use saptaha_engine::{CalendarDay, EngineError, Ephemeris, Location};
use saptaha_time::LocalDate;
use saptaha_verse::{Retriever, SearchMeta, Verse, build_week_query, day_query};

use crate::observance::Observance;
use crate::week::week_data;

/// Upper bound on lifestyle notes; later (lower-priority) notes drop first.
pub const MAX_LIFESTYLE_NOTES: usize = 5;

/// One day's paired verse (or none).
#[derive(Debug, Clone, Serialize)]
pub struct DailyVerse {
    pub date: LocalDate,
    pub tithi: &'static str,
    pub paksha: Paksha,
    pub verse: Option<Verse>,
}

/// The produced digest: read-only after construction, rebuilt from
/// scratch for each generation cycle.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyDigest {
    pub week_start: LocalDate,
    pub week_end: LocalDate,
    pub panchang_days: Vec<CalendarDay>,
    pub observances: Vec<Observance>,
    pub daily_verses: Vec<DailyVerse>,
    pub verse_of_week: Option<Verse>,
    pub lifestyle_recommendations: Vec<String>,
}

/// Build the digest for the week starting at `start`.
///
/// Input and ephemeris faults abort the build; retrieval degradation
/// never does. Returns the digest plus search metadata for the week
/// verse (observability only).
pub fn build_digest(
    eph: &dyn Ephemeris,
    start: LocalDate,
    location: &Location,
    retriever: &Retriever<'_>,
) -> Result<(WeeklyDigest, SearchMeta), EngineError> {
    let (days, observances) = week_data(eph, start, location)?;
    let (verse_of_week, meta) = pair_week_verse(&observances, &days, retriever);
    let daily_verses = daily_verses(&days, &observances, retriever);
    let lifestyle_recommendations = lifestyle_notes(&days, &observances);

    info!(
        week = %start,
        observances = observances.len(),
        week_verse = verse_of_week.is_some(),
        "digest built"
    );

    let digest = WeeklyDigest {
        week_start: start,
        week_end: start.plus_days(6),
        panchang_days: days,
        observances,
        daily_verses,
        verse_of_week,
        lifestyle_recommendations,
    };
    Ok((digest, meta))
}

/// Week-level verse from the aggregated query.
///
/// Explicit rule: a week with zero observances has no week verse, not
/// merely an empty search.
fn pair_week_verse(
    observances: &[Observance],
    days: &[CalendarDay],
    retriever: &Retriever<'_>,
) -> (Option<Verse>, SearchMeta) {
    if observances.is_empty() {
        return (None, SearchMeta::default());
    }
    let obs_terms: Vec<_> = observances
        .iter()
        .map(|o| (o.name, o.deity, o.description))
        .collect();
    let day_terms: Vec<_> = days.iter().map(|d| (d.tithi, d.nakshatra)).collect();
    let query = build_week_query(&obs_terms, &day_terms);
    let (mut hits, meta) = retriever.search_with_meta(&query, 1);
    (hits.drain(..).next(), meta)
}

/// One verse per day via the per-day query rule.
fn daily_verses(
    days: &[CalendarDay],
    observances: &[Observance],
    retriever: &Retriever<'_>,
) -> Vec<DailyVerse> {
    days.iter()
        .map(|day| {
            let day_obs: Vec<_> = observances
                .iter()
                .filter(|o| o.date == day.date)
                .map(|o| (o.name, o.deity, o.description))
                .collect();
            let query = day_query(day.tithi, day.nakshatra, &day_obs);
            let mut hits = retriever.search(&query, 1);
            DailyVerse {
                date: day.date,
                tithi: day.tithi,
                paksha: day.paksha,
                verse: hits.drain(..).next(),
            }
        })
        .collect()
}

/// Ordered lifestyle note table keyed on week contents.
///
/// A constant daily-habit note always appends last; the list then
/// truncates to [`MAX_LIFESTYLE_NOTES`], dropping latest-appended first.
fn lifestyle_notes(days: &[CalendarDay], observances: &[Observance]) -> Vec<String> {
    let mut notes = Vec::new();
    let has_obs = |name: &str| observances.iter().any(|o| o.name == name);
    let has_tithi = |name: &str| days.iter().any(|d| d.tithi == name);
    let has_vaara = |name: &str| days.iter().any(|d| d.vaara == name);

    if has_obs("Amavasya") {
        notes.push(
            "Amavasya week: spend time in quiet reflection and gratitude for ancestors."
                .to_string(),
        );
    }
    if has_obs("Ekadashi") {
        notes.push(
            "Ekadashi: keep meals light and sattvic, with extra hydration and simple japa."
                .to_string(),
        );
    }
    if has_obs("Sankashti Chaturthi") || has_tithi("Chaturthi") {
        notes.push(
            "Chaturthi energy: clear one pending task and remove one source of clutter."
                .to_string(),
        );
    }
    if has_vaara("Somavara") {
        notes.push(
            "Somavara: start the week with a short sankalpa and 10 minutes of silence."
                .to_string(),
        );
    }
    if has_vaara("Guruvara") {
        notes.push(
            "Guruvara: reserve time for study, guidance, or one act of teaching.".to_string(),
        );
    }
    notes.push("Daily anchor: avoid digital overload for one focused hour after sunrise.".to_string());
    notes.truncate(MAX_LIFESTYLE_NOTES);
    notes
}

/// Render the digest as plain text for terminal or notification output.
pub fn format_digest(digest: &WeeklyDigest) -> String {
    let mut lines = vec![
        "=== Vedic Wisdom Weekly ===".to_string(),
        format!("Week: {} to {}", digest.week_start, digest.week_end),
        String::new(),
        "Daily Panchangam:".to_string(),
    ];
    for day in &digest.panchang_days {
        lines.push(format!(
            "  {} ({}) | {} {} | {} | Sunrise {}",
            day.date,
            day.vaara,
            day.paksha.name(),
            day.tithi,
            day.nakshatra,
            day.sunrise
        ));
    }

    lines.push(String::new());
    if digest.observances.is_empty() {
        lines.push("No major observances this week.".to_string());
    } else {
        lines.push("Observances This Week:".to_string());
        for o in &digest.observances {
            lines.push(format!(
                "  * {} — {} ({}): {}",
                o.date, o.name, o.deity, o.description
            ));
        }
    }

    if !digest.daily_verses.is_empty() {
        lines.push(String::new());
        lines.push("Shloka by Tithi:".to_string());
        for dv in &digest.daily_verses {
            let head = format!("  {} ({} {})", dv.date, dv.paksha.name(), dv.tithi);
            match &dv.verse {
                Some(v) => {
                    lines.push(head);
                    lines.push(format!("    {}", v.devanagari));
                    lines.push(format!("    {}", v.transliteration));
                    lines.push(format!("    — {} [{}]", v.meaning, v.source));
                }
                None => lines.push(format!("{head} — (no verse matched)")),
            }
        }
    }

    if let Some(v) = &digest.verse_of_week {
        lines.push(String::new());
        lines.push("Verse of the Week:".to_string());
        lines.push(format!("  {}", v.devanagari));
        lines.push(format!("  {}", v.transliteration));
        lines.push(format!("  — {}", v.meaning));
        lines.push(format!("  [{}]", v.source));
    }

    if !digest.lifestyle_recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Lifestyle recommendations:".to_string());
        for note in &digest.lifestyle_recommendations {
            lines.push(format!("  * {note}"));
        }
    }
    lines.join("\n")
}
