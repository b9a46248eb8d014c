use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use saptaha_digest::{CalendarDay, Observance, build_digest, format_digest, week_data};
use saptaha_engine::{ApproxEphemeris, BirthChart, Location, compute_chart, compute_day};
use saptaha_time::LocalDate;
use saptaha_verse::{
    CosineIndex, Embedder, HashingEmbedder, Retriever, VerseCorpus, index_corpus,
    nakshatra_lifestyle, nakshatra_theme,
};

use crate::config::Config;

mod config;

#[derive(Parser)]
#[command(name = "saptaha", about = "Panchanga calendar and weekly digest CLI")]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Panchanga for one civil date
    Day {
        /// Civil date (YYYY-MM-DD)
        date: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: Option<f64>,
        /// UTC offset in hours (EST = -5)
        #[arg(long)]
        tz: Option<f64>,
    },
    /// Panchanga and observances for the 7 days starting at a date
    Week {
        /// Week start date (YYYY-MM-DD)
        date: String,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        #[arg(long)]
        tz: Option<f64>,
    },
    /// Weekly digest: panchanga, observances, verses, lifestyle notes
    Digest {
        /// Week start date (YYYY-MM-DD)
        date: String,
        /// Path to the verse corpus JSON (overrides config)
        #[arg(long)]
        corpus: Option<PathBuf>,
        /// Search with the in-process vector index instead of keyword-only
        #[arg(long)]
        vector: bool,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
        #[arg(long)]
        tz: Option<f64>,
    },
    /// Natal nakshatra and rashi (janam patri) with a matching verse
    Chart {
        /// Birth date (YYYY-MM-DD); falls back to config
        #[arg(long)]
        date: Option<String>,
        /// Birth time (HH:MM, local); falls back to config
        #[arg(long)]
        time: Option<String>,
        /// UTC offset of the birth place in hours
        #[arg(long)]
        tz: Option<f64>,
        /// Path to the verse corpus JSON (overrides config)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },
    /// Validate a verse corpus file and build its vector index
    Ingest {
        /// Path to the verse corpus JSON
        corpus: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref());
    let eph = ApproxEphemeris::new();

    match cli.command {
        Commands::Day { date, lat, lon, tz } => {
            let date = parse_date(&date);
            let location = resolve_location(&cfg, lat, lon, tz);
            let day = compute_day(&eph, date, &location).unwrap_or_else(|e| fail(&e));
            if cli.json {
                print_json(&day);
            } else {
                print_day(&day);
            }
        }

        Commands::Week { date, lat, lon, tz } => {
            let start = parse_date(&date);
            let location = resolve_location(&cfg, lat, lon, tz);
            let (days, observances) =
                week_data(&eph, start, &location).unwrap_or_else(|e| fail(&e));
            if cli.json {
                print_json(&serde_json::json!({
                    "days": days,
                    "observances": observances,
                }));
            } else {
                print_week(&days, &observances);
            }
        }

        Commands::Digest {
            date,
            corpus,
            vector,
            lat,
            lon,
            tz,
        } => {
            let start = parse_date(&date);
            let location = resolve_location(&cfg, lat, lon, tz);
            let corpus = load_corpus(corpus_path(&cfg, corpus.as_deref()));

            let embedder = HashingEmbedder::default();
            let mut index = CosineIndex::new();
            if vector {
                index_corpus(&corpus, &embedder, &mut index).unwrap_or_else(|e| fail(&e));
            }
            let retriever = if vector {
                Retriever::with_vector(&corpus, &embedder, &index)
            } else {
                Retriever::new(&corpus)
            };

            let (digest, meta) =
                build_digest(&eph, start, &location, &retriever).unwrap_or_else(|e| fail(&e));
            tracing::debug!(
                query = meta.query,
                latency_ms = meta.latency_ms,
                "week verse search"
            );
            if cli.json {
                print_json(&digest);
            } else {
                println!("{}", format_digest(&digest));
            }
        }

        Commands::Chart {
            date,
            time,
            tz,
            corpus,
        } => {
            let jp = &cfg.janam_patri;
            let date = date
                .or_else(|| jp.birth_date.clone())
                .unwrap_or_else(|| usage("birth date required (--date or [janam_patri] config)"));
            let time = time
                .or_else(|| jp.birth_time.clone())
                .unwrap_or_else(|| usage("birth time required (--time or [janam_patri] config)"));
            let tz = tz
                .or(jp.utc_offset_hours)
                .unwrap_or(cfg.location.utc_offset_hours);

            let chart = compute_chart(&eph, &date, &time, tz)
                .unwrap_or_else(|e| fail(&e))
                .with_overrides(jp.nakshatra.clone(), jp.rashi.clone());

            let corpus = load_corpus(corpus_path(&cfg, corpus.as_deref()));
            let retriever = Retriever::new(&corpus);
            let query = nakshatra_theme(chart.nakshatra.value());
            let verses = retriever.search(&query, 5);
            let lifestyle = nakshatra_lifestyle(chart.nakshatra.value());

            if cli.json {
                print_json(&serde_json::json!({
                    "chart": chart,
                    "theme": query,
                    "verses": verses,
                    "lifestyle_recommendations": lifestyle,
                }));
            } else {
                print_chart(&chart);
                if !verses.is_empty() {
                    println!();
                    println!("Recommended verses:");
                    for (i, v) in verses.iter().enumerate() {
                        println!("  {}. {}", i + 1, v.devanagari);
                        println!("     {}", v.transliteration);
                        println!("     — {} [{}]", v.meaning, v.source);
                    }
                }
                println!();
                println!("Lifestyle recommendations:");
                for note in lifestyle {
                    println!("  * {note}");
                }
            }
        }

        Commands::Ingest { corpus } => {
            let corpus = VerseCorpus::load(&corpus).unwrap_or_else(|e| fail(&e));
            let embedder = HashingEmbedder::default();
            let mut index = CosineIndex::new();
            let count = index_corpus(&corpus, &embedder, &mut index).unwrap_or_else(|e| fail(&e));
            println!("Indexed {count} verses ({} dimensions)", embedder.dim());
        }
    }
}

fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(p) => Config::load(p).unwrap_or_else(|e| fail(&e)),
        None => Config::default(),
    }
}

fn parse_date(s: &str) -> LocalDate {
    s.parse().unwrap_or_else(|e| fail(&e))
}

fn resolve_location(cfg: &Config, lat: Option<f64>, lon: Option<f64>, tz: Option<f64>) -> Location {
    let base = cfg.location.to_location();
    Location::new(
        lat.unwrap_or(base.latitude_deg),
        lon.unwrap_or(base.longitude_deg),
        tz.unwrap_or(base.utc_offset_hours),
    )
}

fn corpus_path(cfg: &Config, flag: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| cfg.corpus.path.clone())
        .unwrap_or_else(|| PathBuf::from("verses.json"))
}

fn load_corpus(path: PathBuf) -> VerseCorpus {
    VerseCorpus::load(&path).unwrap_or_else(|e| fail(&e))
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&e),
    }
}

fn print_day(day: &CalendarDay) {
    println!("{} ({})", day.date, day.vaara);
    println!(
        "  Tithi:     {} {} (index {})",
        day.paksha.name(),
        day.tithi,
        day.tithi_index
    );
    println!("  Nakshatra: {}", day.nakshatra);
    println!("  Yoga:      {}", day.yoga);
    println!("  Karana:    {}", day.karana);
    println!("  Sunrise:   {}", day.sunrise);
}

fn print_week(days: &[CalendarDay], observances: &[Observance]) {
    for day in days {
        println!(
            "{} ({}) | {} {} | {} | {} | {} | Sunrise {}",
            day.date,
            day.vaara,
            day.paksha.name(),
            day.tithi,
            day.nakshatra,
            day.yoga,
            day.karana,
            day.sunrise
        );
    }
    println!();
    if observances.is_empty() {
        println!("No major observances this week.");
    } else {
        for o in observances {
            println!("{} {} ({}): {}", o.date, o.name, o.deity, o.description);
        }
    }
}

fn print_chart(chart: &BirthChart) {
    println!(
        "Janma Nakshatra: {} (index {})",
        chart.nakshatra.value(),
        chart.nakshatra_index
    );
    if chart.nakshatra.manual.is_some() {
        println!("  (manual override; computed: {})", chart.nakshatra.computed);
    }
    println!("Janma Rashi: {} (index {})", chart.rashi.value(), chart.rashi_index);
    if chart.rashi.manual.is_some() {
        println!("  (manual override; computed: {})", chart.rashi.computed);
    }
}

fn fail(e: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn usage(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(2);
}
