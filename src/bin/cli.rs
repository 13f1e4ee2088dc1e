//! Tafseer CLI
//!
//! Fetches Quran chapters, translations, and verse commentary from the
//! command line, falling back across tafseer sources when one is down.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tafseer::{
    data::{self, surahs, DEFAULT_SOURCE_ID},
    error::{AppError, Result},
    models::{ChapterRecord, Config, ResolvedTafseer, SearchData},
    services::ChapterService,
    utils,
};

/// tafseer - Quran chapter and commentary fetcher
#[derive(Parser, Debug)]
#[command(
    name = "tafseer",
    version,
    about = "Fetches Quran chapters, translations, and tafseer"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a full chapter with translation and per-verse tafseer
    Chapter {
        /// Chapter number (1-114)
        number: u32,

        /// Print the assembled chapter as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch tafseer for a single verse
    Verse {
        /// Verse reference: "2:255" or "2 255"
        #[arg(num_args = 1..=2, required = true)]
        reference: Vec<String>,

        /// Commentary source id
        #[arg(short, long, default_value = DEFAULT_SOURCE_ID)]
        source: String,

        /// Print the resolved tafseer as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search verses by text
    Search {
        query: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List chapters from the bundled metadata table
    List {
        /// Filter by revelation place
        #[arg(long, value_parser = ["meccan", "medinan"])]
        place: Option<String>,

        /// Filter by name, translation, or number
        #[arg(long)]
        query: Option<String>,
    },

    /// Validate the configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_chapter(chapter: &ChapterRecord) {
    println!(
        "Surah {} — {} ({} / {})",
        chapter.number, chapter.name, chapter.english_name, chapter.english_name_translation
    );
    println!(
        "{} verses, {}",
        chapter.verse_count, chapter.revelation_place
    );
    for verse in &chapter.verses {
        println!();
        println!("[{}:{}] {}", chapter.number, verse.number, verse.text);
        println!("  Translation: {}", verse.translation);
        println!(
            "  Tafseer ({}): {}",
            verse.tafseer_source.display_name(),
            verse.tafseer
        );
    }
}

fn print_tafseer(chapter: u32, verse: u32, resolved: &ResolvedTafseer) {
    println!(
        "Tafseer for {}:{} — {} [{}]",
        chapter,
        verse,
        resolved.source.display_name(),
        resolved.origin
    );
    println!();
    println!("{}", resolved.text);
}

fn print_search_results(query: &str, data: &SearchData) {
    println!("{} match(es) for \"{}\"", data.count, query);
    for found in &data.matches {
        println!(
            "  [{}:{}] {} — {}",
            found.surah.number, found.number_in_surah, found.surah.english_name, found.text
        );
    }
}

/// Parse the `verse` subcommand's reference arguments.
fn parse_reference(reference: &[String]) -> Result<(u32, u32)> {
    match reference {
        [single] => utils::parse_verse_ref(single)
            .ok_or_else(|| AppError::validation(format!("invalid verse reference '{single}'"))),
        [chapter, verse] => {
            let chapter = chapter
                .parse()
                .map_err(|_| AppError::validation(format!("invalid chapter '{chapter}'")))?;
            let verse = verse
                .parse()
                .map_err(|_| AppError::validation(format!("invalid verse '{verse}'")))?;
            Ok((chapter, verse))
        }
        _ => Err(AppError::validation("expected 'chapter:verse' or 'chapter verse'")),
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    let config = Arc::new(config);

    match cli.command {
        Command::Chapter { number, json } => {
            let service = ChapterService::new(Arc::clone(&config))?;
            log::info!("Fetching chapter {}...", number);
            let outcome = service.get_chapter(number).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.chapter)?);
            } else {
                print_chapter(&outcome.chapter);
            }
            if outcome.stats.failed_tafseer > 0 {
                log::warn!(
                    "{} verse(s) have no tafseer from any source",
                    outcome.stats.failed_tafseer
                );
            }
        }

        Command::Verse {
            reference,
            source,
            json,
        } => {
            let (chapter, verse) = parse_reference(&reference)?;
            let service = ChapterService::new(Arc::clone(&config))?;
            log::info!("Resolving tafseer for {}:{}...", chapter, verse);
            let resolved = service.get_tafseer(&source, chapter, verse).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            } else {
                print_tafseer(chapter, verse, &resolved);
            }
        }

        Command::Search { query, json } => {
            let service = ChapterService::new(Arc::clone(&config))?;
            log::info!("Searching for \"{}\"...", query);
            let data = service.search(&query).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print_search_results(&query, &data);
            }
        }

        Command::List { place, query } => {
            let place = place.as_deref().map(|p| match p {
                "medinan" => surahs::RevelationPlace::Medinan,
                _ => surahs::RevelationPlace::Meccan,
            });
            let listed = surahs::search_surahs(query.as_deref().unwrap_or(""));
            let mut shown = 0usize;
            for surah in listed {
                if let Some(wanted) = place {
                    if surah.revelation_place != wanted {
                        continue;
                    }
                }
                println!(
                    "{:>3}. {} ({}) — {} verses, {}",
                    surah.number,
                    surah.english_name,
                    surah.english_name_translation,
                    surah.ayah_count,
                    surah.revelation_place
                );
                shown += 1;
            }
            log::info!("{} of {} chapters shown", shown, data::SURAHS.len());
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "✓ Config OK ({} endpoints, timeout {}ms, cooldown {}ms)",
                config.endpoints.len(),
                config.fetch.timeout_ms,
                config.fetch.cooldown_ms
            );
        }
    }

    Ok(())
}
