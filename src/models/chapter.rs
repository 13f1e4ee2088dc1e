//! Chapter, verse, and search data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::tafseer::{ResolvedTafseer, SourceMeta};

/// Total number of chapters in the corpus.
pub const CHAPTER_COUNT: u32 = 114;

/// Identifies one verse within the 114-chapter corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseLocator {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseLocator {
    /// Build a locator, rejecting out-of-range chapter numbers up front.
    pub fn new(chapter: u32, verse: u32) -> Result<Self> {
        if chapter == 0 || chapter > CHAPTER_COUNT {
            return Err(AppError::InvalidChapter(chapter));
        }
        if verse == 0 {
            return Err(AppError::validation("verse number must be >= 1"));
        }
        Ok(Self { chapter, verse })
    }
}

impl std::fmt::Display for VerseLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Standard response envelope of the chapter text service.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub code: i64,
    pub status: String,
    pub data: T,
}

/// One verse as returned by the chapter text service.
///
/// Only the fields this application consumes are typed; the service
/// returns more (juz, page, sajda markers) which are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahPayload {
    /// Global verse number across the whole corpus
    pub number: u64,

    /// Verse text in this edition
    pub text: String,

    /// Verse number within its chapter
    pub number_in_surah: u32,
}

/// One chapter as returned by the chapter text service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterPayload {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_type: String,
    pub number_of_ayahs: u32,
    pub ayahs: Vec<AyahPayload>,
}

/// One fully assembled verse: original text, translation, and tafseer.
#[derive(Debug, Clone, Serialize)]
pub struct VerseRecord {
    /// Verse number within the chapter
    pub number: u32,

    /// Original-language text
    pub text: String,

    /// Translation in the configured edition
    pub translation: String,

    /// Commentary text (possibly a placeholder)
    pub tafseer: String,

    /// Commentary source attribution
    pub tafseer_source: SourceMeta,

    /// Raw commentary payload when a remote endpoint served it
    pub raw_tafseer: Option<serde_json::Value>,

    /// Which endpoint (or fallback) produced the commentary
    pub origin: String,
}

impl VerseRecord {
    pub fn new(number: u32, text: String, translation: String, tafseer: ResolvedTafseer) -> Self {
        Self {
            number,
            text,
            translation,
            tafseer: tafseer.text,
            tafseer_source: tafseer.source,
            raw_tafseer: tafseer.raw,
            origin: tafseer.origin,
        }
    }
}

/// A fully assembled chapter.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterRecord {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub revelation_place: String,
    pub verse_count: u32,
    pub verses: Vec<VerseRecord>,
}

/// Statistics for one chapter assembly run.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub verse_count: usize,
    /// Verses whose tafseer came from a remote endpoint
    pub remote_tafseer: usize,
    /// Verses served from the bundled dataset
    pub local_tafseer: usize,
    /// Verses degraded to the placeholder
    pub failed_tafseer: usize,
}

/// Result of one chapter assembly: the chapter plus run statistics.
#[derive(Debug, Clone)]
pub struct ChapterOutcome {
    pub chapter: ChapterRecord,
    pub stats: ChapterStats,
}

/// Search response data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchData {
    pub count: u32,
    pub matches: Vec<SearchMatch>,
}

/// One verse matching a search query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub number: u64,
    pub text: String,
    pub number_in_surah: u32,
    pub surah: SearchSurahRef,
}

/// Chapter reference embedded in a search match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSurahRef {
    pub number: u32,
    pub name: String,
    pub english_name: String,
}
