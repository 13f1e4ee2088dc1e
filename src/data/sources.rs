//! Commentary source attribution for known source ids.
//!
//! Endpoints do not always return source details; this table fills the gap
//! for the integer-keyed editions the application knows about.

use crate::models::SourceMeta;

/// Source id requested when the caller does not specify one.
pub const DEFAULT_SOURCE_ID: &str = "1";

/// Static attribution for one commentary edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TafseerSourceInfo {
    pub id: u32,
    pub name: &'static str,
    pub author_name: &'static str,
    pub language_name: &'static str,
    pub description: &'static str,
}

static SOURCES: [TafseerSourceInfo; 4] = [
    TafseerSourceInfo {
        id: 1,
        name: "Tafsir Ibn Kathir",
        author_name: "Ibn Kathir",
        language_name: "English",
        description: "One of the most respected and widely used commentaries of the Quran",
    },
    TafseerSourceInfo {
        id: 2,
        name: "Tafsir Al-Jalalayn",
        author_name: "Jalal ad-Din al-Mahalli and Jalal ad-Din as-Suyuti",
        language_name: "English",
        description: "A classical Sunni tafsir of the Quran",
    },
    TafseerSourceInfo {
        id: 3,
        name: "Tafsir Al-Qurtubi",
        author_name: "Al-Qurtubi",
        language_name: "English",
        description: "A comprehensive commentary focusing on legal and theological aspects",
    },
    TafseerSourceInfo {
        id: 4,
        name: "Tafsir At-Tabari",
        author_name: "At-Tabari",
        language_name: "English",
        description: "One of the earliest and most comprehensive commentaries",
    },
];

/// Look up attribution for a numeric source id.
pub fn source_info(id: u32) -> Option<&'static TafseerSourceInfo> {
    SOURCES.iter().find(|s| s.id == id)
}

/// Build attribution metadata for a source id string.
///
/// Integer-keyed ids resolve through the table; anything else gets the
/// unknown-source defaults with the id carried through.
pub fn meta_for(source_id: &str) -> SourceMeta {
    if let Some(info) = source_id.parse::<u32>().ok().and_then(source_info) {
        return SourceMeta {
            id: info.id.to_string(),
            name: info.name.to_string(),
            author_name: info.author_name.to_string(),
            language_name: info.language_name.to_string(),
        };
    }
    SourceMeta {
        id: source_id.to_string(),
        ..SourceMeta::default()
    }
}
