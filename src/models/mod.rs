// src/models/mod.rs

//! Domain models for the tafseer application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod chapter;
mod config;
mod tafseer;

// Re-export all public types
pub use chapter::{
    ApiEnvelope, AyahPayload, ChapterOutcome, ChapterPayload, ChapterRecord, ChapterStats,
    SearchData, SearchMatch, SearchSurahRef, VerseLocator, VerseRecord, CHAPTER_COUNT,
};
pub use config::{ApiConfig, Config, EndpointConfig, FetchConfig};
pub use tafseer::{
    ResolvedTafseer, SourceMeta, TafseerPayload, NO_DATA_MESSAGE, ORIGIN_ALL_FAILED, ORIGIN_LOCAL,
};
