// src/data/mod.rs

//! Compiled-in reference data.
//!
//! - Chapter metadata for all 114 chapters (`surahs`)
//! - Commentary source attribution for known source ids (`sources`)
//! - Bundled tafseer text for a small set of chapters (`local_tafseer`)
//!
//! Everything here is immutable, process-wide, and read without locking.

pub mod local_tafseer;
pub mod sources;
pub mod surahs;

pub use sources::{source_info, TafseerSourceInfo, DEFAULT_SOURCE_ID};
pub use surahs::{surah_info, RevelationPlace, SurahInfo, SURAHS};
