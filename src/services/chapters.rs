//! Chapter assembly service.
//!
//! Fetches a chapter's original text and translation in parallel, fans out
//! one tafseer resolution per verse, and merges the three result sets into
//! one ordered verse sequence.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use url::Url;

use crate::data::sources::{self, DEFAULT_SOURCE_ID};
use crate::error::{AppError, Result};
use crate::models::{
    ApiEnvelope, ChapterOutcome, ChapterPayload, ChapterRecord, ChapterStats, Config,
    ResolvedTafseer, SearchData, VerseLocator, VerseRecord, CHAPTER_COUNT, ORIGIN_LOCAL,
};

use super::fetcher::{EndpointFetch, HttpFetcher};
use super::resolver::TafseerResolver;

/// Assembles chapters from the text, translation, and tafseer services.
pub struct ChapterService {
    config: Arc<Config>,
    fetcher: Arc<dyn EndpointFetch>,
    resolver: TafseerResolver,
}

impl ChapterService {
    /// Create a service with the production HTTP fetcher.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let fetcher: Arc<dyn EndpointFetch> = Arc::new(HttpFetcher::new(&config.fetch)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Create a service over an externally supplied fetcher.
    pub fn with_fetcher(config: Arc<Config>, fetcher: Arc<dyn EndpointFetch>) -> Self {
        let resolver = TafseerResolver::new(Arc::clone(&config), Arc::clone(&fetcher));
        Self {
            config,
            fetcher,
            resolver,
        }
    }

    /// Resolve tafseer for a single verse through the fallback chain.
    pub async fn get_tafseer(
        &self,
        source_id: &str,
        chapter: u32,
        verse: u32,
    ) -> Result<ResolvedTafseer> {
        let locator = VerseLocator::new(chapter, verse)?;
        self.resolver.resolve(source_id, locator).await
    }

    /// Assemble one chapter: original text, translation, and per-verse
    /// tafseer merged in verse order.
    ///
    /// Chapter text or translation failures abort the whole request; a
    /// per-verse tafseer failure degrades that verse to a placeholder.
    pub async fn get_chapter(&self, chapter_number: u32) -> Result<ChapterOutcome> {
        if chapter_number == 0 || chapter_number > CHAPTER_COUNT {
            return Err(AppError::InvalidChapter(chapter_number));
        }

        let started_at = Utc::now();
        let base = self.config.api.quran_base.trim_end_matches('/');
        let text_url = format!("{base}/surah/{chapter_number}");
        let translation_url = format!(
            "{base}/surah/{chapter_number}/{}",
            self.config.api.translation_edition
        );

        let (original, translation) = tokio::try_join!(
            self.fetch_chapter_payload("chapter text", &text_url),
            self.fetch_chapter_payload("translation", &translation_url)
        )?;

        // The merge below zips by index; refuse to assemble misaligned data.
        if original.ayahs.len() != translation.ayahs.len() {
            return Err(AppError::upstream(
                "translation",
                format!(
                    "verse count mismatch: text has {}, translation has {}",
                    original.ayahs.len(),
                    translation.ayahs.len()
                ),
            ));
        }

        let concurrency = self.config.fetch.max_concurrent.max(1);
        let mut commentaries: Vec<Option<ResolvedTafseer>> = vec![None; original.ayahs.len()];
        let mut local_tafseer = 0usize;
        let mut failed_tafseer = 0usize;
        let default_source = sources::meta_for(DEFAULT_SOURCE_ID);

        let mut resolutions = stream::iter(original.ayahs.iter().enumerate())
            .map(|(index, ayah)| {
                // Numbering comes from the verse itself, not the loop index.
                let locator = VerseLocator {
                    chapter: chapter_number,
                    verse: ayah.number_in_surah,
                };
                async move {
                    let result = self.resolver.resolve(DEFAULT_SOURCE_ID, locator).await;
                    (index, locator, result)
                }
            })
            .buffer_unordered(concurrency);

        while let Some((index, locator, result)) = resolutions.next().await {
            let resolved = match result {
                Ok(resolved) => resolved,
                Err(error) => {
                    log::warn!("Tafseer unavailable for {}: {}", locator, error);
                    failed_tafseer += 1;
                    ResolvedTafseer::unavailable(default_source.clone())
                }
            };
            if resolved.origin == ORIGIN_LOCAL {
                local_tafseer += 1;
            }
            commentaries[index] = Some(resolved);
        }
        drop(resolutions);

        let verses: Vec<VerseRecord> = original
            .ayahs
            .iter()
            .zip(translation.ayahs.iter())
            .zip(commentaries)
            .map(|((ayah, translated), commentary)| {
                let resolved = commentary
                    .unwrap_or_else(|| ResolvedTafseer::unavailable(default_source.clone()));
                VerseRecord::new(
                    ayah.number_in_surah,
                    ayah.text.clone(),
                    translated.text.clone(),
                    resolved,
                )
            })
            .collect();

        let stats = ChapterStats {
            started_at,
            finished_at: Utc::now(),
            verse_count: verses.len(),
            remote_tafseer: verses.len() - local_tafseer - failed_tafseer,
            local_tafseer,
            failed_tafseer,
        };

        log::info!(
            "Assembled chapter {} ({} verses, {} remote, {} local, {} unavailable)",
            chapter_number,
            stats.verse_count,
            stats.remote_tafseer,
            stats.local_tafseer,
            stats.failed_tafseer
        );

        let chapter = ChapterRecord {
            number: original.number,
            name: original.name,
            english_name: original.english_name,
            english_name_translation: original.english_name_translation,
            revelation_place: original.revelation_type,
            verse_count: original.number_of_ayahs,
            verses,
        };

        Ok(ChapterOutcome { chapter, stats })
    }

    /// Search verses by text in the configured language.
    ///
    /// A not-found answer from the service is an empty result, not an error.
    pub async fn search(&self, query: &str) -> Result<SearchData> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("search query is empty"));
        }

        let mut url = Url::parse(&self.config.api.quran_base)?;
        url.path_segments_mut()
            .map_err(|_| AppError::config("api.quran_base cannot be a base URL"))?
            .push("search")
            .push(trimmed)
            .push("all")
            .push(&self.config.api.search_language);

        let timeout = Duration::from_millis(self.config.fetch.timeout_ms);
        let raw = match self.fetcher.fetch_json(url.as_str(), timeout).await {
            Ok(raw) => raw,
            Err(AppError::HttpStatus { status: 404, .. }) => {
                return Ok(SearchData {
                    count: 0,
                    matches: Vec::new(),
                });
            }
            Err(error) => return Err(AppError::upstream("search", error)),
        };

        let envelope: ApiEnvelope<SearchData> =
            serde_json::from_value(raw).map_err(|e| AppError::upstream("search", e))?;
        Ok(envelope.data)
    }

    /// Single-attempt chapter fetch; failures propagate as upstream errors.
    async fn fetch_chapter_payload(&self, context: &str, url: &str) -> Result<ChapterPayload> {
        let timeout = Duration::from_millis(self.config.fetch.timeout_ms);
        let raw = self
            .fetcher
            .fetch_json(url, timeout)
            .await
            .map_err(|e| AppError::upstream(context, e))?;
        let envelope: ApiEnvelope<ChapterPayload> =
            serde_json::from_value(raw).map_err(|e| AppError::upstream(context, e))?;
        Ok(envelope.data)
    }
}
