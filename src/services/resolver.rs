//! Tafseer fallback resolution engine.
//!
//! Attempts each registered endpoint in priority order, then consults the
//! bundled dataset before surfacing a terminal failure. Individual endpoint
//! failures are recovered here and never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use crate::data::{local_tafseer, sources};
use crate::error::{AppError, Result};
use crate::models::{
    Config, EndpointConfig, ResolvedTafseer, SourceMeta, TafseerPayload, VerseLocator,
    ORIGIN_LOCAL,
};

use super::endpoints::EndpointRegistry;
use super::fetcher::EndpointFetch;

/// Resolves tafseer for single verses through the fallback chain.
pub struct TafseerResolver {
    config: Arc<Config>,
    registry: EndpointRegistry,
    fetcher: Arc<dyn EndpointFetch>,
}

impl TafseerResolver {
    /// Create a resolver over the configured endpoint list.
    pub fn new(config: Arc<Config>, fetcher: Arc<dyn EndpointFetch>) -> Self {
        let registry = EndpointRegistry::new(config.endpoints.clone());
        Self {
            config,
            registry,
            fetcher,
        }
    }

    /// Endpoints in attempt order.
    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Resolve tafseer for one verse.
    ///
    /// Endpoints are tried strictly in ascending priority order with a
    /// cooldown between attempts; the first success wins. When every
    /// endpoint fails, the bundled dataset is consulted (independent of
    /// `source_id`). Only total exhaustion returns an error, carrying one
    /// diagnostic entry per failed attempt.
    pub async fn resolve(
        &self,
        source_id: &str,
        locator: VerseLocator,
    ) -> Result<ResolvedTafseer> {
        let timeout = Duration::from_millis(self.config.fetch.timeout_ms);
        let cooldown = Duration::from_millis(self.config.fetch.cooldown_ms);
        let mut attempts: Vec<String> = Vec::new();

        for (index, endpoint) in self.registry.endpoints().iter().enumerate() {
            if index > 0 && !cooldown.is_zero() {
                tokio::time::sleep(cooldown).await;
            }

            match self.try_endpoint(endpoint, source_id, locator, timeout).await {
                Ok(resolved) => return Ok(resolved),
                Err(error) => {
                    log::warn!(
                        "Tafseer endpoint '{}' failed for {}: {}",
                        endpoint.name,
                        locator,
                        error
                    );
                    attempts.push(format!("{}: {}", endpoint.name, error));
                }
            }
        }

        if self.config.fetch.enable_local_fallback {
            if let Some(text) = local_tafseer::lookup(locator.chapter, locator.verse) {
                log::info!("Serving bundled tafseer for {}", locator);
                return Ok(ResolvedTafseer {
                    text: text.to_string(),
                    source: SourceMeta::local_fallback(),
                    origin: ORIGIN_LOCAL.to_string(),
                    raw: None,
                });
            }
        }

        Err(AppError::AllEndpointsExhausted {
            chapter: locator.chapter,
            verse: locator.verse,
            attempts,
            local_checked: self.config.fetch.enable_local_fallback,
        })
    }

    /// One attempt against one endpoint.
    async fn try_endpoint(
        &self,
        endpoint: &EndpointConfig,
        source_id: &str,
        locator: VerseLocator,
        timeout: Duration,
    ) -> Result<ResolvedTafseer> {
        let url = EndpointRegistry::build_url(endpoint, source_id, locator);
        let raw = self.fetcher.fetch_json(&url, timeout).await?;

        let payload: TafseerPayload =
            serde_json::from_value(raw.clone()).map_err(|e| AppError::payload(url.as_str(), e))?;
        if payload.text.trim().is_empty() {
            return Err(AppError::payload(url.as_str(), "empty text field"));
        }

        let source = payload
            .source
            .unwrap_or_else(|| sources::meta_for(source_id));

        Ok(ResolvedTafseer {
            text: payload.text,
            source,
            origin: endpoint.name.clone(),
            raw: Some(raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    /// Scripted fetcher: known URLs answer with a fixed payload, everything
    /// else fails as a transport error. Records every URL requested.
    struct StubFetcher {
        responses: HashMap<String, Value>,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(responses: HashMap<String, Value>) -> Self {
            Self {
                responses,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn calls_to(&self, host: &str) -> usize {
            self.calls().iter().filter(|u| u.contains(host)).count()
        }
    }

    #[async_trait]
    impl EndpointFetch for StubFetcher {
        async fn fetch_json(&self, url: &str, _timeout: Duration) -> Result<Value> {
            self.calls.lock().unwrap().push(url.to_string());
            match self.responses.get(url) {
                Some(value) => Ok(value.clone()),
                None => Err(AppError::transport(url, "connection refused")),
            }
        }
    }

    fn endpoint(name: &str, base: &str, priority: u32) -> EndpointConfig {
        EndpointConfig {
            name: name.to_string(),
            base_url: base.to_string(),
            path_template: "/tafseer/{source}/{chapter}/{verse}".to_string(),
            priority,
        }
    }

    /// Three test endpoints, deliberately out of order in the config.
    fn test_config() -> Config {
        let mut config = Config::default();
        config.fetch.cooldown_ms = 0;
        config.endpoints = vec![
            endpoint("Endpoint C", "http://c.test", 3),
            endpoint("Endpoint A", "http://a.test", 1),
            endpoint("Endpoint B", "http://b.test", 2),
        ];
        config
    }

    fn resolver_with(
        config: Config,
        responses: HashMap<String, Value>,
    ) -> (TafseerResolver, Arc<StubFetcher>) {
        let fetcher = Arc::new(StubFetcher::new(responses));
        let shared: Arc<dyn EndpointFetch> = fetcher.clone();
        let resolver = TafseerResolver::new(Arc::new(config), shared);
        (resolver, fetcher)
    }

    fn tafseer_payload(text: &str) -> Value {
        json!({ "text": text })
    }

    #[tokio::test]
    async fn test_first_success_wins_and_later_endpoints_not_tried() {
        let mut responses = HashMap::new();
        responses.insert(
            "http://b.test/tafseer/1/2/255".to_string(),
            tafseer_payload("from B"),
        );
        responses.insert(
            "http://c.test/tafseer/1/2/255".to_string(),
            tafseer_payload("from C"),
        );
        let (resolver, fetcher) = resolver_with(test_config(), responses);

        let locator = VerseLocator::new(2, 255).unwrap();
        let resolved = resolver.resolve("1", locator).await.unwrap();

        assert_eq!(resolved.origin, "Endpoint B");
        assert_eq!(resolved.text, "from B");
        assert_eq!(fetcher.calls_to("c.test"), 0);
        assert_eq!(
            fetcher.calls(),
            vec![
                "http://a.test/tafseer/1/2/255".to_string(),
                "http://b.test/tafseer/1/2/255".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_local_fallback_when_all_endpoints_fail() {
        let (resolver, fetcher) = resolver_with(test_config(), HashMap::new());

        let locator = VerseLocator::new(1, 1).unwrap();
        let resolved = resolver.resolve("1", locator).await.unwrap();

        assert_eq!(resolved.origin, ORIGIN_LOCAL);
        assert!(!resolved.text.is_empty());
        assert_eq!(resolved.source.id, "local-fallback");
        assert_eq!(resolved.source.name, "Local Tafseer Data");
        assert!(resolved.raw.is_none());
        // All three endpoints were attempted before falling back.
        assert_eq!(fetcher.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_without_local_data() {
        let (resolver, _) = resolver_with(test_config(), HashMap::new());

        let locator = VerseLocator::new(2, 1).unwrap();
        let error = resolver.resolve("1", locator).await.unwrap_err();

        match error {
            AppError::AllEndpointsExhausted {
                chapter,
                verse,
                attempts,
                local_checked,
            } => {
                assert_eq!((chapter, verse), (2, 1));
                assert!(local_checked);
                assert_eq!(attempts.len(), 3);
                assert!(attempts[0].starts_with("Endpoint A:"));
                assert!(attempts[1].starts_with("Endpoint B:"));
                assert!(attempts[2].starts_with("Endpoint C:"));
            }
            other => panic!("expected AllEndpointsExhausted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_disabled_local_fallback_fails_even_with_data() {
        let mut config = test_config();
        config.fetch.enable_local_fallback = false;
        let (resolver, _) = resolver_with(config, HashMap::new());

        let locator = VerseLocator::new(1, 1).unwrap();
        let error = resolver.resolve("1", locator).await.unwrap_err();

        assert!(matches!(
            error,
            AppError::AllEndpointsExhausted {
                local_checked: false,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_malformed_payload_falls_through_to_next_endpoint() {
        let mut responses = HashMap::new();
        // Endpoint A answers, but without the required text field.
        responses.insert(
            "http://a.test/tafseer/1/18/10".to_string(),
            json!({ "status": "ok" }),
        );
        responses.insert(
            "http://b.test/tafseer/1/18/10".to_string(),
            tafseer_payload("from B"),
        );
        let (resolver, _) = resolver_with(test_config(), responses);

        let locator = VerseLocator::new(18, 10).unwrap();
        let resolved = resolver.resolve("1", locator).await.unwrap();
        assert_eq!(resolved.origin, "Endpoint B");
    }

    #[tokio::test]
    async fn test_missing_source_defaults_from_table() {
        let mut responses = HashMap::new();
        responses.insert(
            "http://a.test/tafseer/1/3/7".to_string(),
            tafseer_payload("commentary"),
        );
        let (resolver, _) = resolver_with(test_config(), responses);

        let locator = VerseLocator::new(3, 7).unwrap();
        let resolved = resolver.resolve("1", locator).await.unwrap();

        assert_eq!(resolved.source.name, "Tafsir Ibn Kathir");
        assert_eq!(resolved.source.id, "1");
    }

    #[tokio::test]
    async fn test_endpoint_reported_source_is_kept() {
        let mut responses = HashMap::new();
        responses.insert(
            "http://a.test/tafseer/2/3/7".to_string(),
            json!({
                "text": "commentary",
                "source": {
                    "id": 2,
                    "name": "Tafsir Al-Jalalayn",
                    "author_name": "Jalal ad-Din al-Mahalli and Jalal ad-Din as-Suyuti",
                    "language_name": "English"
                }
            }),
        );
        let (resolver, _) = resolver_with(test_config(), responses);

        let locator = VerseLocator::new(3, 7).unwrap();
        let resolved = resolver.resolve("2", locator).await.unwrap();
        assert_eq!(resolved.source.name, "Tafsir Al-Jalalayn");
        assert_eq!(resolved.source.id, "2");
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let mut responses = HashMap::new();
        responses.insert(
            "http://b.test/tafseer/1/112/1".to_string(),
            tafseer_payload("from B"),
        );
        let (resolver, _) = resolver_with(test_config(), responses);

        let locator = VerseLocator::new(112, 1).unwrap();
        let first = resolver.resolve("1", locator).await.unwrap();
        let second = resolver.resolve("1", locator).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_waits_between_attempts() {
        let mut config = test_config();
        config.fetch.cooldown_ms = 1000;
        let (resolver, fetcher) = resolver_with(config, HashMap::new());

        // Paused clock: sleeps auto-advance, so exhaustion still completes
        // and every endpoint is attempted exactly once.
        let locator = VerseLocator::new(2, 1).unwrap();
        let error = resolver.resolve("1", locator).await.unwrap_err();
        assert!(matches!(error, AppError::AllEndpointsExhausted { .. }));
        assert_eq!(fetcher.calls().len(), 3);
    }
}
