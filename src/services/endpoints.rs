//! Ordered tafseer endpoint registry.

use crate::models::{EndpointConfig, VerseLocator};

/// Ordered list of tafseer endpoints.
///
/// Endpoints are sorted ascending by priority at construction; iteration
/// order is the attempt order. Equal priorities keep their configured
/// order (the sort is stable).
#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: Vec<EndpointConfig>,
}

impl EndpointRegistry {
    /// Build a registry from endpoint definitions.
    pub fn new(mut endpoints: Vec<EndpointConfig>) -> Self {
        endpoints.sort_by_key(|e| e.priority);
        Self { endpoints }
    }

    /// Endpoints in attempt order.
    pub fn endpoints(&self) -> &[EndpointConfig] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Build the request URL for one endpoint and verse.
    ///
    /// Substitutes whichever of `{source}`, `{chapter}`, `{verse}` the
    /// template contains; a template may omit `{source}` when the endpoint
    /// hosts a single edition.
    pub fn build_url(endpoint: &EndpointConfig, source_id: &str, locator: VerseLocator) -> String {
        let path = endpoint
            .path_template
            .replace("{source}", source_id)
            .replace("{chapter}", &locator.chapter.to_string())
            .replace("{verse}", &locator.verse.to_string());
        format!(
            "{}/{}",
            endpoint.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: &str, base: &str, template: &str, priority: u32) -> EndpointConfig {
        EndpointConfig {
            name: name.to_string(),
            base_url: base.to_string(),
            path_template: template.to_string(),
            priority,
        }
    }

    #[test]
    fn test_registry_sorts_by_priority() {
        let registry = EndpointRegistry::new(vec![
            endpoint("C", "http://c.test", "/{chapter}/{verse}.json", 3),
            endpoint("A", "http://a.test", "/{chapter}/{verse}.json", 1),
            endpoint("B", "http://b.test", "/{chapter}/{verse}.json", 2),
        ]);
        let names: Vec<&str> = registry.endpoints().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_equal_priorities_keep_config_order() {
        let registry = EndpointRegistry::new(vec![
            endpoint("First", "http://a.test", "/{chapter}/{verse}", 1),
            endpoint("Second", "http://b.test", "/{chapter}/{verse}", 1),
        ]);
        assert_eq!(registry.endpoints()[0].name, "First");
    }

    #[test]
    fn test_build_url_substitutes_placeholders() {
        let ep = endpoint(
            "Quran Tafseer API",
            "http://api.quran-tafseer.com",
            "/tafseer/{source}/{chapter}/{verse}",
            1,
        );
        let locator = VerseLocator::new(2, 255).unwrap();
        assert_eq!(
            EndpointRegistry::build_url(&ep, "1", locator),
            "http://api.quran-tafseer.com/tafseer/1/2/255"
        );
    }

    #[test]
    fn test_build_url_without_source_placeholder() {
        let ep = endpoint(
            "Mirror",
            "https://mirror.test/tafsir/",
            "/en-tafisr-ibn-kathir/{chapter}/{verse}.json",
            2,
        );
        let locator = VerseLocator::new(112, 3).unwrap();
        assert_eq!(
            EndpointRegistry::build_url(&ep, "1", locator),
            "https://mirror.test/tafsir/en-tafisr-ibn-kathir/112/3.json"
        );
    }
}
