//! Tafseer payload and result structures.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Origin marker for results served from the bundled dataset.
pub const ORIGIN_LOCAL: &str = "Local Fallback";

/// Origin marker for placeholder records after total exhaustion.
pub const ORIGIN_ALL_FAILED: &str = "Failed - All sources unavailable";

/// Placeholder text shown when no tafseer could be retrieved.
pub const NO_DATA_MESSAGE: &str =
    "Tafseer temporarily unavailable for this verse. Please try again later.";

/// Commentary source attribution.
///
/// Remote endpoints report numeric ids; the bundled dataset uses the
/// `"local-fallback"` marker, so ids are carried as strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceMeta {
    #[serde(default, deserialize_with = "id_from_number_or_string")]
    pub id: String,

    #[serde(default = "unknown_name")]
    pub name: String,

    #[serde(default)]
    pub author_name: String,

    #[serde(default)]
    pub language_name: String,
}

impl SourceMeta {
    /// Attribution for the bundled dataset.
    pub fn local_fallback() -> Self {
        Self {
            id: "local-fallback".to_string(),
            name: "Local Tafseer Data".to_string(),
            author_name: "Compiled from Classical Sources".to_string(),
            language_name: "English".to_string(),
        }
    }

    /// Human-readable attribution line.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            return "Unknown Source".to_string();
        }
        if self.author_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} by {}", self.name, self.author_name)
        }
    }
}

impl Default for SourceMeta {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: unknown_name(),
            author_name: String::new(),
            language_name: String::new(),
        }
    }
}

fn unknown_name() -> String {
    "Unknown Tafseer".to_string()
}

/// Accept either a JSON number or string for the source id.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "source id must be a number or string, got {other}"
        ))),
    }
}

/// Minimally-typed tafseer endpoint payload.
///
/// Endpoint responses vary in shape; only the `text` field is required,
/// unknown fields are ignored, and `source` attribution is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct TafseerPayload {
    pub text: String,

    #[serde(default)]
    pub source: Option<SourceMeta>,
}

/// Tafseer resolved for one verse, with attribution and provenance.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResolvedTafseer {
    /// Commentary text
    pub text: String,

    /// Source attribution (endpoint-reported or table-derived)
    pub source: SourceMeta,

    /// Endpoint display name, [`ORIGIN_LOCAL`], or [`ORIGIN_ALL_FAILED`].
    /// Diagnostic only; callers must not branch on it.
    pub origin: String,

    /// Raw endpoint payload, absent for local and placeholder results
    pub raw: Option<Value>,
}

impl ResolvedTafseer {
    /// Placeholder record substituted after total exhaustion.
    pub fn unavailable(default_source: SourceMeta) -> Self {
        Self {
            text: NO_DATA_MESSAGE.to_string(),
            source: default_source,
            origin: ORIGIN_ALL_FAILED.to_string(),
            raw: None,
        }
    }
}
