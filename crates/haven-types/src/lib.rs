//! Shared API Types for Haven
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all types crossing the REST
//! boundary between the catalog backend and the browser.
//!
//! ## Rules
//!
//! 1. DATA CONTRACTS only - no behavior beyond small accessors
//! 2. Optional backend fields are `Option` with `#[serde(default)]`
//! 3. Numeric IDs and string IDs are both accepted where the backend is inconsistent

pub mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// COMMUNITY TAGS
// ============================================================================

/// A partner community that owns/tags a subset of systems
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscordTag {
    pub tag: String,
    pub name: String,
}

/// `GET /api/discord_tags` - the backend has shipped both shapes
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DiscordTagsResponse {
    Wrapped { tags: Vec<DiscordTag> },
    Bare(Vec<DiscordTag>),
}

impl DiscordTagsResponse {
    pub fn into_tags(self) -> Vec<DiscordTag> {
        match self {
            DiscordTagsResponse::Wrapped { tags } => tags,
            DiscordTagsResponse::Bare(tags) => tags,
        }
    }
}

// ============================================================================
// SEARCH API
// ============================================================================

/// `GET /api/systems/search?q=&limit=`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SystemSearchHit>,
}

/// One system matched by a free-text search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSearchHit {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub discord_tag: Option<String>,
    #[serde(default)]
    pub star_type: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub region_x: Option<i64>,
    #[serde(default)]
    pub region_y: Option<i64>,
    #[serde(default)]
    pub region_z: Option<i64>,
    #[serde(default)]
    pub galaxy: Option<String>,
    #[serde(default)]
    pub reality: Option<String>,
    #[serde(default)]
    pub glyph_code: Option<String>,
}

impl SystemSearchHit {
    /// Region coordinates, when the backend sent all three
    pub fn region_coords(&self) -> Option<(i64, i64, i64)> {
        Some((self.region_x?, self.region_y?, self.region_z?))
    }
}

/// Accept integer or string IDs; older rows use autoincrement ints
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}
