//! Filter composition.
//!
//! The community tag and the advanced filters live beside the hierarchy, not
//! inside it. Both are forwarded untouched to whichever list renders at the
//! current level; what `untagged` or `personal` mean is the backend's call.

use crate::hierarchy::{CurrentLevel, HierarchyState, Region};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// COMMUNITY TAG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommunityTag {
    #[default]
    All,
    Untagged,
    Personal,
    Tag(String),
}

impl CommunityTag {
    pub fn as_str(&self) -> &str {
        match self {
            CommunityTag::All => "all",
            CommunityTag::Untagged => "untagged",
            CommunityTag::Personal => "personal",
            CommunityTag::Tag(t) => t,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CommunityTag::All)
    }
}

impl From<&str> for CommunityTag {
    fn from(s: &str) -> Self {
        match s.trim() {
            "" | "all" => CommunityTag::All,
            "untagged" => CommunityTag::Untagged,
            "personal" => CommunityTag::Personal,
            other => CommunityTag::Tag(other.to_string()),
        }
    }
}

impl From<String> for CommunityTag {
    fn from(s: String) -> Self {
        CommunityTag::from(s.as_str())
    }
}

impl From<CommunityTag> for String {
    fn from(tag: CommunityTag) -> Self {
        tag.as_str().to_string()
    }
}

impl fmt::Display for CommunityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ADVANCED FILTERS
// ============================================================================

/// Opaque filter object; keys and values are whatever the filter panel sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvancedFilters(Map<String, Value>);

impl AdvancedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten to query parameters. Scalars are stringified, arrays are
    /// comma-joined, nulls and empty strings are dropped, objects are sent as JSON.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(key, value)| flatten(value).map(|v| (key.clone(), v)))
            .collect()
    }
}

impl From<Map<String, Value>> for AdvancedFilters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(","))
            }
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

// ============================================================================
// FILTER STATE + LIST REQUEST
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub community_tag: CommunityTag,
    pub advanced: AdvancedFilters,
}

/// Everything a level listing receives: position plus filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRequest {
    pub level: CurrentLevel,
    pub reality: Option<String>,
    pub galaxy: Option<String>,
    pub region: Option<Region>,
    pub discord_tag: CommunityTag,
    pub filters: AdvancedFilters,
}

impl ListRequest {
    pub fn new(state: &HierarchyState, filters: &FilterState) -> Self {
        Self {
            level: state.current_level(),
            reality: state.reality.clone(),
            galaxy: state.galaxy.clone(),
            region: state.region.clone(),
            discord_tag: filters.community_tag.clone(),
            filters: filters.advanced.clone(),
        }
    }

    /// Query parameters for the listing endpoint. `discord_tag` is omitted
    /// for `all`; region keys only appear at the systems level.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(reality) = &self.reality {
            pairs.push(("reality".to_string(), reality.clone()));
        }
        if let Some(galaxy) = &self.galaxy {
            pairs.push(("galaxy".to_string(), galaxy.clone()));
        }
        if let (CurrentLevel::Systems, Some(region)) = (self.level, &self.region) {
            pairs.push(("region_x".to_string(), region.region_x.to_string()));
            pairs.push(("region_y".to_string(), region.region_y.to_string()));
            pairs.push(("region_z".to_string(), region.region_z.to_string()));
        }
        if !self.discord_tag.is_all() {
            pairs.push(("discord_tag".to_string(), self.discord_tag.to_string()));
        }
        pairs.extend(self.filters.to_query_pairs());
        pairs
    }
}
