//! Catalog Hierarchy Types
//!
//! Rows returned by the per-level listing endpoints:
//! Reality → Galaxy → Region → System.

use serde::{Deserialize, Serialize};

// ============================================================================
// LEVEL ROWS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealitySummary {
    pub reality: String,
    #[serde(default)]
    pub system_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxySummary {
    pub galaxy: String,
    #[serde(default)]
    pub system_count: u64,
}

/// A coordinate-keyed grouping of systems within a galaxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region_x: i64,
    pub region_y: i64,
    pub region_z: i64,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub custom_name: Option<String>,
    #[serde(default)]
    pub system_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSummary {
    #[serde(deserialize_with = "crate::deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub discord_tag: Option<String>,
    #[serde(default)]
    pub star_type: Option<String>,
    #[serde(default)]
    pub glyph_code: Option<String>,
}

// ============================================================================
// ENVELOPE
// ============================================================================

/// Listing endpoints return either a bare array or `{ "items": [...] }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { items: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Wrapped { items } => items,
            ListEnvelope::Bare(items) => items,
        }
    }
}
