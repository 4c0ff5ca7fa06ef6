//! HavenApi trait, the sole API boundary between the browser and the catalog
//! backend. The browser depends on this crate, never on reqwest directly.

pub mod error;
pub mod http;

pub use error::ClientError;
pub use http::{HttpClient, HttpClientConfig};

use async_trait::async_trait;
use haven_nav::ListRequest;
use haven_types::{
    DiscordTag, GalaxySummary, RealitySummary, RegionSummary, SearchResponse, SystemSummary,
};

pub type Result<T> = std::result::Result<T, ClientError>;

#[async_trait]
pub trait HavenApi: Send + Sync {
    /// Community tags for the filter dropdown.
    async fn discord_tags(&self) -> Result<Vec<DiscordTag>>;

    /// Free-text system search.
    async fn search_systems(&self, query: &str, limit: usize) -> Result<SearchResponse>;

    // ── Level listings ─────────────────────────────────────────
    // Each receives the full position + filters; implementations forward
    // them as-is and never interpret the filter values.

    async fn list_realities(&self, req: &ListRequest) -> Result<Vec<RealitySummary>>;

    async fn list_galaxies(&self, req: &ListRequest) -> Result<Vec<GalaxySummary>>;

    async fn list_regions(&self, req: &ListRequest) -> Result<Vec<RegionSummary>>;

    /// Systems in a region, or every system in the galaxy in view-all mode.
    async fn list_systems(&self, req: &ListRequest) -> Result<Vec<SystemSummary>>;
}
