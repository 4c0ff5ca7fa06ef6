//! In-memory `HavenApi` used by the controller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use haven_client::{ClientError, HavenApi, Result};
use haven_nav::ListRequest;
use haven_types::{
    DiscordTag, GalaxySummary, RealitySummary, RegionSummary, SearchResponse, SystemSearchHit,
    SystemSummary,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
pub struct MockApi {
    /// One entry per call, e.g. `search:abc` or `systems:reality=Normal&...`.
    pub calls: Mutex<Vec<String>>,
    /// Per-query artificial latency for search.
    pub delays: HashMap<String, Duration>,
    /// Queries whose search fails with a 500.
    pub failing: HashSet<String>,
    /// Every listing call fails with a 503.
    pub fail_listings: bool,
    pub systems: Vec<SystemSummary>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn with_failure(mut self, query: &str) -> Self {
        self.failing.insert(query.to_string());
        self
    }

    pub fn with_systems(mut self, count: usize) -> Self {
        self.systems = (0..count)
            .map(|i| SystemSummary {
                id: format!("sys-{:03}", i),
                name: format!("System {}", i),
                discord_tag: None,
                star_type: None,
                glyph_code: None,
            })
            .collect();
        self
    }

    pub fn failing_listings(mut self) -> Self {
        self.fail_listings = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| c.strip_prefix("search:").map(String::from))
            .collect()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn record_list(&self, name: &str, req: &ListRequest) -> Result<()> {
        let params: Vec<String> = req
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        self.record(format!("{}:{}", name, params.join("&")));
        if self.fail_listings {
            return Err(ClientError::Status {
                status: 503,
                body: "maintenance".into(),
            });
        }
        Ok(())
    }
}

pub fn hit(name: &str) -> SystemSearchHit {
    SystemSearchHit {
        id: format!("id-{}", name),
        name: name.to_string(),
        discord_tag: None,
        star_type: None,
        region_name: None,
        region_x: None,
        region_y: None,
        region_z: None,
        galaxy: Some("Euclid".into()),
        reality: Some("Normal".into()),
        glyph_code: None,
    }
}

#[async_trait]
impl HavenApi for MockApi {
    async fn discord_tags(&self) -> Result<Vec<DiscordTag>> {
        self.record("tags".into());
        Ok(vec![
            DiscordTag {
                tag: "Haven".into(),
                name: "Haven Core".into(),
            },
            DiscordTag {
                tag: "IEA".into(),
                name: "IEA".into(),
            },
        ])
    }

    async fn search_systems(&self, query: &str, _limit: usize) -> Result<SearchResponse> {
        self.record(format!("search:{}", query));
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(query) {
            return Err(ClientError::Status {
                status: 500,
                body: "boom".into(),
            });
        }
        Ok(SearchResponse {
            results: vec![hit(query)],
        })
    }

    async fn list_realities(&self, req: &ListRequest) -> Result<Vec<RealitySummary>> {
        self.record_list("realities", req)?;
        Ok(vec![RealitySummary {
            reality: "Normal".into(),
            system_count: 3,
        }])
    }

    async fn list_galaxies(&self, req: &ListRequest) -> Result<Vec<GalaxySummary>> {
        self.record_list("galaxies", req)?;
        Ok(vec![GalaxySummary {
            galaxy: "Euclid".into(),
            system_count: 3,
        }])
    }

    async fn list_regions(&self, req: &ListRequest) -> Result<Vec<RegionSummary>> {
        self.record_list("regions", req)?;
        Ok(vec![RegionSummary {
            region_x: 5,
            region_y: -3,
            region_z: 12,
            display_name: Some("Odyalutai".into()),
            custom_name: None,
            system_count: 3,
        }])
    }

    async fn list_systems(&self, req: &ListRequest) -> Result<Vec<SystemSummary>> {
        self.record_list("systems", req)?;
        Ok(self.systems.clone())
    }
}
