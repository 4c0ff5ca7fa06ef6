//! HTTP implementation of `HavenApi`.

use crate::{ClientError, HavenApi, Result};
use async_trait::async_trait;
use haven_nav::ListRequest;
use haven_types::{
    DiscordTag, DiscordTagsResponse, GalaxySummary, ListEnvelope, RealitySummary,
    RegionSummary, SearchResponse, SystemSummary,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8005";
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub base_url: String,
    /// Sent as `X-API-Key` when present.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

pub struct HttpClient {
    http: Client,
    base: String,
    api_key: Option<String>,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let base = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|_| ClientError::InvalidUrl(config.base_url.clone()))?;

        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base,
            api_key: config.api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        let url = format!("{}{}", self.base, path);
        debug!(%url, params = query.len(), "GET");

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .query(query);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str, req: &ListRequest) -> Result<Vec<T>> {
        let envelope: ListEnvelope<T> = self.get(path, &req.to_query_pairs()).await?;
        Ok(envelope.into_items())
    }
}

#[async_trait]
impl HavenApi for HttpClient {
    async fn discord_tags(&self) -> Result<Vec<DiscordTag>> {
        let resp: DiscordTagsResponse = self.get("/api/discord_tags", &[]).await?;
        Ok(resp.into_tags())
    }

    async fn search_systems(&self, query: &str, limit: usize) -> Result<SearchResponse> {
        info!(query, limit, "searching systems");
        let params = vec![
            ("q".to_string(), query.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        self.get("/api/systems/search", &params).await
    }

    async fn list_realities(&self, req: &ListRequest) -> Result<Vec<RealitySummary>> {
        self.get_list("/api/hierarchy/realities", req).await
    }

    async fn list_galaxies(&self, req: &ListRequest) -> Result<Vec<GalaxySummary>> {
        self.get_list("/api/hierarchy/galaxies", req).await
    }

    async fn list_regions(&self, req: &ListRequest) -> Result<Vec<RegionSummary>> {
        self.get_list("/api/hierarchy/regions", req).await
    }

    async fn list_systems(&self, req: &ListRequest) -> Result<Vec<SystemSummary>> {
        self.get_list("/api/hierarchy/systems", req).await
    }
}
