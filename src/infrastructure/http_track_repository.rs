// Tracking service repository implementation over HTTP
use crate::application::track_repository::TrackRepository;
use crate::domain::dataset::{CountRow, TrendRow};
use crate::domain::track::{TimeRange, TrackId};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpTrackRepository {
    host: String,
    client: reqwest::Client,
}

impl HttpTrackRepository {
    pub fn new(host: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build tracking service client")?;

        Ok(Self {
            host: host.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_url(&self, track: TrackId, operation: &str, range: Option<&TimeRange>) -> String {
        let mut url = format!("{}/service/tracks/{}/{}", self.host, track, operation);
        if let Some(range) = range {
            url.push_str("?timeRange=");
            url.push_str(&urlencoding::encode(range.as_str()));
        }
        url
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        track: TrackId,
        operation: &str,
        range: Option<&TimeRange>,
    ) -> Result<Vec<T>> {
        let url = self.build_url(track, operation, range);
        tracing::debug!("Fetching tracks from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to tracking service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Tracking service {} failed with status {}: {}", url, status, body);
        }

        response
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("Failed to parse tracking service response from {}", url))
    }

    async fn trend(&self, track: TrackId) -> Result<Vec<TrendRow>> {
        self.fetch_rows(track, "trend", None).await
    }

    async fn data_table(&self, track: TrackId, range: &TimeRange) -> Result<Vec<CountRow>> {
        self.fetch_rows(track, "table", Some(range)).await
    }
}

#[async_trait]
impl TrackRepository for HttpTrackRepository {
    async fn template_tracks_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::Template).await
    }

    async fn query_tracks_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::Query).await
    }

    async fn login_tracks_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::Login).await
    }

    async fn search_tracks_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::Search).await
    }

    async fn list_execution_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::ListExecution).await
    }

    async fn list_creation_trend(&self) -> Result<Vec<TrendRow>> {
        self.trend(TrackId::ListCreation).await
    }

    async fn query_tracks_data_table(&self, range: &TimeRange) -> Result<Vec<CountRow>> {
        self.data_table(TrackId::Query, range).await
    }

    async fn search_tracks_data_table(&self, range: &TimeRange) -> Result<Vec<CountRow>> {
        self.data_table(TrackId::Search, range).await
    }

    async fn list_execution_tracks_data_table(&self, range: &TimeRange) -> Result<Vec<CountRow>> {
        self.data_table(TrackId::ListExecution, range).await
    }

    async fn list_creation_tracks_data_table(&self, range: &TimeRange) -> Result<Vec<CountRow>> {
        self.data_table(TrackId::ListCreation, range).await
    }

    async fn template_tracks_percentage(&self, range: &TimeRange) -> Result<Vec<Option<CountRow>>> {
        self.fetch_rows(TrackId::Template, "percentage", Some(range))
            .await
    }
}
