// Repository trait for pre-aggregated tracking data
use crate::domain::dataset::{CountRow, TrendRow};
use crate::domain::track::TimeRange;
use async_trait::async_trait;

#[async_trait]
pub trait TrackRepository: Send + Sync {
    async fn template_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>>;
    async fn query_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>>;
    async fn login_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>>;
    async fn search_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>>;
    async fn list_execution_trend(&self) -> anyhow::Result<Vec<TrendRow>>;
    async fn list_creation_trend(&self) -> anyhow::Result<Vec<TrendRow>>;

    async fn query_tracks_data_table(&self, range: &TimeRange) -> anyhow::Result<Vec<CountRow>>;
    async fn search_tracks_data_table(&self, range: &TimeRange) -> anyhow::Result<Vec<CountRow>>;
    async fn list_execution_tracks_data_table(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<CountRow>>;
    async fn list_creation_tracks_data_table(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<CountRow>>;

    /// Per-template share of tracks. Entries may be absent (`None`).
    async fn template_tracks_percentage(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<Option<CountRow>>>;
}
