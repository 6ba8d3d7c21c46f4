// In-memory repository that records every call, for tests
use crate::application::track_repository::TrackRepository;
use crate::domain::dataset::{CountRow, TrendRow};
use crate::domain::track::TimeRange;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

pub struct RecordingRepository {
    calls: Mutex<Vec<&'static str>>,
    ranges: Mutex<Vec<TimeRange>>,
    trend: Vec<TrendRow>,
    counts: Vec<CountRow>,
    percentages: Vec<Option<CountRow>>,
    fail: bool,
}

impl Default for RecordingRepository {
    fn default() -> Self {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        Self {
            calls: Mutex::new(Vec::new()),
            ranges: Mutex::new(Vec::new()),
            trend: vec![TrendRow { date, count: 3.0 }],
            counts: vec![CountRow::new("genes", 12.0, 4.0)],
            percentages: vec![
                Some(CountRow::new("Gene_Pathway", 40.0, 6.0)),
                Some(CountRow::new("Gene_Orthologues", 25.0, 3.0)),
            ],
            fail: false,
        }
    }
}

impl RecordingRepository {
    pub fn with_percentages(percentages: Vec<Option<CountRow>>) -> Self {
        Self {
            percentages,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn ranges(&self) -> Vec<TimeRange> {
        self.ranges.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, range: Option<&TimeRange>) -> anyhow::Result<()> {
        self.calls.lock().unwrap().push(call);
        if let Some(range) = range {
            self.ranges.lock().unwrap().push(range.clone());
        }
        if self.fail {
            anyhow::bail!("tracking service unavailable");
        }
        Ok(())
    }

    fn trend(&self, call: &'static str) -> anyhow::Result<Vec<TrendRow>> {
        self.record(call, None)?;
        Ok(self.trend.clone())
    }

    fn counts(&self, call: &'static str, range: &TimeRange) -> anyhow::Result<Vec<CountRow>> {
        self.record(call, Some(range))?;
        Ok(self.counts.clone())
    }
}

#[async_trait]
impl TrackRepository for RecordingRepository {
    async fn template_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("template_tracks_trend")
    }

    async fn query_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("query_tracks_trend")
    }

    async fn login_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("login_tracks_trend")
    }

    async fn search_tracks_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("search_tracks_trend")
    }

    async fn list_execution_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("list_execution_trend")
    }

    async fn list_creation_trend(&self) -> anyhow::Result<Vec<TrendRow>> {
        self.trend("list_creation_trend")
    }

    async fn query_tracks_data_table(&self, range: &TimeRange) -> anyhow::Result<Vec<CountRow>> {
        self.counts("query_tracks_data_table", range)
    }

    async fn search_tracks_data_table(&self, range: &TimeRange) -> anyhow::Result<Vec<CountRow>> {
        self.counts("search_tracks_data_table", range)
    }

    async fn list_execution_tracks_data_table(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<CountRow>> {
        self.counts("list_execution_tracks_data_table", range)
    }

    async fn list_creation_tracks_data_table(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<CountRow>> {
        self.counts("list_creation_tracks_data_table", range)
    }

    async fn template_tracks_percentage(
        &self,
        range: &TimeRange,
    ) -> anyhow::Result<Vec<Option<CountRow>>> {
        self.record("template_tracks_percentage", Some(range))?;
        Ok(self.percentages.clone())
    }
}
