// Track id to fetch operation lookup
use crate::application::track_repository::TrackRepository;
use crate::domain::dataset::{CountRow, TrendRow};
use crate::domain::track::{TimeRange, TrackId};
use futures::future::BoxFuture;
use std::collections::HashMap;

pub type TrendFetcher =
    for<'a> fn(&'a dyn TrackRepository) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>>;

pub type TableFetcher = for<'a> fn(
    &'a dyn TrackRepository,
    &'a TimeRange,
) -> BoxFuture<'a, anyhow::Result<Vec<CountRow>>>;

#[derive(Clone)]
pub struct FetchRegistry {
    trends: HashMap<TrackId, TrendFetcher>,
    tables: HashMap<TrackId, TableFetcher>,
}

impl FetchRegistry {
    pub fn new() -> Self {
        let mut trends: HashMap<TrackId, TrendFetcher> = HashMap::new();
        trends.insert(TrackId::Template, template_trend);
        trends.insert(TrackId::Query, query_trend);
        trends.insert(TrackId::Login, login_trend);
        trends.insert(TrackId::Search, search_trend);
        trends.insert(TrackId::ListExecution, list_execution_trend);
        trends.insert(TrackId::ListCreation, list_creation_trend);

        let mut tables: HashMap<TrackId, TableFetcher> = HashMap::new();
        tables.insert(TrackId::Query, query_table);
        tables.insert(TrackId::Search, search_table);
        tables.insert(TrackId::ListExecution, list_execution_table);
        tables.insert(TrackId::ListCreation, list_creation_table);

        Self { trends, tables }
    }

    pub fn trend(&self, track_id: &str) -> Option<TrendFetcher> {
        TrackId::parse(track_id).and_then(|track| self.trends.get(&track).copied())
    }

    pub fn table(&self, track_id: &str) -> Option<TableFetcher> {
        TrackId::parse(track_id).and_then(|track| self.tables.get(&track).copied())
    }
}

impl Default for FetchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn template_trend<'a>(repo: &'a dyn TrackRepository) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.template_tracks_trend()
}

fn query_trend<'a>(repo: &'a dyn TrackRepository) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.query_tracks_trend()
}

fn login_trend<'a>(repo: &'a dyn TrackRepository) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.login_tracks_trend()
}

fn search_trend<'a>(repo: &'a dyn TrackRepository) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.search_tracks_trend()
}

fn list_execution_trend<'a>(
    repo: &'a dyn TrackRepository,
) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.list_execution_trend()
}

fn list_creation_trend<'a>(
    repo: &'a dyn TrackRepository,
) -> BoxFuture<'a, anyhow::Result<Vec<TrendRow>>> {
    repo.list_creation_trend()
}

fn query_table<'a>(
    repo: &'a dyn TrackRepository,
    range: &'a TimeRange,
) -> BoxFuture<'a, anyhow::Result<Vec<CountRow>>> {
    repo.query_tracks_data_table(range)
}

fn search_table<'a>(
    repo: &'a dyn TrackRepository,
    range: &'a TimeRange,
) -> BoxFuture<'a, anyhow::Result<Vec<CountRow>>> {
    repo.search_tracks_data_table(range)
}

fn list_execution_table<'a>(
    repo: &'a dyn TrackRepository,
    range: &'a TimeRange,
) -> BoxFuture<'a, anyhow::Result<Vec<CountRow>>> {
    repo.list_execution_tracks_data_table(range)
}

fn list_creation_table<'a>(
    repo: &'a dyn TrackRepository,
    range: &'a TimeRange,
) -> BoxFuture<'a, anyhow::Result<Vec<CountRow>>> {
    repo.list_creation_tracks_data_table(range)
}
