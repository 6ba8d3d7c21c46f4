// Dashboard domain model
use super::chart::ChartKind;
use super::track::TimeRange;
use serde::Serialize;

/// One chart on a dashboard page, as asked for by a caller
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub track_id: String,
    pub time_range: Option<TimeRange>,
    pub column_name: Option<String>,
    pub title: Option<String>,
}

impl ChartRequest {
    pub fn containers(&self) -> Vec<String> {
        self.kind.containers(&self.track_id)
    }
}

#[cfg(test)]
impl ChartRequest {
    pub fn time(track_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Time,
            track_id: track_id.into(),
            time_range: None,
            column_name: None,
            title: Some(title.into()),
        }
    }

    pub fn table(track_id: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::Table,
            track_id: track_id.into(),
            time_range: None,
            column_name: Some(column_name.into()),
            title: None,
        }
    }

    pub fn pie_and_table(track_id: impl Into<String>, column_name: impl Into<String>) -> Self {
        Self {
            kind: ChartKind::PieAndTable,
            ..Self::table(track_id, column_name)
        }
    }

    pub fn with_time_range(mut self, time_range: TimeRange) -> Self {
        self.time_range = Some(time_range);
        self
    }
}

/// Layout sent ahead of any chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSkeleton {
    pub time_range: TimeRange,
    pub charts: Vec<ChartSkeleton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSkeleton {
    pub kind: ChartKind,
    pub track_id: String,
    pub containers: Vec<String>,
}

impl DashboardSkeleton {
    pub fn new(time_range: TimeRange, requests: &[ChartRequest]) -> Self {
        let charts = requests
            .iter()
            .map(|r| ChartSkeleton {
                kind: r.kind,
                track_id: r.track_id.clone(),
                containers: r.containers(),
            })
            .collect();

        Self { time_range, charts }
    }
}
