// Chart widget domain models
use super::dataset::DataTable;
use super::track::TrackId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const ONE_DAY_MS: i64 = 1000 * 60 * 60 * 24;
pub const ZOOM_WINDOW_DAYS: i64 = 30;

const TIME_CHART_PREFIX: &str = "chart_div";
const TABLE_PREFIX: &str = "table_div";
const PIE_CHART_PREFIX: &str = "piechart_div";

/// Container for a track's time-line chart
pub fn time_chart_container(track_id: &str) -> String {
    format!("{}{}", TIME_CHART_PREFIX, track_id)
}

pub fn table_container(track_id: &str) -> String {
    format!("{}{}", TABLE_PREFIX, track_id)
}

pub fn pie_chart_container(track_id: &str) -> String {
    format!("{}{}", PIE_CHART_PREFIX, track_id)
}

/// Start of the default zoom window: `now` minus thirty days
pub fn start_time_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::milliseconds(ZOOM_WINDOW_DAYS * ONE_DAY_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Time,
    Table,
    PieAndTable,
}

impl ChartKind {
    /// Containers a chart of this kind draws into
    pub fn containers(&self, track_id: &str) -> Vec<String> {
        match self {
            Self::Time => vec![time_chart_container(track_id)],
            Self::Table => vec![table_container(track_id)],
            Self::PieAndTable => vec![pie_chart_container(track_id), table_container(track_id)],
        }
    }

    /// Tracks a chart of this kind can fetch data for. The pie always
    /// shows template percentages, whatever its container is named after.
    pub fn supports(&self, track: TrackId) -> bool {
        match self {
            Self::Time => true,
            Self::Table => matches!(
                track,
                TrackId::Query | TrackId::Search | TrackId::ListExecution | TrackId::ListCreation
            ),
            Self::PieAndTable => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLineOptions {
    pub display_annotations: bool,
    pub display_range_selector: bool,
    pub display_legend_dots: bool,
    pub zoom_start_time: DateTime<Utc>,
    pub zoom_end_time: DateTime<Utc>,
}

impl TimeLineOptions {
    /// Annotated, no range selector or legend dots, zoomed to the last 30 days
    pub fn last_thirty_days() -> Self {
        Self::ending_at(Utc::now())
    }

    pub fn ending_at(now: DateTime<Utc>) -> Self {
        Self {
            display_annotations: true,
            display_range_selector: false,
            display_legend_dots: false,
            zoom_start_time: start_time_from(now),
            zoom_end_time: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    pub alternating_row_style: bool,
    pub width: String,
    pub page: &'static str,
    pub page_size: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            alternating_row_style: true,
            width: "600px".to_string(),
            page: "enable",
            page_size: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArea {
    pub left: u32,
    pub top: u32,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieOptions {
    pub width: u32,
    pub height: u32,
    pub legend: &'static str,
    pub chart_area: ChartArea,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            width: 450,
            height: 300,
            legend: "left",
            chart_area: ChartArea {
                left: 20,
                top: 10,
                width: "75%".to_string(),
                height: "60%".to_string(),
            },
        }
    }
}

/// A widget ready to be drawn: its data plus fixed draw options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "camelCase")]
pub enum ChartWidget {
    AnnotatedTimeLine {
        data: DataTable,
        options: TimeLineOptions,
    },
    Table {
        data: DataTable,
        options: TableOptions,
    },
    PieChart {
        data: DataTable,
        options: PieOptions,
    },
}

impl ChartWidget {
    pub fn time_line(data: DataTable) -> Self {
        Self::AnnotatedTimeLine {
            data,
            options: TimeLineOptions::last_thirty_days(),
        }
    }

    pub fn table(data: DataTable) -> Self {
        Self::Table {
            data,
            options: TableOptions::default(),
        }
    }

    pub fn pie(data: DataTable) -> Self {
        Self::PieChart {
            data,
            options: PieOptions::default(),
        }
    }

    pub fn data(&self) -> &DataTable {
        match self {
            Self::AnnotatedTimeLine { data, .. } => data,
            Self::Table { data, .. } => data,
            Self::PieChart { data, .. } => data,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AnnotatedTimeLine { .. } => "annotatedTimeLine",
            Self::Table { .. } => "table",
            Self::PieChart { .. } => "pieChart",
        }
    }
}

/// A widget after it has been drawn into a container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawnChart {
    pub container_id: String,
    #[serde(flatten)]
    pub widget: ChartWidget,
}
