use crate::domain::chart::ChartKind;
use crate::domain::dashboard::ChartRequest;
use crate::domain::track::{TimeRange, TrackId};
use serde::Deserialize;

const ENV_PREFIX: &str = "TRACK_DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct TrackingConfig {
    pub service: ServiceSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSettings {
    pub host: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default = "default_time_range")]
    pub default_time_range: TimeRange,
    #[serde(default)]
    pub charts: Vec<ChartConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub track_id: String,
    pub title: Option<String>,
    pub column_name: Option<String>,
    pub time_range: Option<TimeRange>,
}

impl DashboardConfig {
    /// Chart requests in page order. Combinations that cannot fetch data are
    /// kept, so the page still reports them, but are warned about here.
    pub fn requests(&self) -> Vec<ChartRequest> {
        self.charts
            .iter()
            .map(|chart| {
                let supported = TrackId::parse(&chart.track_id)
                    .map(|track| chart.kind.supports(track))
                    .unwrap_or(false);
                if !supported {
                    tracing::warn!(
                        "Configured {:?} chart for track '{}' has no data source",
                        chart.kind,
                        chart.track_id
                    );
                }

                ChartRequest {
                    kind: chart.kind,
                    track_id: chart.track_id.clone(),
                    time_range: chart.time_range.clone(),
                    column_name: chart.column_name.clone(),
                    title: chart.title.clone(),
                }
            })
            .collect()
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_time_range() -> TimeRange {
    TimeRange::new("30")
}

pub fn load_tracking_config() -> anyhow::Result<TrackingConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/tracking"))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
