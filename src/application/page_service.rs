// Dashboard page service - Progressive rendering of every configured chart
use crate::application::dashboard_renderer::DashboardRenderer;
use crate::domain::chart::DrawnChart;
use crate::domain::dashboard::{ChartRequest, DashboardSkeleton};
use crate::domain::track::TimeRange;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PageMessage {
    Skeleton(DashboardSkeleton),
    ChartDrawn {
        track_id: String,
        charts: Vec<DrawnChart>,
    },
    ChartFailed {
        track_id: String,
        containers: Vec<String>,
        error: String,
    },
    Complete {
        charts: usize,
        duration_ms: i64,
    },
}

#[derive(Clone)]
pub struct DashboardPageService {
    renderer: DashboardRenderer,
    charts: Vec<ChartRequest>,
    default_range: TimeRange,
}

impl DashboardPageService {
    pub fn new(renderer: DashboardRenderer, charts: Vec<ChartRequest>, default_range: TimeRange) -> Self {
        Self {
            renderer,
            charts,
            default_range,
        }
    }

    pub fn charts(&self) -> &[ChartRequest] {
        &self.charts
    }

    pub fn default_range(&self) -> &TimeRange {
        &self.default_range
    }

    /// Render every chart of the page concurrently. The skeleton comes
    /// first, chart results follow in completion order, `Complete` last.
    pub async fn stream_page(&self, range: Option<TimeRange>) -> mpsc::Receiver<PageMessage> {
        let (tx, rx) = mpsc::channel(100);
        let start_time = Instant::now();
        let range = range.unwrap_or_else(|| self.default_range.clone());

        let skeleton = DashboardSkeleton::new(range.clone(), &self.charts);
        let _ = tx.send(PageMessage::Skeleton(skeleton)).await;

        let mut tasks = Vec::with_capacity(self.charts.len());
        for request in &self.charts {
            let tx = tx.clone();
            let renderer = self.renderer.clone();
            let request = request.clone();
            let range = range.clone();

            tasks.push(tokio::spawn(async move {
                let msg = match renderer.render(&request, &range).await {
                    Ok(charts) => PageMessage::ChartDrawn {
                        track_id: request.track_id.clone(),
                        charts,
                    },
                    Err(e) => {
                        tracing::warn!("Chart for track {} not drawn: {}", request.track_id, e);
                        PageMessage::ChartFailed {
                            track_id: request.track_id.clone(),
                            containers: request.containers(),
                            error: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(msg).await;
            }));
        }

        let total_charts = self.charts.len();
        tokio::spawn(async move {
            for task in futures::future::join_all(tasks).await {
                if let Err(e) = task {
                    tracing::error!("Chart task panicked: {}", e);
                }
            }

            let duration_ms = start_time.elapsed().as_millis() as i64;
            tracing::debug!("Rendered {} charts in {}ms", total_charts, duration_ms);
            let _ = tx
                .send(PageMessage::Complete {
                    charts: total_charts,
                    duration_ms,
                })
                .await;
        });

        rx
    }
}
