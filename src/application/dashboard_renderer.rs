// Dashboard renderer - Use case for drawing track charts
use crate::application::chart_surface::ChartSurface;
use crate::application::error::DashboardError;
use crate::application::fetch_registry::FetchRegistry;
use crate::application::track_repository::TrackRepository;
use crate::domain::chart::{
    pie_chart_container, table_container, time_chart_container, ChartKind, ChartWidget, DrawnChart,
};
use crate::domain::dashboard::ChartRequest;
use crate::domain::dataset::{DataTable, Row};
use crate::domain::track::TimeRange;
use std::sync::Arc;

/// Label of the first table column when the caller names none
pub const DEFAULT_COLUMN_NAME: &str = "Name";

#[derive(Clone)]
pub struct DashboardRenderer {
    repository: Arc<dyn TrackRepository>,
    surface: Arc<dyn ChartSurface>,
    registry: FetchRegistry,
}

impl DashboardRenderer {
    pub fn new(repository: Arc<dyn TrackRepository>, surface: Arc<dyn ChartSurface>) -> Self {
        Self {
            repository,
            surface,
            registry: FetchRegistry::new(),
        }
    }

    /// Draw the trend of `track_id` as an annotated time line zoomed to the
    /// last thirty days. Unknown tracks fetch and draw nothing.
    pub async fn render_time_series(
        &self,
        track_id: &str,
        title: &str,
    ) -> Result<DrawnChart, DashboardError> {
        let Some(fetch) = self.registry.trend(track_id) else {
            tracing::debug!("No trend source for track {}, skipping chart", track_id);
            return Err(DashboardError::UnsupportedTrack {
                kind: "trend",
                track_id: track_id.to_string(),
            });
        };

        let tracks = fetch(self.repository.as_ref()).await?;
        tracing::debug!("Fetched {} trend rows for {}", tracks.len(), track_id);

        let widget = ChartWidget::time_line(DataTable::trend(title, tracks));
        Ok(self.draw(time_chart_container(track_id), widget))
    }

    /// Draw per-label totals of `track_id` as a paginated table
    pub async fn render_table(
        &self,
        range: &TimeRange,
        track_id: &str,
        column_name: &str,
    ) -> Result<DrawnChart, DashboardError> {
        let Some(fetch) = self.registry.table(track_id) else {
            tracing::debug!("No table source for track {}, skipping table", track_id);
            return Err(DashboardError::UnsupportedTrack {
                kind: "table",
                track_id: track_id.to_string(),
            });
        };

        let tracks = fetch(self.repository.as_ref(), range).await?;
        tracing::debug!("Fetched {} table rows for {}", tracks.len(), track_id);

        let data = DataTable::counts(column_name, tracks.into_iter().map(Row::from));
        Ok(self.draw(table_container(track_id), ChartWidget::table(data)))
    }

    /// Draw template percentages as a pie of the leading rows next to a table
    /// of all rows, with their selections linked. `track_id` only names the
    /// containers.
    pub async fn render_pie_and_table(
        &self,
        range: &TimeRange,
        track_id: &str,
        column_name: &str,
    ) -> Result<Vec<DrawnChart>, DashboardError> {
        let tracks = self.repository.template_tracks_percentage(range).await?;
        tracing::debug!("Fetched {} template percentage rows", tracks.len());

        let pie = ChartWidget::pie(DataTable::pie_slices(column_name, &tracks));
        let table = ChartWidget::table(DataTable::count_table(column_name, &tracks));

        let pie = self.draw(pie_chart_container(track_id), pie);
        let table = self.draw(table_container(track_id), table);
        self.surface
            .link_selection(&table.container_id, &pie.container_id);

        Ok(vec![pie, table])
    }

    /// Render any chart request. Requests without a time range use `default_range`.
    pub async fn render(
        &self,
        request: &ChartRequest,
        default_range: &TimeRange,
    ) -> Result<Vec<DrawnChart>, DashboardError> {
        let range = request.time_range.as_ref().unwrap_or(default_range);
        let column_name = request.column_name.as_deref().unwrap_or(DEFAULT_COLUMN_NAME);

        match request.kind {
            ChartKind::Time => {
                let title = request.title.as_deref().unwrap_or(&request.track_id);
                Ok(vec![self.render_time_series(&request.track_id, title).await?])
            }
            ChartKind::Table => Ok(vec![
                self.render_table(range, &request.track_id, column_name).await?,
            ]),
            ChartKind::PieAndTable => {
                self.render_pie_and_table(range, &request.track_id, column_name)
                    .await
            }
        }
    }

    pub fn surface(&self) -> &Arc<dyn ChartSurface> {
        &self.surface
    }

    fn draw(&self, container_id: String, widget: ChartWidget) -> DrawnChart {
        let rows = widget.data().len();
        if widget.data().is_empty() {
            tracing::debug!("Drawing empty {} into {}", widget.name(), container_id);
        } else {
            tracing::debug!("Drawing {} with {} rows into {}", widget.name(), rows, container_id);
        }
        self.surface.draw(&container_id, widget.clone());
        DrawnChart {
            container_id,
            widget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::RecordingRepository;
    use crate::domain::dataset::CountRow;
    use crate::domain::selection::Selection;
    use crate::domain::track::TrackId;
    use crate::infrastructure::memory_canvas::MemoryCanvas;

    fn renderer(repo: Arc<RecordingRepository>) -> (DashboardRenderer, Arc<MemoryCanvas>) {
        let canvas = Arc::new(MemoryCanvas::new());
        (DashboardRenderer::new(repo, canvas.clone()), canvas)
    }

    fn range() -> TimeRange {
        TimeRange::new("30")
    }

    #[tokio::test]
    async fn test_time_series_fetches_only_its_trend() {
        let expected = [
            (TrackId::Template, "template_tracks_trend"),
            (TrackId::Query, "query_tracks_trend"),
            (TrackId::Login, "login_tracks_trend"),
            (TrackId::Search, "search_tracks_trend"),
            (TrackId::ListExecution, "list_execution_trend"),
            (TrackId::ListCreation, "list_creation_trend"),
        ];

        for (track, call) in expected {
            let repo = Arc::new(RecordingRepository::default());
            let (renderer, _) = renderer(repo.clone());

            renderer.render_time_series(track.as_str(), "Tracks").await.unwrap();
            assert_eq!(repo.calls(), vec![call]);
        }
    }

    #[tokio::test]
    async fn test_unknown_track_fetches_nothing() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, canvas) = renderer(repo.clone());

        let result = renderer.render_time_series("download", "Downloads").await;
        assert!(matches!(result, Err(DashboardError::UnsupportedTrack { .. })));

        let result = renderer.render_table(&range(), "login", "Login").await;
        assert!(matches!(result, Err(DashboardError::UnsupportedTrack { .. })));

        assert!(repo.calls().is_empty());
        assert!(canvas.containers().is_empty());
    }

    #[tokio::test]
    async fn test_table_passes_range_and_draws_its_container() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, canvas) = renderer(repo.clone());

        let drawn = renderer
            .render_table(&range(), "listCreation", "List")
            .await
            .unwrap();

        assert_eq!(repo.calls(), vec!["list_creation_tracks_data_table"]);
        assert_eq!(repo.ranges(), vec![range()]);
        assert_eq!(drawn.container_id, "table_divlistCreation");
        assert_eq!(canvas.containers(), vec!["table_divlistCreation"]);
        assert_eq!(drawn.widget.data().columns()[0].label, "List");
    }

    #[tokio::test]
    async fn test_table_touches_only_its_container() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, canvas) = renderer(repo);

        canvas.draw("table_divsearch", ChartWidget::table(DataTable::counts("Keyword", Vec::new())));
        canvas.draw("chart_divquery", ChartWidget::table(DataTable::counts("x", Vec::new())));
        let search = canvas.widget("table_divsearch");
        let chart = canvas.widget("chart_divquery");

        renderer.render_table(&range(), "query", "Query").await.unwrap();

        assert_eq!(canvas.widget("table_divsearch"), search);
        assert_eq!(canvas.widget("chart_divquery"), chart);
        assert_eq!(
            canvas.widget("table_divquery").map(|w| w.data().len()),
            Some(1)
        );
    }

    #[tokio::test]
    async fn test_time_series_touches_only_its_container() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, canvas) = renderer(repo);

        canvas.draw("chart_divquery", ChartWidget::table(DataTable::counts("x", Vec::new())));
        let before = canvas.widget("chart_divquery");

        renderer.render_time_series("login", "Logins").await.unwrap();

        assert_eq!(canvas.widget("chart_divquery"), before);
        assert!(matches!(
            canvas.widget("chart_divlogin"),
            Some(ChartWidget::AnnotatedTimeLine { .. })
        ));
    }

    #[tokio::test]
    async fn test_pie_and_table_split_rows() {
        let rows: Vec<Option<CountRow>> = (0..7)
            .map(|i| Some(CountRow::new(format!("template{}", i), 10.0 - i as f64, 2.0)))
            .collect();
        let repo = Arc::new(RecordingRepository::with_percentages(rows));
        let (renderer, canvas) = renderer(repo.clone());

        let drawn = renderer
            .render_pie_and_table(&range(), "template", "Template")
            .await
            .unwrap();

        assert_eq!(repo.calls(), vec!["template_tracks_percentage"]);
        assert_eq!(drawn[0].container_id, "piechart_divtemplate");
        assert_eq!(drawn[0].widget.data().len(), 5);
        assert_eq!(drawn[1].container_id, "table_divtemplate");
        assert_eq!(drawn[1].widget.data().len(), 7);
        assert_eq!(canvas.containers().len(), 2);
    }

    #[tokio::test]
    async fn test_pie_and_table_with_few_rows() {
        let rows = vec![
            Some(CountRow::new("a", 1.0, 1.0)),
            None,
            Some(CountRow::new("c", 3.0, 1.0)),
        ];
        let repo = Arc::new(RecordingRepository::with_percentages(rows));
        let (renderer, _) = renderer(repo);

        let drawn = renderer
            .render_pie_and_table(&range(), "template", "Template")
            .await
            .unwrap();

        assert_eq!(drawn[0].widget.data().len(), 2);
        assert_eq!(drawn[1].widget.data().len(), 3);
    }

    #[tokio::test]
    async fn test_pie_and_table_names_containers_after_track() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, _) = renderer(repo.clone());

        let drawn = renderer
            .render_pie_and_table(&range(), "query", "Query")
            .await
            .unwrap();

        assert_eq!(repo.calls(), vec!["template_tracks_percentage"]);
        assert_eq!(drawn[0].container_id, "piechart_divquery");
        assert_eq!(drawn[1].container_id, "table_divquery");
    }

    #[tokio::test]
    async fn test_pie_and_table_selections_are_linked() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, canvas) = renderer(repo);

        renderer
            .render_pie_and_table(&range(), "template", "Template")
            .await
            .unwrap();

        canvas
            .select("table_divtemplate", Selection::rows([1]))
            .unwrap();
        assert_eq!(canvas.selection("piechart_divtemplate"), Some(Selection::rows([1])));

        canvas
            .select("piechart_divtemplate", Selection::rows([0]))
            .unwrap();
        assert_eq!(canvas.selection("table_divtemplate"), Some(Selection::rows([0])));
    }

    #[tokio::test]
    async fn test_fetch_failure_draws_nothing() {
        let repo = Arc::new(RecordingRepository::failing());
        let (renderer, canvas) = renderer(repo);

        let result = renderer.render_time_series("query", "Queries").await;
        assert!(matches!(result, Err(DashboardError::Fetch(_))));
        assert!(canvas.containers().is_empty());
    }

    #[tokio::test]
    async fn test_render_request_defaults() {
        let repo = Arc::new(RecordingRepository::default());
        let (renderer, _) = renderer(repo.clone());

        let request = ChartRequest::table("search", "Keyword");
        let drawn = renderer.render(&request, &range()).await.unwrap();
        assert_eq!(drawn.len(), 1);
        assert_eq!(repo.ranges(), vec![range()]);

        let request = ChartRequest::time("login", "Logins")
            .with_time_range(TimeRange::new("7"));
        let drawn = renderer.render(&request, &range()).await.unwrap();
        assert_eq!(drawn[0].widget.data().columns()[1].label, "Logins");
    }
}
