// HTTP request handlers
use crate::application::dashboard_renderer::DEFAULT_COLUMN_NAME;
use crate::application::error::DashboardError;
use crate::domain::selection::Selection;
use crate::domain::track::TimeRange;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response, json_response_with_status};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TimeChartQuery {
    pub title: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableQuery {
    pub time_range: Option<TimeRange>,
    pub column: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub time_range: Option<TimeRange>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Draw a track's trend as a time line
pub async fn time_chart(
    Path(track_id): Path<String>,
    Query(query): Query<TimeChartQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let title = query.title.unwrap_or_else(|| track_id.clone());
    let result = state.renderer.render_time_series(&track_id, &title).await;
    respond(result, accepts_brotli(&headers)).await
}

/// Draw a track's per-label totals as a table
pub async fn table_chart(
    Path(track_id): Path<String>,
    Query(query): Query<TableQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let range = query
        .time_range
        .unwrap_or_else(|| state.page_service.default_range().clone());
    let column = query.column.as_deref().unwrap_or(DEFAULT_COLUMN_NAME);

    let result = state.renderer.render_table(&range, &track_id, column).await;
    respond(result, accepts_brotli(&headers)).await
}

/// Draw template percentages as a linked pie and table
pub async fn pie_chart(
    Path(track_id): Path<String>,
    Query(query): Query<TableQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let range = query
        .time_range
        .unwrap_or_else(|| state.page_service.default_range().clone());
    let column = query.column.as_deref().unwrap_or(DEFAULT_COLUMN_NAME);

    let result = state
        .renderer
        .render_pie_and_table(&range, &track_id, column)
        .await;
    respond(result, accepts_brotli(&headers)).await
}

pub async fn list_containers(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let containers = state.renderer.surface().containers();
    respond(Ok(containers), accepts_brotli(&headers)).await
}

pub async fn get_container(
    Path(container_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = state
        .renderer
        .surface()
        .widget(&container_id)
        .ok_or(DashboardError::UnknownContainer(container_id));
    respond(result, accepts_brotli(&headers)).await
}

pub async fn get_selection(
    Path(container_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let result = state
        .renderer
        .surface()
        .selection(&container_id)
        .ok_or(DashboardError::UnknownContainer(container_id));
    respond(result, accepts_brotli(&headers)).await
}

/// Apply a user selection; linked containers follow it
pub async fn select(
    Path(container_id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(selection): Json<Selection>,
) -> Response {
    let result = state.renderer.surface().select(&container_id, selection);
    respond(result, accepts_brotli(&headers)).await
}

/// Stream every configured chart of the dashboard page (progressive loading)
pub async fn stream_dashboard(
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let rx = state.page_service.stream_page(query.time_range).await;
    stream_from_receiver(rx, accepts_brotli(&headers)).await
}

fn status_for(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::UnsupportedTrack { .. } | DashboardError::UnknownContainer(_) => {
            StatusCode::NOT_FOUND
        }
        DashboardError::Fetch(_) => StatusCode::BAD_GATEWAY,
    }
}

async fn respond<T: Serialize>(result: Result<T, DashboardError>, compress: bool) -> Response {
    let response = match result {
        Ok(data) => json_response(&data, compress).await,
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                tracing::error!("Request failed: {}", e);
            }
            let body = ErrorBody {
                error: e.to_string(),
            };
            json_response_with_status(status, &body, compress).await
        }
    };

    response.unwrap_or_else(|status| status.into_response())
}
