// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_container, get_selection, health_check, list_containers, pie_chart, select, stream_dashboard,
    table_chart, time_chart,
};
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/charts/time/:track_id", get(time_chart))
        .route("/charts/table/:track_id", get(table_chart))
        .route("/charts/pie/:track_id", get(pie_chart))
        .route("/containers", get(list_containers))
        .route("/containers/:container_id", get(get_container))
        .route(
            "/containers/:container_id/selection",
            get(get_selection).post(select),
        )
        .route("/dashboard", get(stream_dashboard))
        .with_state(state)
}
