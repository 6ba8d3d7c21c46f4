// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};
use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_renderer::DashboardRenderer;
use crate::application::page_service::DashboardPageService;
use crate::infrastructure::config::{load_dashboard_config, load_tracking_config};
use crate::infrastructure::http_track_repository::HttpTrackRepository;
use crate::infrastructure::memory_canvas::MemoryCanvas;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let tracking_config = load_tracking_config()?;
    let dashboard_config = load_dashboard_config()?;

    // Create repository and chart surface (infrastructure layer)
    let repository = Arc::new(HttpTrackRepository::new(
        tracking_config.service.host,
        Duration::from_secs(tracking_config.service.timeout_secs),
    )?);
    let canvas = Arc::new(MemoryCanvas::new());

    // Create services (application layer)
    let renderer = DashboardRenderer::new(repository, canvas);
    let page_service = DashboardPageService::new(
        renderer.clone(),
        dashboard_config.requests(),
        dashboard_config.default_time_range,
    );
    tracing::info!("Dashboard page has {} charts", page_service.charts().len());

    // Create application state
    let state = Arc::new(AppState {
        renderer,
        page_service,
    });

    // Build router (presentation layer)
    let router = build_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = tracking_config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", tracking_config.server.bind_address))?;
    tracing::info!("Starting track-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
