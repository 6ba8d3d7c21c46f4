// Application state for HTTP handlers
use crate::application::dashboard_renderer::DashboardRenderer;
use crate::application::page_service::DashboardPageService;

#[derive(Clone)]
pub struct AppState {
    pub renderer: DashboardRenderer,
    pub page_service: DashboardPageService,
}
