// Application layer - Use cases and the seams to external collaborators
pub mod chart_surface;
pub mod dashboard_renderer;
pub mod error;
pub mod fetch_registry;
pub mod page_service;
pub mod track_repository;

#[cfg(test)]
pub mod testing;
