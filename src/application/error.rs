// Errors surfaced by dashboard rendering
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("no {kind} data for track '{track_id}'")]
    UnsupportedTrack { kind: &'static str, track_id: String },

    #[error("failed to fetch tracks: {0:#}")]
    Fetch(#[from] anyhow::Error),

    #[error("container '{0}' has nothing drawn in it")]
    UnknownContainer(String),
}
