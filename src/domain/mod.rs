// Domain layer - Tracks, datasets, chart widgets and selections
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod selection;
pub mod track;
