// Drawing target trait: named containers holding chart widgets
use crate::application::error::DashboardError;
use crate::domain::chart::ChartWidget;
use crate::domain::selection::Selection;

pub trait ChartSurface: Send + Sync {
    /// Replace whatever `container_id` shows with `widget`
    fn draw(&self, container_id: &str, widget: ChartWidget);

    fn widget(&self, container_id: &str) -> Option<ChartWidget>;

    fn containers(&self) -> Vec<String>;

    /// Mirror selections between two containers in both directions
    fn link_selection(&self, first: &str, second: &str);

    /// Apply a user selection to `container_id` and to every container
    /// linked to it. Returns the containers whose selection changed.
    fn select(&self, container_id: &str, selection: Selection) -> Result<Vec<String>, DashboardError>;

    fn selection(&self, container_id: &str) -> Option<Selection>;
}
