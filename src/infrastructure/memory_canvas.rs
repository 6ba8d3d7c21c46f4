// In-process chart surface
use crate::application::chart_surface::ChartSurface;
use crate::application::error::DashboardError;
use crate::domain::chart::ChartWidget;
use crate::domain::selection::{Selection, SelectionLink};
use std::collections::{BTreeSet, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Container {
    widget: ChartWidget,
    selection: Selection,
}

#[derive(Debug, Default)]
struct CanvasState {
    containers: HashMap<String, Container>,
    links: BTreeSet<SelectionLink>,
}

/// Keeps the last widget drawn into each container along with its
/// selection. Containers exist once something has been drawn into them.
#[derive(Debug, Default)]
pub struct MemoryCanvas {
    state: RwLock<CanvasState>,
}

impl MemoryCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, CanvasState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CanvasState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ChartSurface for MemoryCanvas {
    fn draw(&self, container_id: &str, widget: ChartWidget) {
        let mut state = self.write();
        // A redrawn widget starts unlinked until its caller links it again
        state.links.retain(|link| !link.involves(container_id));
        state.containers.insert(
            container_id.to_string(),
            Container {
                widget,
                selection: Selection::default(),
            },
        );
    }

    fn widget(&self, container_id: &str) -> Option<ChartWidget> {
        self.read()
            .containers
            .get(container_id)
            .map(|c| c.widget.clone())
    }

    fn containers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().containers.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn link_selection(&self, first: &str, second: &str) {
        if !self.write().links.insert(SelectionLink::new(first, second)) {
            tracing::debug!("Selections of {} and {} already linked", first, second);
        }
    }

    fn select(&self, container_id: &str, selection: Selection) -> Result<Vec<String>, DashboardError> {
        let mut state = self.write();

        let container = state
            .containers
            .get_mut(container_id)
            .ok_or_else(|| DashboardError::UnknownContainer(container_id.to_string()))?;
        if selection.is_empty() {
            tracing::debug!("Clearing selection of {}", container_id);
        }
        container.selection = selection.clone();
        let mut changed = vec![container_id.to_string()];

        let partners: Vec<String> = state
            .links
            .iter()
            .filter_map(|link| link.partner_of(container_id))
            .map(str::to_string)
            .collect();

        // Setting a partner's selection does not raise a new selection event,
        // so propagation stops after one hop
        for partner in partners {
            if let Some(target) = state.containers.get_mut(&partner) {
                target.selection = selection.clone();
                changed.push(partner);
            }
        }

        Ok(changed)
    }

    fn selection(&self, container_id: &str) -> Option<Selection> {
        self.read()
            .containers
            .get(container_id)
            .map(|c| c.selection.clone())
    }
}
