use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    entities::{
        LineStyle, Point, RenderInstruction, Route, RouteOverlay, RouteSummary, SelectionState,
        Toggle,
    },
    store::LocationStore,
};

/// Where a selection click came from. Card clicks also expand the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Card,
    Marker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Idle,
    OneSelected,
    Pending { generation: u64 },
    Resolved,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::OneSelected => "one_selected".into(),
            Self::Pending { generation: _ } => "pending".into(),
            Self::Resolved => "resolved".into(),
        }
    }
}

/// A route resolution the controller wants started. The result must be fed
/// back through [`SelectionController::complete`] with the same generation.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolveRequest {
    pub generation: u64,
    pub from: Point,
    pub to: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub instruction: RenderInstruction,
    pub request: Option<ResolveRequest>,
}

pub struct SelectionController {
    store: Arc<LocationStore>,
    selection: SelectionState,
    expanded: Vec<usize>,
    route: Option<Route>,
    generation: u64,
}

impl SelectionController {
    pub fn new(store: Arc<LocationStore>) -> Self {
        Self {
            store,
            selection: SelectionState::new(),
            expanded: Vec::new(),
            route: None,
            generation: 0,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn status(&self) -> Status {
        match (self.selection.len(), &self.route) {
            (0, _) => Status::Idle,
            (1, _) => Status::OneSelected,
            (_, None) => Status::Pending {
                generation: self.generation,
            },
            (_, Some(_)) => Status::Resolved,
        }
    }

    /// Toggles `index` in the selection.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a loaded point; event dispatch must only
    /// produce known indices.
    #[tracing::instrument(skip(self))]
    pub fn select(&mut self, index: usize, source: Source) -> Transition {
        assert!(
            self.store.contains(index),
            "selection index {} out of range ({} points)",
            index,
            self.store.len()
        );

        self.generation += 1;
        self.route = None;

        let mut collapsed = Vec::new();
        match self.selection.toggle(index) {
            Toggle::Added => self.expand_if_card(index, source),
            Toggle::Removed => {
                self.collapse(index);
                collapsed.push(index);
            }
            Toggle::Replaced { evicted } => {
                self.collapse(evicted);
                collapsed.push(evicted);
                self.expand_if_card(index, source);
            }
        }

        let request = self.selection.pair().map(|(a, b)| ResolveRequest {
            generation: self.generation,
            from: self.point(a).clone(),
            to: self.point(b).clone(),
        });

        tracing::info!(
            "selection is now {:?} ({})",
            self.selection.indices(),
            self.status().name()
        );

        Transition {
            instruction: self.render(collapsed),
            request,
        }
    }

    /// Handles both the map background click and the clear control.
    #[tracing::instrument(skip(self))]
    pub fn clear(&mut self) -> RenderInstruction {
        self.generation += 1;
        self.route = None;

        let collapsed = self.selection.indices().to_vec();
        self.selection.clear();
        self.expanded.clear();

        self.render(collapsed)
    }

    /// Applies a finished resolution. Results issued under an older
    /// generation are dropped and produce no instruction.
    #[tracing::instrument(skip(self, route))]
    pub fn complete(&mut self, generation: u64, route: Route) -> Option<RenderInstruction> {
        if generation != self.generation || self.selection.pair().is_none() {
            tracing::debug!(
                "dropping stale route (current generation {})",
                self.generation
            );
            return None;
        }

        self.route = Some(route);

        Some(self.render(Vec::new()))
    }

    /// Instruction for the current state with no transition-specific collapses.
    pub fn current(&self) -> RenderInstruction {
        self.render(Vec::new())
    }

    fn render(&self, collapsed: Vec<usize>) -> RenderInstruction {
        let (route, panel) = match (self.selection.pair(), &self.route) {
            (Some((a, b)), Some(route)) => (
                Some(RouteOverlay {
                    path: route.polyline().to_vec(),
                    style: LineStyle::for_route(route),
                }),
                Some(RouteSummary::new(self.point(a), self.point(b), route)),
            ),
            _ => (None, None),
        };

        RenderInstruction {
            selected: self.selection.indices().to_vec(),
            expanded: self.expanded.clone(),
            collapsed,
            route,
            panel,
        }
    }

    fn expand_if_card(&mut self, index: usize, source: Source) {
        if source == Source::Card && !self.expanded.contains(&index) {
            self.expanded.push(index);
        }
    }

    fn collapse(&mut self, index: usize) {
        self.expanded.retain(|i| *i != index);
    }

    fn point(&self, index: usize) -> &Point {
        &self.store.locations()[index].point
    }
}
