use geo_types::LineString;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::entities::{LineStyle, Point, RenderInstruction, RouteSummary};
use crate::store::LocationStore;

pub const MARKER_PALETTE: [&str; 5] = ["#1FB8CD", "#FFC185", "#B4413C", "#5D878F", "#DB4545"];

/// Receives every instruction the session emits, in order.
pub trait Renderer {
    fn render(&mut self, instruction: &RenderInstruction);
}

/// Publishes the latest instruction for pollers (the HTTP surface).
impl Renderer for watch::Sender<RenderInstruction> {
    fn render(&mut self, instruction: &RenderInstruction) {
        self.send_replace(instruction.clone());
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub label: String,
    pub fill: String,
}

impl MarkerIcon {
    pub fn for_index(index: usize) -> Self {
        Self {
            label: (index + 1).to_string(),
            fill: MARKER_PALETTE[index % MARKER_PALETTE.len()].into(),
        }
    }
}

pub trait MapWidget {
    type Layer;

    fn add_marker(&mut self, point: &Point, icon: &MarkerIcon) -> Self::Layer;
    fn highlight_marker(&mut self, marker: &Self::Layer, highlighted: bool);
    /// `line` follows the GIS axis order: x is longitude, y is latitude.
    fn draw_line(&mut self, line: &LineString<f64>, style: &LineStyle) -> Self::Layer;
    fn remove_layer(&mut self, layer: Self::Layer);
}

pub trait CardList {
    fn set_selected(&mut self, index: usize, selected: bool);
    fn set_expanded(&mut self, index: usize, expanded: bool);
}

pub trait RoutePanel {
    fn show(&mut self, summary: &RouteSummary);
    fn hide(&mut self);
}

/// Applies instructions to a map widget, a card list and a route panel.
/// Holds at most one route line at a time.
pub struct WidgetRenderer<M: MapWidget, C, P> {
    map: M,
    cards: C,
    panel: P,
    markers: Vec<M::Layer>,
    line: Option<M::Layer>,
}

impl<M: MapWidget, C: CardList, P: RoutePanel> WidgetRenderer<M, C, P> {
    pub fn new(mut map: M, cards: C, panel: P, store: &LocationStore) -> Self {
        let markers = store
            .points()
            .map(|point| map.add_marker(point, &MarkerIcon::for_index(point.index)))
            .collect();

        Self {
            map,
            cards,
            panel,
            markers,
            line: None,
        }
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn cards(&self) -> &C {
        &self.cards
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }
}

impl<M: MapWidget, C: CardList, P: RoutePanel> Renderer for WidgetRenderer<M, C, P> {
    fn render(&mut self, instruction: &RenderInstruction) {
        for (index, marker) in self.markers.iter().enumerate() {
            let selected = instruction.is_selected(index);
            self.cards.set_selected(index, selected);
            self.cards.set_expanded(index, instruction.is_expanded(index));
            self.map.highlight_marker(marker, selected);
        }

        if let Some(line) = self.line.take() {
            self.map.remove_layer(line);
        }

        if let Some(overlay) = &instruction.route {
            let line = overlay.to_line_string();
            self.line = Some(self.map.draw_line(&line, &overlay.style));
        }

        match &instruction.panel {
            Some(summary) => self.panel.show(summary),
            None => self.panel.hide(),
        }
    }
}
