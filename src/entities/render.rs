use std::fmt;

use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, Point, Route};

pub const ROUTE_COLOR: &str = "#1FB8CD";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    pub opacity: f64,
    pub dash_array: Option<String>,
}

impl LineStyle {
    pub fn solid() -> Self {
        Self {
            color: ROUTE_COLOR.into(),
            weight: 4,
            opacity: 0.8,
            dash_array: None,
        }
    }

    pub fn dashed() -> Self {
        Self {
            dash_array: Some("8,4".into()),
            ..Self::solid()
        }
    }

    pub fn for_route(route: &Route) -> Self {
        if route.is_estimated() {
            Self::dashed()
        } else {
            Self::solid()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteOverlay {
    pub path: Vec<Coordinates>,
    pub style: LineStyle,
}

impl RouteOverlay {
    pub fn to_line_string(&self) -> LineString<f64> {
        self.path
            .iter()
            .map(|c| geo_types::Coord::from(*c))
            .collect()
    }
}

/// Text shown in the route panel next to the clear control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub duration: String,
}

impl RouteSummary {
    pub fn new(from: &Point, to: &Point, route: &Route) -> Self {
        let mut duration = format!("{} min", route.duration_min());
        if route.is_estimated() {
            duration.push_str(" approx.");
        }

        Self {
            from: from.name.clone(),
            to: to.name.clone(),
            distance: format!("{:.2} km", round_half_up(route.distance_km(), 2)),
            duration,
        }
    }
}

/// Rounds ties away from zero; `{:.2}` alone would round them to even.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl fmt::Display for RouteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route: {} → {} | Distance: {} | Walking time: {}",
            self.from, self.to, self.distance, self.duration
        )
    }
}

/// Complete description of what the UI must show after a transition.
///
/// `selected` and `expanded` are full sets: anything absent is off.
/// `collapsed` lists the cards whose expanded state this transition revoked.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub selected: Vec<usize>,
    pub expanded: Vec<usize>,
    pub collapsed: Vec<usize>,
    pub route: Option<RouteOverlay>,
    pub panel: Option<RouteSummary>,
}

impl RenderInstruction {
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }
}
