mod location;
mod render;
mod route;
mod selection;

pub use location::{Coordinates, Location, LocationDetails, Point};
pub use render::{LineStyle, RenderInstruction, RouteOverlay, RouteSummary, ROUTE_COLOR};
pub use route::Route;
pub use selection::{SelectionState, Toggle, MAX_SELECTED};
