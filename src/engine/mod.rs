mod controller;
pub mod geo;
mod resolver;
mod session;

pub use controller::{ResolveRequest, SelectionController, Source, Status, Transition};
pub use resolver::{DynDistanceMeasure, DynRoutingService, RouteResolver, WALKING_SPEED_KMH};
pub use session::{Event, Session, SessionHandle};
