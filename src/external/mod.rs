pub mod osrm;

use async_trait::async_trait;

use crate::entities::{Coordinates, Route};
use crate::error::Error;

pub use osrm::OsrmClient;

/// Primary routing strategy: a network service that returns street geometry.
#[async_trait]
pub trait RoutingService {
    async fn walking_route(&self, from: Coordinates, to: Coordinates) -> Result<Route, Error>;
}
