use std::sync::Arc;

use super::geo::{DistanceMeasure, Haversine};
use crate::{
    entities::{Point, Route},
    external::RoutingService,
};

/// Average walking speed assumed for straight-line estimates.
pub const WALKING_SPEED_KMH: f64 = 4.3;

pub type DynRoutingService = Arc<dyn RoutingService + Send + Sync>;
pub type DynDistanceMeasure = Arc<dyn DistanceMeasure + Send + Sync>;

/// Resolves a walking route between two points. Never fails: any error from
/// the routing service degrades to a straight-line estimate.
#[derive(Clone)]
pub struct RouteResolver {
    service: DynRoutingService,
    measure: DynDistanceMeasure,
}

impl RouteResolver {
    pub fn new(service: DynRoutingService) -> Self {
        Self {
            service,
            measure: Arc::new(Haversine),
        }
    }

    pub fn with_measure(mut self, measure: DynDistanceMeasure) -> Self {
        self.measure = measure;
        self
    }

    #[tracing::instrument(skip_all, fields(from = %from.name, to = %to.name))]
    pub async fn resolve(&self, from: &Point, to: &Point) -> Route {
        match self
            .service
            .walking_route(from.coordinates, to.coordinates)
            .await
        {
            Ok(route) => {
                tracing::info!(
                    "resolved route: {:.2} km, {} min",
                    route.distance_km(),
                    route.duration_min()
                );
                route
            }
            Err(err) => {
                tracing::warn!("routing service failed, using straight line: {}", err);
                self.estimate(from, to)
            }
        }
    }

    pub fn estimate(&self, from: &Point, to: &Point) -> Route {
        let distance_km = self
            .measure
            .distance_between(from.coordinates, to.coordinates)
            / 1000.0;
        let duration_min = (distance_km / WALKING_SPEED_KMH * 60.0).round() as u32;

        Route::Estimated {
            straight_line: [from.coordinates, to.coordinates],
            distance_km,
            duration_min,
        }
    }
}
