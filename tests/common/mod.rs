#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use promenade::entities::{Coordinates, Point, RenderInstruction, Route};
use promenade::error::{upstream_error, Error};
use promenade::external::RoutingService;
use promenade::store::LocationStore;
use promenade::ui::Renderer;

pub const DATASET: &str = r#"{
    "locations": [
        { "name": "A", "lat": 45.5350, "lon": -73.6145 },
        { "name": "B", "lat": 45.5365, "lon": -73.6120 },
        { "name": "C", "lat": 45.5390, "lon": -73.6080 }
    ]
}"#;

pub fn store() -> Arc<LocationStore> {
    Arc::new(LocationStore::from_json(DATASET).unwrap())
}

pub fn point(store: &LocationStore, index: usize) -> Point {
    store.point(index).unwrap().clone()
}

pub fn network_route(
    from: Coordinates,
    to: Coordinates,
    distance_km: f64,
    duration_min: u32,
) -> Route {
    Route::Network {
        polyline: vec![from, to],
        distance_km,
        duration_min,
    }
}

/// Always fails, as an unreachable service or an HTTP error status would.
pub struct Offline;

#[async_trait]
impl RoutingService for Offline {
    async fn walking_route(&self, _: Coordinates, _: Coordinates) -> Result<Route, Error> {
        Err(upstream_error())
    }
}

/// Answers with a fixed distance and duration and records every request.
pub struct Recording {
    pub distance_km: f64,
    pub duration_min: u32,
    pub calls: Mutex<Vec<(Coordinates, Coordinates)>>,
}

impl Recording {
    pub fn new(distance_km: f64, duration_min: u32) -> Self {
        Self {
            distance_km,
            duration_min,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RoutingService for Recording {
    async fn walking_route(&self, from: Coordinates, to: Coordinates) -> Result<Route, Error> {
        self.calls.lock().unwrap().push((from, to));
        Ok(network_route(from, to, self.distance_km, self.duration_min))
    }
}

/// Takes `slow` to answer when routing towards `slow_destination`, `fast` otherwise.
pub struct Delayed {
    pub slow_destination: Coordinates,
    pub slow: Duration,
    pub fast: Duration,
}

#[async_trait]
impl RoutingService for Delayed {
    async fn walking_route(&self, from: Coordinates, to: Coordinates) -> Result<Route, Error> {
        let delay = if to == self.slow_destination {
            self.slow
        } else {
            self.fast
        };
        tokio::time::sleep(delay).await;

        Ok(network_route(from, to, 1.0, 12))
    }
}

pub struct Recorder(mpsc::UnboundedSender<RenderInstruction>);

impl Renderer for Recorder {
    fn render(&mut self, instruction: &RenderInstruction) {
        let _ = self.0.send(instruction.clone());
    }
}

pub fn recorder() -> (Recorder, mpsc::UnboundedReceiver<RenderInstruction>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Recorder(tx), rx)
}
