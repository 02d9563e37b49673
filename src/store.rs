use std::path::Path;

use serde::Deserialize;

use crate::entities::{Coordinates, Location, LocationDetails, Point};
use crate::error::{dataset_error, Error};

#[derive(Deserialize)]
struct Dataset {
    locations: Vec<Record>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    analysis: String,
    #[serde(default)]
    field_notes: String,
    #[serde(default)]
    image_url: String,
    lat: f64,
    lon: f64,
}

/// Points of interest in dataset order. Read-only once loaded.
#[derive(Debug)]
pub struct LocationStore {
    locations: Vec<Location>,
}

impl LocationStore {
    pub fn new(locations: Vec<Location>) -> Result<Self, Error> {
        if locations.is_empty() {
            return Err(dataset_error("no locations"));
        }

        Ok(Self { locations })
    }

    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let dataset: Dataset = serde_json::from_str(raw)?;

        let locations = dataset
            .locations
            .into_iter()
            .enumerate()
            .map(|(index, record)| Location {
                point: Point {
                    index,
                    name: record.name,
                    coordinates: Coordinates::new(record.lat, record.lon),
                },
                details: LocationDetails {
                    description: record.description,
                    analysis: record.analysis,
                    field_notes: record.field_notes,
                    image_url: record.image_url,
                },
            })
            .collect();

        Self::new(locations)
    }

    #[tracing::instrument(name = "LocationStore::load")]
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let raw = tokio::fs::read_to_string(path).await?;
        let store = Self::from_json(&raw)?;

        tracing::info!("loaded {} locations", store.len());

        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.locations.len()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.get(index).map(|location| &location.point)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.locations.iter().map(|location| &location.point)
    }
}
