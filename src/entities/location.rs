use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds coordinates from a `[lon, lat]` pair as emitted by GeoJSON.
    pub fn from_lon_lat([longitude, latitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for geo_types::Coord<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo_types::Coord {
            x: coordinates.longitude,
            y: coordinates.latitude,
        }
    }
}

/// A point of interest. `index` is its position in the loaded dataset and
/// never changes for the lifetime of the program.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub index: usize,
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub description: String,
    pub analysis: String,
    pub field_notes: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub point: Point,
    pub details: LocationDetails,
}
