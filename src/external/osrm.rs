use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::RoutingService;
use crate::{
    config::Config,
    entities::{Coordinates, Route},
    error::{invalid_input_error, upstream_error, Error},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub geometry: Geometry,
    /// Meters.
    pub distance: f64,
    /// Seconds.
    pub duration: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<RouteCandidate>,
}

impl Response {
    /// Converts the first candidate into a `Route::Network`, swapping GeoJSON
    /// `[lon, lat]` pairs into latitude/longitude order.
    pub fn into_route(self) -> Result<Route, Error> {
        if self.code != "Ok" {
            return Err(upstream_error());
        }

        let candidate = self.routes.into_iter().next().ok_or_else(upstream_error)?;

        if candidate.geometry.coordinates.is_empty()
            || !candidate.distance.is_finite()
            || !candidate.duration.is_finite()
        {
            return Err(upstream_error());
        }

        let polyline = candidate
            .geometry
            .coordinates
            .into_iter()
            .map(Coordinates::from_lon_lat)
            .collect();

        Ok(Route::Network {
            polyline,
            distance_km: candidate.distance / 1000.0,
            duration_min: (candidate.duration / 60.0).round() as u32,
        })
    }
}

#[derive(Clone, Debug)]
pub struct OsrmClient {
    client: reqwest::Client,
    base: String,
    profile: String,
}

impl OsrmClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.routing_timeout)
            .build()?;

        Ok(Self {
            client,
            base: config.routing_base.clone(),
            profile: config.routing_profile.clone(),
        })
    }

    pub fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base, self.profile, from.longitude, from.latitude, to.longitude, to.latitude
        )
    }
}

#[async_trait]
impl RoutingService for OsrmClient {
    #[tracing::instrument(skip(self))]
    async fn walking_route(&self, from: Coordinates, to: Coordinates) -> Result<Route, Error> {
        let res = self
            .client
            .get(self.route_url(from, to))
            .query(&[("overview", "full")])
            .query(&[("geometries", "geojson")])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if (400..500).contains(&status_code) {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response = res.json().await?;

        data.into_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Route, Error> {
        serde_json::from_str::<Response>(raw)?.into_route()
    }

    #[test]
    fn converts_first_candidate_to_network_route() {
        let route = parse(
            r#"{
                "code": "Ok",
                "routes": [
                    {
                        "geometry": { "coordinates": [[-73.6145, 45.535], [-73.61, 45.537]], "type": "LineString" },
                        "distance": 1234.0,
                        "duration": 890.0
                    },
                    {
                        "geometry": { "coordinates": [[0.0, 0.0]] },
                        "distance": 1.0,
                        "duration": 1.0
                    }
                ],
                "waypoints": []
            }"#,
        )
        .unwrap();

        assert_eq!(
            route.polyline(),
            &[
                Coordinates::new(45.535, -73.6145),
                Coordinates::new(45.537, -73.61)
            ]
        );
        assert_eq!(route.distance_km(), 1.234);
        // 890 s = 14.83 min
        assert_eq!(route.duration_min(), 15);
        assert!(!route.is_estimated());
    }

    #[test]
    fn rejects_non_ok_status_and_empty_routes() {
        assert_eq!(
            parse(r#"{"code": "NoRoute", "message": "Impossible route"}"#)
                .unwrap_err()
                .code,
            4
        );
        assert_eq!(parse(r#"{"code": "Ok", "routes": []}"#).unwrap_err().code, 4);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        let result = parse(
            r#"{"code": "Ok", "routes": [{"geometry": {"coordinates": [[1.0]]}, "distance": 1.0, "duration": 1.0}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn builds_lon_lat_url() {
        let client = OsrmClient::new(&Config::default()).unwrap();
        let url = client.route_url(
            Coordinates::new(45.535, -73.6145),
            Coordinates::new(45.537, -73.61),
        );
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/foot/-73.6145,45.535;-73.61,45.537"
        );
    }
}
