use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    /// Street geometry returned by the routing service.
    Network {
        polyline: Vec<Coordinates>,
        distance_km: f64,
        duration_min: u32,
    },
    /// Straight segment between the endpoints, used when the service fails.
    Estimated {
        straight_line: [Coordinates; 2],
        distance_km: f64,
        duration_min: u32,
    },
}

impl Route {
    pub fn polyline(&self) -> &[Coordinates] {
        match self {
            Self::Network { polyline, .. } => polyline,
            Self::Estimated { straight_line, .. } => straight_line,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Network { distance_km, .. } | Self::Estimated { distance_km, .. } => {
                *distance_km
            }
        }
    }

    pub fn duration_min(&self) -> u32 {
        match self {
            Self::Network { duration_min, .. } | Self::Estimated { duration_min, .. } => {
                *duration_min
            }
        }
    }

    pub fn is_estimated(&self) -> bool {
        matches!(self, Self::Estimated { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimated_route_exposes_its_endpoints_as_polyline() {
        let a = Coordinates::new(45.5350, -73.6145);
        let b = Coordinates::new(45.5370, -73.6100);
        let route = Route::Estimated {
            straight_line: [a, b],
            distance_km: 0.41,
            duration_min: 6,
        };

        assert_eq!(route.polyline(), &[a, b]);
        assert!(route.is_estimated());
        assert_eq!(route.duration_min(), 6);
    }
}
