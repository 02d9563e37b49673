use crate::entities::Coordinates;

/// Mean earth radius used by the map widget's spherical CRS.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Point-to-point distance as the map widget measures it on screen.
pub trait DistanceMeasure {
    /// Meters between `a` and `b`.
    fn distance_between(&self, a: Coordinates, b: Coordinates) -> f64;
}

/// Great-circle distance on a sphere of `EARTH_RADIUS_METERS`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Haversine;

impl DistanceMeasure for Haversine {
    fn distance_between(&self, a: Coordinates, b: Coordinates) -> f64 {
        let lat_a = a.latitude.to_radians();
        let lat_b = b.latitude.to_radians();
        let sin_dlat = ((b.latitude - a.latitude).to_radians() / 2.0).sin();
        let sin_dlon = ((b.longitude - a.longitude).to_radians() / 2.0).sin();

        let h = sin_dlat * sin_dlat + lat_a.cos() * lat_b.cos() * sin_dlon * sin_dlon;
        let c = 2.0 * f64::atan2(h.sqrt(), (1.0 - h).sqrt());

        EARTH_RADIUS_METERS * c
    }
}
