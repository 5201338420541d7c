use itertools::Itertools;
use model::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = to_radians(from.latitude);
    let lon1_rad = to_radians(from.longitude);
    let lat2_rad = to_radians(to.latitude);
    let lon2_rad = to_radians(to.longitude);

    let dlat = lat2_rad - lat1_rad;
    let dlon = lon2_rad - lon1_rad;

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Length of an open polyline in kilometers.
pub fn path_length_km(points: &[GeoPoint]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| haversine_distance(*a, *b))
        .sum()
}

/// Point at `fraction` of the way from `from` to `to`, linear in the
/// degree plane.
pub fn interpolate(from: GeoPoint, to: GeoPoint, fraction: f64) -> GeoPoint {
    GeoPoint::new(
        from.latitude + (to.latitude - from.latitude) * fraction,
        from.longitude + (to.longitude - from.longitude) * fraction,
    )
}
