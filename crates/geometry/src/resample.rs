use itertools::Itertools;
use model::GeoPoint;

use crate::geo::{haversine_distance, interpolate, path_length_km};

/// Resamples the closed boundary of `points` into `target_count + 1`
/// points evenly spaced by arc length, independent of the original vertex
/// spacing. The loop is closed first if the input does not end on its
/// start point. Inputs with fewer than two points come back unchanged.
///
/// `target_count` must be at least 1.
pub fn resample_shape(points: &[GeoPoint], target_count: usize) -> Vec<GeoPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut closed = points.to_vec();
    if closed.first() != closed.last() {
        closed.push(closed[0]);
    }

    let total_km = path_length_km(&closed);
    let step = total_km / target_count as f64;

    let mut resampled = Vec::with_capacity(target_count + 1);
    for i in 0..=target_count {
        resampled.push(point_along(&closed, step * i as f64));
    }
    resampled
}

/// Point at arc-length `distance_km` from the start of the polyline.
/// Offsets beyond the end clamp to the final point.
fn point_along(points: &[GeoPoint], distance_km: f64) -> GeoPoint {
    let mut travelled = 0.0;

    for (a, b) in points.iter().tuple_windows() {
        let segment = haversine_distance(*a, *b);
        if travelled + segment >= distance_km {
            if segment == 0.0 {
                return *a;
            }
            let fraction = (distance_km - travelled) / segment;
            return interpolate(*a, *b, fraction);
        }
        travelled += segment;
    }

    points[points.len() - 1]
}
