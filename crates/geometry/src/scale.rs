use model::{shape::Shape, GeoPoint};

use crate::geo::path_length_km;

/// Perimeter of the shape in kilometers, including the closing edge.
pub fn shape_perimeter_km(shape: &Shape) -> f64 {
    if shape.points.len() < 2 {
        return 0.0;
    }
    let mut closed = shape.points.clone();
    closed.push(shape.points[0]);
    path_length_km(&closed)
}

/// Area centroid of the polygon ring, computed with the shoelace formula
/// on the degree plane. Zero-area rings fall back to the vertex mean.
fn area_centroid(points: &[GeoPoint]) -> GeoPoint {
    let mut area = 0.0;
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;

    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        let cross = a.longitude * b.latitude - b.longitude * a.latitude;
        area += cross;
        lat_sum += (a.latitude + b.latitude) * cross;
        lon_sum += (a.longitude + b.longitude) * cross;
    }
    area *= 0.5;

    if area.abs() < f64::EPSILON {
        let n = points.len() as f64;
        return GeoPoint::new(
            points.iter().map(|p| p.latitude).sum::<f64>() / n,
            points.iter().map(|p| p.longitude).sum::<f64>() / n,
        );
    }

    GeoPoint::new(lat_sum / (6.0 * area), lon_sum / (6.0 * area))
}

/// Scales `shape` uniformly about its area centroid so the perimeter of
/// the result is approximately `target_km`.
///
/// Scaling happens in the degree plane, an acceptable approximation to
/// spherical scaling at city and regional scale. Shapes with fewer than
/// three points or a zero perimeter come back unchanged.
pub fn scale_shape(shape: &Shape, target_km: f64) -> Shape {
    if shape.points.len() < 3 {
        return shape.clone();
    }

    let current_km = shape_perimeter_km(shape);
    if current_km == 0.0 {
        return shape.clone();
    }

    let factor = target_km / current_km;
    let center = area_centroid(&shape.points);

    let points = shape
        .points
        .iter()
        .map(|p| {
            GeoPoint::new(
                center.latitude + (p.latitude - center.latitude) * factor,
                center.longitude + (p.longitude - center.longitude) * factor,
            )
        })
        .collect();

    Shape::new(points)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn triangle() -> Shape {
        Shape::new(vec![
            GeoPoint::new(48.85, 2.35),
            GeoPoint::new(48.86, 2.36),
            GeoPoint::new(48.84, 2.37),
        ])
    }

    #[test]
    fn scales_triangle_to_target_perimeter() {
        let scaled = scale_shape(&triangle(), 5.0);
        assert_eq!(scaled.points.len(), 3);
        assert_relative_eq!(shape_perimeter_km(&scaled), 5.0, epsilon = 0.05);
    }

    #[test]
    fn perimeter_is_monotone_in_target() {
        for target in [0.5, 2.0, 5.0, 20.0, 100.0] {
            let scaled = scale_shape(&triangle(), target);
            assert_relative_eq!(
                shape_perimeter_km(&scaled),
                target,
                max_relative = 0.01
            );
        }
    }

    #[test]
    fn scaling_to_current_perimeter_keeps_vertices() {
        let shape = triangle();
        let current = shape_perimeter_km(&shape);
        let scaled = scale_shape(&shape, current);
        for (before, after) in shape.points.iter().zip(&scaled.points) {
            assert_relative_eq!(before.latitude, after.latitude, epsilon = 1e-6);
            assert_relative_eq!(before.longitude, after.longitude, epsilon = 1e-6);
        }
    }

    #[test]
    fn too_few_points_come_back_unchanged() {
        let shape = Shape::new(vec![
            GeoPoint::new(48.85, 2.35),
            GeoPoint::new(48.86, 2.36),
        ]);
        let scaled = scale_shape(&shape, 5.0);
        assert_eq!(scaled.points, shape.points);
    }

    #[test]
    fn zero_perimeter_comes_back_unchanged() {
        let p = GeoPoint::new(48.85, 2.35);
        let shape = Shape::new(vec![p, p, p]);
        let scaled = scale_shape(&shape, 5.0);
        assert_eq!(scaled.points, shape.points);
    }

    #[test]
    fn vertex_count_and_order_survive_scaling() {
        let shape = triangle();
        let scaled = scale_shape(&shape, 10.0);
        assert_eq!(scaled.points.len(), shape.points.len());
        // order: the northernmost input vertex stays the northernmost
        assert!(scaled.points[1].latitude > scaled.points[0].latitude);
        assert!(scaled.points[2].latitude < scaled.points[0].latitude);
    }
}
