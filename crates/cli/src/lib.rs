use model::{profile::TravelProfile, shape::Shape, GeoPoint};
use osrm::{matcher, RouteService};

/// Kilometers of target distance per trace point. Denser traces constrain
/// the road snapping better but grow the number of request windows.
const TRACE_DENSITY_KM: f64 = 2.0;

/// Lower bound keeping small loops recognizable after matching.
const MIN_TRACE_POINTS: usize = 12;

/// Number of trace points to resample a route of `target_km` into.
///
/// This policy belongs to the caller, not the resampler; substitute your
/// own when a different fidelity/request-count tradeoff is needed.
pub fn trace_point_count(target_km: f64) -> usize {
    let by_density = (target_km / TRACE_DENSITY_KM).round() as usize;
    usize::max(MIN_TRACE_POINTS, by_density)
}

/// Runs the full pipeline: scale the drawn shape to `target_km`, resample
/// its boundary into an evenly spaced trace, and match the trace onto the
/// road network.
///
/// An empty result means no route could be generated; a partially
/// straight-line result means some windows fell back to their raw trace.
pub async fn generate_route<S>(
    service: &S,
    shape: &Shape,
    target_km: f64,
    profile: TravelProfile,
) -> Vec<GeoPoint>
where
    S: RouteService,
{
    let scaled = geometry::scale::scale_shape(shape, target_km);
    let trace =
        geometry::resample::resample_shape(&scaled.points, trace_point_count(target_km));
    matcher::match_route(service, &trace, profile).await
}

/// Output filename stamped with the target distance, falling back to the
/// plain default when there is no distance to stamp.
pub fn default_output_name(target_km: f64) -> String {
    if target_km > 0.0 {
        format!("route - {target_km} km.gpx")
    } else {
        gpx::DEFAULT_FILENAME.to_owned()
    }
}
