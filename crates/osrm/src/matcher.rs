use model::{profile::TravelProfile, GeoPoint};

use crate::RouteService;

/// The public OSRM instance rejects requests with too many coordinates;
/// 20 stays safely under its limit.
pub const CHUNK_SIZE: usize = 20;

/// Splits `trace` into windows of at most `CHUNK_SIZE` points. Each
/// window starts on the last point of the previous one, so continuity can
/// be reconstructed after every window was matched on its own. Windows
/// with fewer than two points are never produced.
fn chunk_trace(trace: &[GeoPoint]) -> Vec<&[GeoPoint]> {
    let mut windows = Vec::new();
    let mut start = 0;
    while start + 1 < trace.len() {
        let end = usize::min(start + CHUNK_SIZE, trace.len());
        windows.push(&trace[start..end]);
        start += CHUNK_SIZE - 1;
    }
    windows
}

/// Matches `trace` onto the road network window by window and stitches
/// the per-window results into one continuous path in input order.
///
/// Windows are dispatched strictly one after another; the public engine
/// rate-limits concurrent requests, and sequential dispatch keeps result
/// order trivial. A window the engine cannot match is bridged with its
/// raw input points, so partial failure degrades the route to straight
/// segments instead of losing it. Traces with fewer than two points
/// yield an empty path without touching the engine.
pub async fn match_route<S>(
    service: &S,
    trace: &[GeoPoint],
    profile: TravelProfile,
) -> Vec<GeoPoint>
where
    S: RouteService,
{
    if trace.len() < 2 {
        return Vec::new();
    }

    let mut full_route: Vec<GeoPoint> = Vec::new();

    for window in chunk_trace(trace) {
        let snapped = match service.snap_route(window, profile).await {
            Ok(points) => points,
            Err(why) => {
                log::warn!("window request failed: {why}");
                Vec::new()
            }
        };

        if snapped.is_empty() {
            log::warn!("window could not be matched, keeping its raw points");
            full_route.extend_from_slice(window);
            continue;
        }

        if full_route.is_empty() {
            full_route.extend(snapped);
        } else {
            // the window's first point repeats the previous window's last
            full_route.extend(snapped.into_iter().skip(1));
        }
    }

    full_route
}
