use std::fs;
use std::io;
use std::path::Path;

use model::GeoPoint;

pub const DEFAULT_FILENAME: &str = "route.gpx";

const CREATOR: &str = "routesketch";

/// Serializes `points` into a GPX 1.1 document holding one track with one
/// track segment. Points are emitted in order, without elevation or time.
pub fn generate_gpx(points: &[GeoPoint], track_name: &str) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str(&format!(
        "<gpx version=\"1.1\" creator=\"{CREATOR}\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n"
    ));
    output.push_str("  <trk>\n");
    output.push_str(&format!("    <name>{}</name>\n", escape_xml(track_name)));
    output.push_str("    <trkseg>\n");

    // coordinates are plain decimal degrees, nothing to escape
    for point in points {
        output.push_str(&format!(
            "      <trkpt lat=\"{}\" lon=\"{}\"></trkpt>\n",
            point.latitude, point.longitude
        ));
    }

    output.push_str("    </trkseg>\n");
    output.push_str("  </trk>\n");
    output.push_str("</gpx>\n");
    output
}

/// Writes `points` as a GPX file at `path`. An empty path writes nothing.
pub fn save_gpx(points: &[GeoPoint], path: &Path, track_name: &str) -> io::Result<()> {
    if points.is_empty() {
        log::warn!("empty track, not writing {}", path.display());
        return Ok(());
    }
    fs::write(path, generate_gpx(points, track_name))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
