use std::fs;
use std::path::PathBuf;

use clap::Parser;
use cli::{default_output_name, generate_route};
use model::{profile::TravelProfile, shape::Shape};
use osrm::client::OsrmClient;

/// Turns a drawn shape into a road-following route of a target length and
/// saves it as a GPX track.
#[derive(Debug, Parser)]
#[command(name = "routesketch")]
struct Args {
    /// JSON file holding the drawn shape as latitude/longitude vertices.
    shape_file: PathBuf,

    /// Target route length in kilometers.
    #[arg(long)]
    distance_km: f64,

    /// Travel profile for the routing engine.
    #[arg(long, default_value = "foot")]
    profile: TravelProfile,

    /// Routing engine to query.
    #[arg(long, default_value = osrm::client::OSRM_API_URL)]
    osrm_url: String,

    /// Output GPX file. Defaults to a name stamped with the distance.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    if args.distance_km <= 0.0 {
        log::error!("target distance must be positive.");
        return;
    }

    let raw = fs::read_to_string(&args.shape_file).expect("could not read shape file.");
    let shape: Shape =
        serde_json::from_str(&raw).expect("could not parse shape file.");

    let client = OsrmClient::with_base_url(args.osrm_url);
    let route =
        generate_route(&client, &shape, args.distance_km, args.profile).await;

    if route.is_empty() {
        log::error!("no route generated.");
        return;
    }
    log::info!(
        "route length: {:.2} km over {} points",
        geometry::geo::path_length_km(&route),
        route.len()
    );

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(args.distance_km)));
    let track_name = format!("{} km loop", args.distance_km);
    gpx::save_gpx(&route, &output, &track_name).expect("could not write gpx file.");
    log::info!("saved {}", output.display());
}
