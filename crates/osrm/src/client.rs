use async_trait::async_trait;
use model::{profile::TravelProfile, GeoPoint};
use serde::Deserialize;

use crate::{ApiError, RouteService};

pub const OSRM_API_URL: &str = "https://router.project-osrm.org";

/// Client for the `route` endpoint of an OSRM deployment.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    base_url: String,
}

impl OsrmClient {
    pub fn new() -> Self {
        Self {
            base_url: OSRM_API_URL.to_owned(),
        }
    }

    /// Points the client at a different OSRM deployment.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for OsrmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    pub geometry: Geometry,
}

/// GeoJSON line geometry; coordinates are `[longitude, latitude]` pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub coordinates: Vec<[f64; 2]>,
}

/// First route of an "Ok" response, converted back to latitude/longitude
/// order. Any other response shape counts as an unroutable trace.
fn snapped_points(response: RouteResponse) -> Vec<GeoPoint> {
    if response.code != "Ok" {
        return Vec::new();
    }
    match response.routes.first() {
        Some(route) => route
            .geometry
            .coordinates
            .iter()
            .map(|c| GeoPoint::new(c[1], c[0]))
            .collect(),
        None => Vec::new(),
    }
}

#[async_trait]
impl RouteService for OsrmClient {
    async fn snap_route(
        &self,
        trace: &[GeoPoint],
        profile: TravelProfile,
    ) -> Result<Vec<GeoPoint>, ApiError> {
        /* the engine expects longitude,latitude pairs */
        let coordinates = trace
            .iter()
            .map(|p| format!("{},{}", p.longitude, p.latitude))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.base_url,
            profile.osrm_name(),
            coordinates
        );
        log::debug!("requesting {url}");

        let response = reqwest::get(&url).await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => {
                let body: RouteResponse = response.json().await?;
                Ok(snapped_points(body))
            }
            other => match response.text().await {
                Ok(val) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: Some(val),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url,
                    response: None,
                }),
            },
        }
    }
}
