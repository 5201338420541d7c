use std::error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use model::{profile::TravelProfile, GeoPoint};

pub mod client;
pub mod matcher;

#[derive(Debug, Clone)]
pub enum ApiError {
    RequestError(Arc<reqwest::Error>),
    InvalidResponse {
        status_code: reqwest::StatusCode,
        url: String,
        response: Option<String>,
    },
    Other(String),
}

impl error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::RequestError(e) => write!(f, "HTTP request error: {}", e),
            ApiError::InvalidResponse {
                status_code,
                url,
                response,
            } => match response {
                Some(text) => {
                    write!(f, "Invalid Response ({}) {}: {}", status_code, text, url)
                }
                None => write!(f, "Invalid Response ({}) {}", status_code, url),
            },
            ApiError::Other(e) => write!(f, "{e}"),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::RequestError(Arc::new(e))
    }
}

/// A routing engine that can snap an ordered point trace onto its travel
/// network. Abstracted as a trait so the matcher can run against a stub
/// engine in tests or against a different provider.
#[async_trait]
pub trait RouteService {
    /// Requests a road-snapped path travelling through `trace` in order.
    ///
    /// A trace the engine cannot route yields an empty vec rather than an
    /// error; errors are reserved for transport and protocol failures.
    async fn snap_route(
        &self,
        trace: &[GeoPoint],
        profile: TravelProfile,
    ) -> Result<Vec<GeoPoint>, ApiError>;
}
