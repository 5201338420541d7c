use serde::{Deserialize, Serialize};

use crate::GeoPoint;

/// A user-drawn closed polygon. The edge from the last point back to the
/// first is implicit; vertex order defines the traversal direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub points: Vec<GeoPoint>,
}

impl Shape {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }
}
