use geo::BoundingRect;

use super::convert::to_multi_polygon;
use crate::linked::LinkedPolygon;

/// Bounding box in degrees
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// Bounds of every vertex in the chain, `None` when there are no vertices
    pub fn from_polygon(head: &LinkedPolygon) -> Option<Self> {
        let rect = to_multi_polygon(head).bounding_rect()?;
        Some(Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lng: rect.min().x,
            max_lng: rect.max().x,
        })
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
