use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Points elsewhere in the crate are (lat, lon) pairs
impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for (f64, f64) {
    fn from(value: LatLng) -> Self {
        (value.lat, value.lng)
    }
}

/// geo uses x = longitude, y = latitude
impl From<LatLng> for geo::Coord<f64> {
    fn from(value: LatLng) -> Self {
        geo::coord! { x: value.lng, y: value.lat }
    }
}

impl From<geo::Coord<f64>> for LatLng {
    fn from(value: geo::Coord<f64>) -> Self {
        Self {
            lat: value.y,
            lng: value.x,
        }
    }
}
