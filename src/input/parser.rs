use serde::Deserialize;

use crate::domain::LatLng;
use crate::error::LinkedGeoError;
use crate::linked::LinkedPolygon;

/// Axis order of coordinate pairs in ring input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateOrder {
    /// `[lat, lng]`
    #[default]
    LatLng,
    /// `[lng, lat]`, as in GeoJSON
    LngLat,
}

impl CoordinateOrder {
    pub fn to_lat_lng(self, [a, b]: [f64; 2]) -> LatLng {
        match self {
            CoordinateOrder::LatLng => LatLng::new(a, b),
            CoordinateOrder::LngLat => LatLng::new(b, a),
        }
    }
}

/// polygons -> loops -> coordinate pairs
type RingInput = Vec<Vec<Vec<[f64; 2]>>>;

/// Build a polygon chain from nested JSON arrays
///
/// # Algorithm
/// 1. Deserialize `[[[[a, b], ...], ...], ...]`
/// 2. The first polygon fills the head; each later one is linked with
///    `append_polygon` on the running tail
/// 3. Loops and vertices are appended in input order, coordinates verbatim
///
/// An empty top-level array yields an empty head.
pub fn parse_rings(json: &str, order: CoordinateOrder) -> Result<LinkedPolygon, LinkedGeoError> {
    let polygons: RingInput = serde_json::from_str(json)?;

    let mut head = LinkedPolygon::new();
    let mut tail = &mut head;

    for (i, loops) in polygons.iter().enumerate() {
        if i > 0 {
            tail = tail.append_polygon();
        }

        for ring in loops {
            let target = tail.append_new_loop();
            for &pair in ring {
                target.append_vertex(order.to_lat_lng(pair));
            }
        }
    }

    Ok(head)
}
