//! Structural summary of a polygon chain
//!
//! Built only from the counting operations, the way an output writer sizes
//! its buffers before walking the structure.

use crate::linked::LinkedPolygon;

/// Bytes per stored coordinate: two `f64`
const BYTES_PER_VERTEX: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub polygons: usize,
    pub loops: usize,
    pub vertices: usize,
    /// Loop count of each polygon, in chain order
    pub loops_per_polygon: Vec<usize>,
}

impl Summary {
    pub fn from_polygon(head: &LinkedPolygon) -> Self {
        let mut summary = Summary {
            polygons: head.count_polygons(),
            ..Default::default()
        };

        for polygon in head {
            let loops = polygon.count_loops();
            summary.loops += loops;
            summary.loops_per_polygon.push(loops);
            summary.vertices += polygon.loops().map(|l| l.count_vertices()).sum::<usize>();
        }

        summary
    }

    pub fn estimated_coordinate_bytes(&self) -> usize {
        self.vertices * BYTES_PER_VERTEX
    }
}
