//! Conversion between linked polygons and `geo` types
//!
//! Linked loops carry no ring role. Here the first loop of each polygon
//! becomes the exterior and the remaining loops become interiors, in order.
//! Loops are open (the first vertex is not repeated at the end), while `geo`
//! rings are closed: the closing coordinate is added on the way out and
//! stripped on the way in.
//!
//! A round trip reproduces non-empty open loops exactly. Two shapes collapse:
//! - a loop stored closed comes back without its repeated last vertex, since
//!   a closed `geo` ring does not say who closed it
//! - a polygon whose only loop is empty comes back with no loops, since both
//!   convert to a polygon with an empty exterior

use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::domain::LatLng;
use crate::linked::{LinkedLoop, LinkedPolygon};

/// Convert a polygon chain, head included, into a `geo::MultiPolygon`
pub fn to_multi_polygon(head: &LinkedPolygon) -> MultiPolygon<f64> {
    head.iter().map(to_polygon).collect()
}

fn to_polygon(polygon: &LinkedPolygon) -> Polygon<f64> {
    let mut rings = polygon.loops().map(to_line_string);
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, rings.collect())
}

fn to_line_string(ring: &LinkedLoop) -> LineString<f64> {
    ring.vertices().map(|&v| Coord::from(v)).collect()
}

/// Build a linked polygon chain from a `geo::MultiPolygon`
///
/// An empty multipolygon yields an empty head.
pub fn from_multi_polygon(multi: &MultiPolygon<f64>) -> LinkedPolygon {
    let mut head = LinkedPolygon::new();
    let mut tail = &mut head;

    for (i, polygon) in multi.0.iter().enumerate() {
        if i > 0 {
            tail = tail.append_polygon();
        }
        fill_polygon(tail, polygon);
    }

    head
}

// An empty exterior with no interiors reads back as a polygon without loops.
fn fill_polygon(target: &mut LinkedPolygon, polygon: &Polygon<f64>) {
    let exterior = polygon.exterior();
    if exterior.0.is_empty() && polygon.interiors().is_empty() {
        return;
    }

    target.append_existing_loop(to_loop(exterior));
    for interior in polygon.interiors() {
        target.append_existing_loop(to_loop(interior));
    }
}

fn to_loop(ring: &LineString<f64>) -> LinkedLoop {
    let coords = ring.0.as_slice();
    let open = match coords {
        [first, .., last] if first == last => &coords[..coords.len() - 1],
        _ => coords,
    };
    open.iter().map(|&c| LatLng::from(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn square_with_hole() -> LinkedPolygon {
        let mut head = LinkedPolygon::new();
        let outer = head.append_new_loop();
        for p in [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)] {
            outer.append_vertex(p.into());
        }
        let hole = head.append_new_loop();
        for p in [(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0)] {
            hole.append_vertex(p.into());
        }
        head
    }

    #[test]
    fn test_first_loop_is_exterior() {
        let multi = to_multi_polygon(&square_with_hole());
        assert_eq!(multi.0.len(), 1);

        let polygon = &multi.0[0];
        assert_eq!(polygon.interiors().len(), 1);
        // closed by geo: 4 vertices + repeated first
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.exterior().0[1], geo::coord! { x: 10.0, y: 0.0 });
    }

    #[test]
    fn test_empty_polygon_converts_to_empty_exterior() {
        let mut head = LinkedPolygon::new();
        head.append_polygon().append_new_loop();

        let multi = to_multi_polygon(&head);
        assert_eq!(multi.0.len(), 2);
        assert!(multi.0[0].exterior().0.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_loops() {
        let original = square_with_hole();
        let back = from_multi_polygon(&to_multi_polygon(&original));

        assert_eq!(back.count_polygons(), 1);
        assert_eq!(back.count_loops(), 2);
        for (a, b) in original.loops().zip(back.loops()) {
            let a: Vec<LatLng> = a.vertices().copied().collect();
            let b: Vec<LatLng> = b.vertices().copied().collect();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_from_multi_polygon_strips_closing_coordinate() {
        let triangle = polygon![(x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 3.0)];
        let other = polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)];
        let head = from_multi_polygon(&MultiPolygon::new(vec![triangle, other]));

        assert_eq!(head.count_polygons(), 2);
        let ring = head.loops().next().unwrap();
        assert_eq!(ring.count_vertices(), 3);
        assert_eq!(ring.vertices().next(), Some(&LatLng::new(0.0, 1.0)));
    }

    #[test]
    fn test_round_trip_lone_empty_loop_reads_back_as_no_loops() {
        let mut head = LinkedPolygon::new();
        head.append_new_loop();
        let second = head.append_polygon();
        second.append_new_loop();
        second.append_new_loop().append_vertex(LatLng::new(1.0, 1.0));

        let back = from_multi_polygon(&to_multi_polygon(&head));
        assert_eq!(back.count_polygons(), 2);
        assert_eq!(back.count_loops(), 0);
        // an empty exterior followed by interiors keeps its slot
        let counts: Vec<usize> = back
            .next()
            .unwrap()
            .loops()
            .map(|l| l.count_vertices())
            .collect();
        assert_eq!(counts, vec![0, 1]);
    }

    #[test]
    fn test_round_trip_closed_loop_loses_repeated_vertex() {
        let mut head = LinkedPolygon::new();
        let ring = head.append_new_loop();
        for p in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)] {
            ring.append_vertex(p.into());
        }
        assert_eq!(ring.count_vertices(), 4);

        let multi = to_multi_polygon(&head);
        // already closed, geo adds nothing
        assert_eq!(multi.0[0].exterior().0.len(), 4);

        let back = from_multi_polygon(&multi);
        let points: Vec<LatLng> = back.loops().next().unwrap().vertices().copied().collect();
        assert_eq!(
            points,
            vec![
                LatLng::new(0.0, 0.0),
                LatLng::new(1.0, 0.0),
                LatLng::new(1.0, 1.0)
            ]
        );
    }

    #[test]
    fn test_from_empty_multi_polygon() {
        let head = from_multi_polygon(&MultiPolygon::new(Vec::new()));
        assert!(head.is_empty());
        assert_eq!(head.count_polygons(), 1);
    }
}
