//! Linked multipolygon: polygons, each holding loops, each holding vertices

pub mod chain;
pub mod polygon;
pub mod ring;

pub use chain::{Chain, NodeId};
pub use polygon::{LinkedPolygon, Polygons};
pub use ring::LinkedLoop;
