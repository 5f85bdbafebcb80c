//! linkedgeo - Append-only linked multipolygon container
//!
//! A [`LinkedPolygon`] chain holds the polygons produced when tracing the
//! outline of a set of grid cells. Each polygon holds [`LinkedLoop`]s and
//! each loop holds [`LatLng`] vertices. The head polygon belongs to the
//! caller; everything appended after it belongs to the chain.

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod input;
pub mod linked;
pub mod report;

pub use domain::LatLng;
pub use error::LinkedGeoError;
pub use linked::{Chain, LinkedLoop, LinkedPolygon, NodeId};
