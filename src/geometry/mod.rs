pub mod bounds;
pub mod convert;

pub use bounds::Bounds;
pub use convert::{from_multi_polygon, to_multi_polygon};
