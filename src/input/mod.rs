pub mod parser;

pub use parser::{CoordinateOrder, parse_rings};
