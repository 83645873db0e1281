//! Read from and write to Well-Known Text.

mod reader;
mod writer;

pub use reader::parse;
pub use writer::WktWriter;

use crate::geometry::Geometry;

/// Render canonical WKT with default options.
pub fn write(geometry: &Geometry) -> String {
    WktWriter::new().write(geometry)
}
