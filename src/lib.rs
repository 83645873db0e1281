//! Parse and write [Well-Known
//! Text](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry)
//! geometries, and decode WKB and PostGIS EWKB binary.
//!
//! The in-memory model is the [Geometry](geometry::Geometry) enum: plain
//! owned structs with public fields, one per concrete geometry kind,
//! covering the full simple-features set plus the curved and surface types.
//! Every geometry carries a coordinate [Dimension](datatypes::Dimension)
//! fixed at construction and an optional SRID kept as an opaque string.
//!
//! Parsing accepts the lax grammar common in the wild: optional commas
//! between coordinates, optional whitespace around punctuation, `Z`/`M`/`ZM`
//! qualifiers, and dimensions inferred from bare coordinate arity. Writing
//! always produces one canonical form.
//!
//! ```
//! use geowkt::geometry::Geometry;
//!
//! let geom: Geometry = "SRID=4326;LINESTRING (1 2, 3 4)".parse().unwrap();
//! assert_eq!(geom.srid(), Some("4326"));
//! assert_eq!(geom.to_string(), "SRID=4326;LINESTRING (1.0 2.0, 3.0 4.0)");
//! ```
//!
//! ```
//! let geom = geowkt::io::wkb::read_hex(
//!     "0101000000000000000000F03F0000000000000040",
//! ).unwrap();
//! assert_eq!(geom.to_string(), "POINT (1.0 2.0)");
//! ```

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;

pub use error::{GeoWktError, GeoWktResult};
