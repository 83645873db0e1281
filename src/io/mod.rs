//! Reader and writer implementations for the supported interchange formats.

pub mod wkb;
pub mod wkt;
