//! Read from Well-Known Binary, including the PostGIS EWKB extension.

mod common;
mod reader;

pub use common::{hex_to_bytes, Endianness, WKBType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG};
pub use reader::{read, read_hex};
