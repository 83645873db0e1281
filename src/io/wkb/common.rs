use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{GeoWktError, GeoWktResult};

/// Z flag on an EWKB geometry type word.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// M flag on an EWKB geometry type word.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;
/// SRID flag on an EWKB geometry type word.
pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// The byte order marker leading every WKB record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// Most significant byte first
    BigEndian = 0,
    /// Least significant byte first
    LittleEndian = 1,
}

/// The base WKB geometry type codes, after EWKB flags are masked off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
    /// A WKB CircularString
    CircularString = 8,
    /// A WKB CompoundCurve
    CompoundCurve = 9,
    /// A WKB CurvePolygon
    CurvePolygon = 10,
    /// A WKB MultiCurve
    MultiCurve = 11,
    /// A WKB MultiSurface
    MultiSurface = 12,
    /// The abstract Curve type, never a concrete geometry
    Curve = 13,
    /// The abstract Surface type, never a concrete geometry
    Surface = 14,
    /// A WKB PolyhedralSurface
    PolyhedralSurface = 15,
    /// A WKB TIN
    Tin = 16,
    /// A WKB Triangle
    Triangle = 17,
}

/// Decode a hex string into bytes.
///
/// Both nibble cases are accepted. The input must contain only hex digits
/// and have even length.
pub fn hex_to_bytes(hex: &str) -> GeoWktResult<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return Err(GeoWktError::Hex(format!(
            "odd number of hex digits: {}",
            hex.len()
        )));
    }
    let digit = |byte: u8| -> GeoWktResult<u8> {
        (byte as char)
            .to_digit(16)
            .map(|value| value as u8)
            .ok_or_else(|| GeoWktError::Hex(format!("invalid hex digit `{}`", byte as char)))
    };
    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok((digit(pair[0])? << 4) | digit(pair[1])?))
        .collect()
}
