//! Decode WKB and EWKB bytes into a [Geometry] tree.
//!
//! Every record, nested ones included, starts with its own byte order marker
//! and type word, so mixed-endian payloads decode fine. EWKB is recognized
//! per record from the Z, M, and SRID bits of the type word.

use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};

use crate::datatypes::Dimension;
use crate::error::{GeoWktError, GeoWktResult};
use crate::geometry::{
    CircularString, CompoundCurve, Coord, Curve, CurvePolygon, Geometry, GeometryCollection,
    LineString, LinearRing, MultiCurve, MultiLineString, MultiPoint, MultiPolygon, MultiSurface,
    Point, Polygon, PolyhedralSurface, Surface, Tin, Triangle,
};
use crate::io::wkb::common::{
    hex_to_bytes, Endianness, WKBType, EWKB_M_FLAG, EWKB_SRID_FLAG, EWKB_Z_FLAG,
};

/// Containers nest records; decoding recurses along with them, so the depth
/// is bounded to keep crafted input from exhausting the stack.
const MAX_NESTING_DEPTH: usize = 128;

/// Decode one geometry from WKB or EWKB bytes.
///
/// Truncated input surfaces as [GeoWktError::IOError]; an unknown or
/// abstract type code as [GeoWktError::UnknownType].
pub fn read(bytes: &[u8]) -> GeoWktResult<Geometry> {
    read_geometry(&mut Cursor::new(bytes), 0)
}

/// Decode one geometry from hex-encoded WKB or EWKB.
pub fn read_hex(hex: &str) -> GeoWktResult<Geometry> {
    read(&hex_to_bytes(hex)?)
}

fn read_geometry(cursor: &mut Cursor<&[u8]>, depth: usize) -> GeoWktResult<Geometry> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(GeoWktError::UnknownType(
            "nesting depth limit exceeded".to_string(),
        ));
    }
    let marker = cursor.read_u8()?;
    match Endianness::try_from(marker) {
        Ok(Endianness::BigEndian) => read_record::<BigEndian>(cursor, depth),
        Ok(Endianness::LittleEndian) => read_record::<LittleEndian>(cursor, depth),
        Err(_) => Err(GeoWktError::UnknownType(format!(
            "unknown byte order marker {marker:#04x}"
        ))),
    }
}

fn read_record<B: ByteOrder>(cursor: &mut Cursor<&[u8]>, depth: usize) -> GeoWktResult<Geometry> {
    let type_word = cursor.read_u32::<B>()?;
    let dimension = Dimension::from_axes(
        type_word & EWKB_Z_FLAG != 0,
        type_word & EWKB_M_FLAG != 0,
    );
    let base = type_word & !(EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG);
    let wkb_type = WKBType::try_from(base).map_err(|_| {
        GeoWktError::UnknownType(format!("unknown geometry type code {base}"))
    })?;
    let srid = if type_word & EWKB_SRID_FLAG != 0 {
        Some(cursor.read_u32::<B>()?.to_string())
    } else {
        None
    };

    match wkb_type {
        WKBType::Point => {
            let coord = read_coord::<B>(cursor, dimension)?;
            Ok(Point::new(coord, dimension, srid).into())
        }
        WKBType::LineString => {
            let coords = read_coords::<B>(cursor, dimension)?;
            Ok(LineString::new(coords, dimension, srid).into())
        }
        WKBType::CircularString => {
            let coords = read_coords::<B>(cursor, dimension)?;
            Ok(CircularString::new(coords, dimension, srid).into())
        }
        WKBType::Polygon => {
            let (exterior, interiors) = read_rings::<B>(cursor, dimension, &srid)?;
            Ok(Polygon::new(exterior, interiors, dimension, srid).into())
        }
        WKBType::Triangle => {
            let (exterior, interiors) = read_rings::<B>(cursor, dimension, &srid)?;
            Ok(Triangle::new(exterior, interiors, dimension, srid).into())
        }
        WKBType::MultiPoint => {
            let points = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::Point(point) => Some(point),
                _ => None,
            })?;
            Ok(MultiPoint::new(points, dimension, srid).into())
        }
        WKBType::MultiLineString => {
            let lines = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::LineString(line) => Some(line),
                _ => None,
            })?;
            Ok(MultiLineString::new(lines, dimension, srid).into())
        }
        WKBType::MultiPolygon => {
            let polygons = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::Polygon(polygon) => Some(polygon),
                _ => None,
            })?;
            Ok(MultiPolygon::new(polygons, dimension, srid).into())
        }
        WKBType::PolyhedralSurface => {
            let polygons = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::Polygon(polygon) => Some(polygon),
                _ => None,
            })?;
            Ok(PolyhedralSurface::new(polygons, dimension, srid).into())
        }
        WKBType::Tin => {
            let triangles = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::Triangle(triangle) => Some(triangle),
                _ => None,
            })?;
            Ok(Tin::new(triangles, dimension, srid).into())
        }
        WKBType::CompoundCurve => {
            let curves = read_children::<B, _>(cursor, depth, as_curve)?;
            Ok(CompoundCurve::new(curves, dimension, srid).into())
        }
        WKBType::MultiCurve => {
            let curves = read_children::<B, _>(cursor, depth, as_curve)?;
            Ok(MultiCurve::new(curves, dimension, srid).into())
        }
        WKBType::CurvePolygon => {
            let mut curves = read_children::<B, _>(cursor, depth, as_curve)?.into_iter();
            let exterior = curves
                .next()
                .unwrap_or_else(|| Curve::LineString(LineString::empty(srid.clone())));
            Ok(CurvePolygon::new(exterior, curves.collect(), dimension, srid).into())
        }
        WKBType::MultiSurface => {
            let surfaces = read_children::<B, _>(cursor, depth, |geometry| match geometry {
                Geometry::Polygon(polygon) => Some(Surface::Polygon(polygon)),
                Geometry::CurvePolygon(cp) => Some(Surface::CurvePolygon(cp)),
                _ => None,
            })?;
            Ok(MultiSurface::new(surfaces, dimension, srid).into())
        }
        WKBType::GeometryCollection => {
            let geometries = read_children::<B, _>(cursor, depth, Some)?;
            Ok(GeometryCollection::new(geometries, dimension, srid).into())
        }
        WKBType::Curve | WKBType::Surface => Err(GeoWktError::UnknownType(format!(
            "abstract geometry type code {base} cannot be instantiated"
        ))),
    }
}

/// Read a count-prefixed run of nested records, narrowing each to the kind
/// the container admits.
///
/// The count uses the enclosing record's byte order; the nested records
/// carry their own markers.
fn read_children<B: ByteOrder, T>(
    cursor: &mut Cursor<&[u8]>,
    depth: usize,
    narrow: impl Fn(Geometry) -> Option<T>,
) -> GeoWktResult<Vec<T>> {
    let count = read_count_as::<B>(cursor)?;
    // Marker plus type word is the least a nested record can occupy.
    let mut children = Vec::with_capacity(capped_capacity(cursor, count, 5));
    for _ in 0..count {
        let geometry = read_geometry(cursor, depth + 1)?;
        let child = narrow(geometry).ok_or_else(|| {
            GeoWktError::UnknownType("nested geometry kind not allowed here".to_string())
        })?;
        children.push(child);
    }
    Ok(children)
}

/// Cap a count-derived preallocation by what the buffer could still hold,
/// so a forged count fails on the truncated payload instead of aborting in
/// the allocator.
fn capped_capacity(cursor: &Cursor<&[u8]>, count: usize, element_size: usize) -> usize {
    let remaining = cursor
        .get_ref()
        .len()
        .saturating_sub(cursor.position() as usize);
    count.min(remaining / element_size)
}

fn as_curve(geometry: Geometry) -> Option<Curve> {
    match geometry {
        Geometry::LineString(line) => Some(Curve::LineString(line)),
        Geometry::CircularString(arc) => Some(Curve::CircularString(arc)),
        Geometry::CompoundCurve(compound) => Some(Curve::CompoundCurve(compound)),
        _ => None,
    }
}

fn read_coord<B: ByteOrder>(
    cursor: &mut Cursor<&[u8]>,
    dimension: Dimension,
) -> GeoWktResult<Coord> {
    let x = cursor.read_f64::<B>()?;
    let y = cursor.read_f64::<B>()?;
    let z = if dimension.has_z() {
        Some(cursor.read_f64::<B>()?)
    } else {
        None
    };
    let m = if dimension.has_m() {
        Some(cursor.read_f64::<B>()?)
    } else {
        None
    };
    Ok(Coord { x, y, z, m })
}

fn read_coords<B: ByteOrder>(
    cursor: &mut Cursor<&[u8]>,
    dimension: Dimension,
) -> GeoWktResult<Vec<Coord>> {
    let count = read_count_as::<B>(cursor)?;
    let mut coords = Vec::with_capacity(capped_capacity(cursor, count, dimension.size() * 8));
    for _ in 0..count {
        coords.push(read_coord::<B>(cursor, dimension)?);
    }
    Ok(coords)
}

/// Count-prefixed rings; the first is the exterior, the rest interiors. A
/// zero count yields an empty exterior ring.
fn read_rings<B: ByteOrder>(
    cursor: &mut Cursor<&[u8]>,
    dimension: Dimension,
    srid: &Option<String>,
) -> GeoWktResult<(LinearRing, Vec<LinearRing>)> {
    let count = read_count_as::<B>(cursor)?;
    // Each ring occupies at least its own count field.
    let mut rings = Vec::with_capacity(capped_capacity(cursor, count, 4));
    for _ in 0..count {
        let coords = read_coords::<B>(cursor, dimension)?;
        rings.push(LinearRing::new(coords, dimension, srid.clone()));
    }
    let mut rings = rings.into_iter();
    let exterior = rings
        .next()
        .unwrap_or_else(|| LinearRing::empty(srid.clone()));
    Ok((exterior, rings.collect()))
}

fn read_count_as<B: ByteOrder>(cursor: &mut Cursor<&[u8]>) -> GeoWktResult<usize> {
    Ok(cursor.read_u32::<B>()? as usize)
}

#[cfg(test)]
mod test {
    use super::*;

    fn u32_le(buf: &mut Vec<u8>, value: u32) {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    fn f64_le(buf: &mut Vec<u8>, value: f64) {
        buf.extend_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn little_endian_point() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 1);
        f64_le(&mut buf, 1.0);
        f64_le(&mut buf, 2.0);
        let geom = read(&buf).unwrap();
        assert_eq!(
            geom,
            Point::new(Coord::xy(1.0, 2.0), Dimension::XY, None).into()
        );
    }

    #[test]
    fn big_endian_point() {
        let mut buf = vec![0u8];
        buf.extend_from_slice(&1u32.to_be_bytes());
        buf.extend_from_slice(&1.0f64.to_be_bytes());
        buf.extend_from_slice(&2.0f64.to_be_bytes());
        let geom = read(&buf).unwrap();
        assert_eq!(
            geom,
            Point::new(Coord::xy(1.0, 2.0), Dimension::XY, None).into()
        );
    }

    #[test]
    fn ewkb_point_with_z_and_srid() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 1 | EWKB_Z_FLAG | EWKB_SRID_FLAG);
        u32_le(&mut buf, 4326);
        f64_le(&mut buf, 1.0);
        f64_le(&mut buf, 2.0);
        f64_le(&mut buf, 3.0);
        let geom = read(&buf).unwrap();
        assert_eq!(geom.dimension(), Dimension::XYZ);
        assert_eq!(geom.srid(), Some("4326"));
        let coord = geom.into_point().unwrap().coord.unwrap();
        assert_eq!(coord, Coord::xyz(1.0, 2.0, 3.0));
    }

    #[test]
    fn ewkb_m_flag() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 1 | EWKB_M_FLAG);
        f64_le(&mut buf, 1.0);
        f64_le(&mut buf, 2.0);
        f64_le(&mut buf, 3.0);
        let geom = read(&buf).unwrap();
        assert_eq!(geom.dimension(), Dimension::XYM);
        let coord = geom.into_point().unwrap().coord.unwrap();
        assert_eq!(coord.m, Some(3.0));
        assert_eq!(coord.z, None);
    }

    #[test]
    fn line_string() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 2);
        u32_le(&mut buf, 2);
        for value in [0.0, 0.0, 5.0, 5.0] {
            f64_le(&mut buf, value);
        }
        let geom = read(&buf).unwrap();
        let line = geom.into_line_string().unwrap();
        assert_eq!(
            line.coords,
            vec![Coord::xy(0.0, 0.0), Coord::xy(5.0, 5.0)]
        );
    }

    #[test]
    fn polygon_rings() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 3);
        u32_le(&mut buf, 2);
        u32_le(&mut buf, 4);
        for value in [0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 0.0] {
            f64_le(&mut buf, value);
        }
        u32_le(&mut buf, 4);
        for value in [2.0, 2.0, 4.0, 2.0, 3.0, 4.0, 2.0, 2.0] {
            f64_le(&mut buf, value);
        }
        let geom = read(&buf).unwrap();
        let polygon = geom.into_polygon().unwrap();
        assert_eq!(polygon.exterior.coords.len(), 4);
        assert_eq!(polygon.interiors.len(), 1);
        assert_eq!(polygon.coordinate_count(), 8);
    }

    #[test]
    fn multi_point_of_nested_records() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 4);
        u32_le(&mut buf, 2);
        for (x, y) in [(1.0, 2.0), (3.0, 4.0)] {
            buf.push(1);
            u32_le(&mut buf, 1);
            f64_le(&mut buf, x);
            f64_le(&mut buf, y);
        }
        let geom = read(&buf).unwrap();
        let mp = geom.into_multi_point().unwrap();
        assert_eq!(mp.points.len(), 2);
        assert_eq!(mp.points[1].coord.unwrap(), Coord::xy(3.0, 4.0));
    }

    #[test]
    fn geometry_collection() {
        let mut buf = vec![1u8];
        u32_le(&mut buf, 7);
        u32_le(&mut buf, 2);
        buf.push(1);
        u32_le(&mut buf, 1);
        f64_le(&mut buf, 4.0);
        f64_le(&mut buf, 6.0);
        buf.push(1);
        u32_le(&mut buf, 2);
        u32_le(&mut buf, 2);
        for value in [4.0, 6.0, 7.0, 10.0] {
            f64_le(&mut buf, value);
        }
        let geom = read(&buf).unwrap();
        assert_eq!(geom.coordinate_count(), 3);
        let collection = geom.into_geometry_collection().unwrap();
        assert!(collection.geometries[1].as_line_string().is_some());
    }

    #[test]
    fn wrong_nested_kind_is_rejected() {
        // A line string record inside a MULTIPOINT container.
        let mut buf = vec![1u8];
        u32_le(&mut buf, 4);
        u32_le(&mut buf, 1);
        buf.push(1);
        u32_le(&mut buf, 2);
        u32_le(&mut buf, 0);
        assert!(matches!(read(&buf), Err(GeoWktError::UnknownType(_))));
    }

    #[test]
    fn abstract_type_codes_are_rejected() {
        for code in [13u32, 14] {
            let mut buf = vec![1u8];
            u32_le(&mut buf, code);
            assert!(matches!(read(&buf), Err(GeoWktError::UnknownType(_))));
        }
    }

    #[test]
    fn bad_marker_and_truncation() {
        assert!(matches!(
            read(&[2u8, 1, 0, 0, 0]),
            Err(GeoWktError::UnknownType(_))
        ));
        let mut buf = vec![1u8];
        u32_le(&mut buf, 1);
        f64_le(&mut buf, 1.0);
        assert!(matches!(read(&buf), Err(GeoWktError::IOError(_))));
        assert!(read(&[]).is_err());
    }

    #[test]
    fn forged_counts_fail_on_truncation() {
        // A line string record claiming u32::MAX coordinates with no
        // payload must surface the truncation, not reserve for the count.
        let mut buf = vec![1u8];
        u32_le(&mut buf, 2);
        u32_le(&mut buf, u32::MAX);
        assert!(matches!(read(&buf), Err(GeoWktError::IOError(_))));

        // Same for a polygon ring count and a container child count.
        let mut buf = vec![1u8];
        u32_le(&mut buf, 3);
        u32_le(&mut buf, u32::MAX);
        assert!(matches!(read(&buf), Err(GeoWktError::IOError(_))));

        let mut buf = vec![1u8];
        u32_le(&mut buf, 7);
        u32_le(&mut buf, u32::MAX);
        assert!(matches!(read(&buf), Err(GeoWktError::IOError(_))));
    }

    #[test]
    fn nesting_depth_is_bounded() {
        // Thousands of collection headers wrapping a single point.
        let mut buf = Vec::new();
        for _ in 0..10_000 {
            buf.push(1);
            u32_le(&mut buf, 7);
            u32_le(&mut buf, 1);
        }
        buf.push(1);
        u32_le(&mut buf, 1);
        f64_le(&mut buf, 0.0);
        f64_le(&mut buf, 0.0);
        assert!(matches!(read(&buf), Err(GeoWktError::UnknownType(_))));
    }

    #[test]
    fn hex_round_trip() {
        let geom =
            read_hex("0101000000000000000000F03F0000000000000040").unwrap();
        assert_eq!(
            geom,
            Point::new(Coord::xy(1.0, 2.0), Dimension::XY, None).into()
        );
        assert!(read_hex("01010000").is_err());
    }
}
