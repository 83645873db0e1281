//! The in-memory geometry model: [Coord], one struct per concrete geometry
//! kind, and the [Geometry] tagged union over them.
//!
//! Trees are immutable once built and exclusively owned by their parent.

mod coord;
mod curve;
mod linestring;
mod multi;
mod point;
mod polygon;
mod surface;

use std::fmt;
use std::str::FromStr;

use enum_as_inner::EnumAsInner;

pub use coord::Coord;
pub use curve::{CircularString, CompoundCurve, Curve};
pub use linestring::{LineString, LinearRing};
pub use multi::{
    GeometryCollection, MultiCurve, MultiLineString, MultiPoint, MultiPolygon, MultiSurface,
};
pub use point::Point;
pub use polygon::{Polygon, Triangle};
pub use surface::{CurvePolygon, PolyhedralSurface, Surface, Tin};

use crate::datatypes::Dimension;
use crate::error::GeoWktError;
use crate::io::wkt;

/// A closed union over the concrete geometry kinds.
///
/// Every variant carries a [Dimension] fixed at construction and an optional
/// SRID (an opaque, unvalidated string). [Display](fmt::Display) renders
/// canonical WKT and [FromStr] parses it:
///
/// ```
/// use geowkt::geometry::Geometry;
///
/// let geom: Geometry = "POINT (1 2)".parse().unwrap();
/// assert_eq!(geom.to_string(), "POINT (1.0 2.0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, EnumAsInner)]
pub enum Geometry {
    /// A single position
    Point(Point),
    /// A straight-segment line
    LineString(LineString),
    /// A closed line used as a polygon boundary
    LinearRing(LinearRing),
    /// A circular-arc line
    CircularString(CircularString),
    /// A sequence of joined curves
    CompoundCurve(CompoundCurve),
    /// An area bounded by linear rings
    Polygon(Polygon),
    /// An area bounded by curves
    CurvePolygon(CurvePolygon),
    /// A three-coordinate polygon
    Triangle(Triangle),
    /// A surface of polygon patches
    PolyhedralSurface(PolyhedralSurface),
    /// A surface of triangle patches
    Tin(Tin),
    /// A collection of points
    MultiPoint(MultiPoint),
    /// A collection of line strings
    MultiLineString(MultiLineString),
    /// A collection of polygons
    MultiPolygon(MultiPolygon),
    /// A collection of curves
    MultiCurve(MultiCurve),
    /// A collection of surfaces
    MultiSurface(MultiSurface),
    /// A heterogeneous collection
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The dimension, fixed at construction.
    pub fn dimension(&self) -> Dimension {
        match self {
            Geometry::Point(g) => g.dimension,
            Geometry::LineString(g) => g.dimension,
            Geometry::LinearRing(g) => g.dimension,
            Geometry::CircularString(g) => g.dimension,
            Geometry::CompoundCurve(g) => g.dimension,
            Geometry::Polygon(g) => g.dimension,
            Geometry::CurvePolygon(g) => g.dimension,
            Geometry::Triangle(g) => g.dimension,
            Geometry::PolyhedralSurface(g) => g.dimension,
            Geometry::Tin(g) => g.dimension,
            Geometry::MultiPoint(g) => g.dimension,
            Geometry::MultiLineString(g) => g.dimension,
            Geometry::MultiPolygon(g) => g.dimension,
            Geometry::MultiCurve(g) => g.dimension,
            Geometry::MultiSurface(g) => g.dimension,
            Geometry::GeometryCollection(g) => g.dimension,
        }
    }

    /// The optional spatial reference identifier.
    pub fn srid(&self) -> Option<&str> {
        match self {
            Geometry::Point(g) => g.srid.as_deref(),
            Geometry::LineString(g) => g.srid.as_deref(),
            Geometry::LinearRing(g) => g.srid.as_deref(),
            Geometry::CircularString(g) => g.srid.as_deref(),
            Geometry::CompoundCurve(g) => g.srid.as_deref(),
            Geometry::Polygon(g) => g.srid.as_deref(),
            Geometry::CurvePolygon(g) => g.srid.as_deref(),
            Geometry::Triangle(g) => g.srid.as_deref(),
            Geometry::PolyhedralSurface(g) => g.srid.as_deref(),
            Geometry::Tin(g) => g.srid.as_deref(),
            Geometry::MultiPoint(g) => g.srid.as_deref(),
            Geometry::MultiLineString(g) => g.srid.as_deref(),
            Geometry::MultiPolygon(g) => g.srid.as_deref(),
            Geometry::MultiCurve(g) => g.srid.as_deref(),
            Geometry::MultiSurface(g) => g.srid.as_deref(),
            Geometry::GeometryCollection(g) => g.srid.as_deref(),
        }
    }

    /// Whether this geometry is empty.
    ///
    /// A point is empty when its coordinate is absent; list-backed kinds when
    /// the backing list is empty; ring- and curve-bearing kinds when the
    /// exterior ring or curve is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::CircularString(g) => g.is_empty(),
            Geometry::CompoundCurve(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::CurvePolygon(g) => g.is_empty(),
            Geometry::Triangle(g) => g.is_empty(),
            Geometry::PolyhedralSurface(g) => g.is_empty(),
            Geometry::Tin(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::MultiCurve(g) => g.is_empty(),
            Geometry::MultiSurface(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// The number of coordinates, computed recursively over children.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Geometry::Point(g) => g.coordinate_count(),
            Geometry::LineString(g) => g.coordinate_count(),
            Geometry::LinearRing(g) => g.coordinate_count(),
            Geometry::CircularString(g) => g.coordinate_count(),
            Geometry::CompoundCurve(g) => g.coordinate_count(),
            Geometry::Polygon(g) => g.coordinate_count(),
            Geometry::CurvePolygon(g) => g.coordinate_count(),
            Geometry::Triangle(g) => g.coordinate_count(),
            Geometry::PolyhedralSurface(g) => g.coordinate_count(),
            Geometry::Tin(g) => g.coordinate_count(),
            Geometry::MultiPoint(g) => g.coordinate_count(),
            Geometry::MultiLineString(g) => g.coordinate_count(),
            Geometry::MultiPolygon(g) => g.coordinate_count(),
            Geometry::MultiCurve(g) => g.coordinate_count(),
            Geometry::MultiSurface(g) => g.coordinate_count(),
            Geometry::GeometryCollection(g) => g.coordinate_count(),
        }
    }
}

impl fmt::Display for Geometry {
    /// Canonical WKT with the SRID prefix and dimension qualifier included.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&wkt::write(self))
    }
}

impl FromStr for Geometry {
    type Err = GeoWktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        wkt::parse(s)
    }
}

macro_rules! impl_from {
    ($variant:ident) => {
        impl From<$variant> for Geometry {
            fn from(value: $variant) -> Self {
                Geometry::$variant(value)
            }
        }
    };
}

impl_from!(Point);
impl_from!(LineString);
impl_from!(LinearRing);
impl_from!(CircularString);
impl_from!(CompoundCurve);
impl_from!(Polygon);
impl_from!(CurvePolygon);
impl_from!(Triangle);
impl_from!(PolyhedralSurface);
impl_from!(Tin);
impl_from!(MultiPoint);
impl_from!(MultiLineString);
impl_from!(MultiPolygon);
impl_from!(MultiCurve);
impl_from!(MultiSurface);
impl_from!(GeometryCollection);
