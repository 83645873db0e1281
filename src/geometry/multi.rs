//! Homogeneous and heterogeneous geometry collections.

use crate::datatypes::Dimension;
use crate::geometry::{Curve, Geometry, LineString, Point, Polygon, Surface};

/// A collection of [Point]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPoint {
    /// The member points
    pub points: Vec<Point>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl MultiPoint {
    /// Create a new multi point.
    pub fn new(points: Vec<Point>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            points,
            dimension,
            srid,
        }
    }

    /// Create an empty multi point.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.points.iter().map(Point::coordinate_count).sum()
    }
}

/// A collection of [LineString]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineString {
    /// The member line strings
    pub line_strings: Vec<LineString>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl MultiLineString {
    /// Create a new multi line string.
    pub fn new(line_strings: Vec<LineString>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            line_strings,
            dimension,
            srid,
        }
    }

    /// Create an empty multi line string.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.line_strings.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.line_strings
            .iter()
            .map(LineString::coordinate_count)
            .sum()
    }
}

/// A collection of [Polygon]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiPolygon {
    /// The member polygons
    pub polygons: Vec<Polygon>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl MultiPolygon {
    /// Create a new multi polygon.
    pub fn new(polygons: Vec<Polygon>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            polygons,
            dimension,
            srid,
        }
    }

    /// Create an empty multi polygon.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.polygons.iter().map(Polygon::coordinate_count).sum()
    }
}

/// A collection of [Curve]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCurve {
    /// The member curves
    pub curves: Vec<Curve>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl MultiCurve {
    /// Create a new multi curve.
    pub fn new(curves: Vec<Curve>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            curves,
            dimension,
            srid,
        }
    }

    /// Create an empty multi curve.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.curves.iter().map(Curve::coordinate_count).sum()
    }
}

/// A collection of [Surface]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSurface {
    /// The member surfaces
    pub surfaces: Vec<Surface>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl MultiSurface {
    /// Create a new multi surface.
    pub fn new(surfaces: Vec<Surface>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            surfaces,
            dimension,
            srid,
        }
    }

    /// Create an empty multi surface.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.surfaces.iter().map(Surface::coordinate_count).sum()
    }
}

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryCollection {
    /// The member geometries
    pub geometries: Vec<Geometry>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl GeometryCollection {
    /// Create a new geometry collection.
    pub fn new(geometries: Vec<Geometry>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            geometries,
            dimension,
            srid,
        }
    }

    /// Create an empty geometry collection.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this collection has no members.
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// The total number of coordinates over all members.
    pub fn coordinate_count(&self) -> usize {
        self.geometries.iter().map(Geometry::coordinate_count).sum()
    }
}
