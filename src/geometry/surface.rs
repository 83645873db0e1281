use crate::datatypes::Dimension;
use crate::geometry::{Curve, Geometry, LineString, Polygon, Triangle};

/// An area bounded by one exterior curve and zero or more interior curves.
///
/// Like [Polygon], the exterior is always materialized; an empty curve
/// polygon holds an empty [LineString] exterior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurvePolygon {
    /// The exterior curve
    pub exterior: Curve,
    /// The interior curves
    pub interiors: Vec<Curve>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl CurvePolygon {
    /// Create a new curve polygon.
    pub fn new(
        exterior: Curve,
        interiors: Vec<Curve>,
        dimension: Dimension,
        srid: Option<String>,
    ) -> Self {
        Self {
            exterior,
            interiors,
            dimension,
            srid,
        }
    }

    /// Create an empty curve polygon with an empty exterior line string.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(
            Curve::LineString(LineString::empty(srid.clone())),
            Vec::new(),
            Dimension::XY,
            srid,
        )
    }

    /// Whether the exterior curve is empty.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// The number of coordinates over the exterior and interior curves.
    pub fn coordinate_count(&self) -> usize {
        self.exterior.coordinate_count()
            + self
                .interiors
                .iter()
                .map(Curve::coordinate_count)
                .sum::<usize>()
    }
}

/// A surface made of polygon patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyhedralSurface {
    /// The polygon patches
    pub polygons: Vec<Polygon>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl PolyhedralSurface {
    /// Create a new polyhedral surface.
    pub fn new(polygons: Vec<Polygon>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            polygons,
            dimension,
            srid,
        }
    }

    /// Create an empty polyhedral surface.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this surface has no patches.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The total number of coordinates over all patches.
    pub fn coordinate_count(&self) -> usize {
        self.polygons.iter().map(Polygon::coordinate_count).sum()
    }
}

/// A triangulated irregular network: a surface made of triangle patches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tin {
    /// The triangle patches
    pub triangles: Vec<Triangle>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl Tin {
    /// Create a new TIN.
    pub fn new(triangles: Vec<Triangle>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            triangles,
            dimension,
            srid,
        }
    }

    /// Create an empty TIN.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this TIN has no patches.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The total number of coordinates over all patches.
    pub fn coordinate_count(&self) -> usize {
        self.triangles.iter().map(Triangle::coordinate_count).sum()
    }
}

/// The area-like geometry family.
///
/// A capability grouping over existing variants, not new data. Surfaces
/// appear as the elements of `MultiSurface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// A polygon with straight ring boundaries
    Polygon(Polygon),
    /// A polygon with curved boundaries
    CurvePolygon(CurvePolygon),
}

impl Surface {
    /// The dimension of the underlying geometry.
    pub fn dimension(&self) -> Dimension {
        match self {
            Surface::Polygon(g) => g.dimension,
            Surface::CurvePolygon(g) => g.dimension,
        }
    }

    /// The SRID of the underlying geometry.
    pub fn srid(&self) -> Option<&str> {
        match self {
            Surface::Polygon(g) => g.srid.as_deref(),
            Surface::CurvePolygon(g) => g.srid.as_deref(),
        }
    }

    /// Whether the underlying geometry is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Surface::Polygon(g) => g.is_empty(),
            Surface::CurvePolygon(g) => g.is_empty(),
        }
    }

    /// The number of coordinates of the underlying geometry.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Surface::Polygon(g) => g.coordinate_count(),
            Surface::CurvePolygon(g) => g.coordinate_count(),
        }
    }
}

impl From<Surface> for Geometry {
    fn from(value: Surface) -> Self {
        match value {
            Surface::Polygon(g) => Geometry::Polygon(g),
            Surface::CurvePolygon(g) => Geometry::CurvePolygon(g),
        }
    }
}
