//! A single position with optional Z and M axes.

use std::fmt;

use crate::datatypes::Dimension;

/// An immutable coordinate with X and Y values and optional Z and M values.
///
/// The dimension of a coordinate is derived from which optional axes are
/// present; it is never stored separately.
#[derive(Debug, Clone, Copy)]
pub struct Coord {
    /// The X value
    pub x: f64,
    /// The Y value
    pub y: f64,
    /// The optional Z value
    pub z: Option<f64>,
    /// The optional M value
    pub m: Option<f64>,
}

impl Coord {
    /// Create an XY coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    /// Create an XYZ coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
        }
    }

    /// Create an XYM coordinate.
    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: Some(m),
        }
    }

    /// Create an XYZM coordinate.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: Some(m),
        }
    }

    /// The dimension derived from which axes are present.
    pub fn dimension(&self) -> Dimension {
        Dimension::from_axes(self.z.is_some(), self.m.is_some())
    }
}

/// Coordinates compare by value with a total order on each axis: an absent
/// axis only equals an absent axis, and a NaN payload equals a NaN payload.
impl PartialEq for Coord {
    fn eq(&self, other: &Self) -> bool {
        fn axis_eq(a: Option<f64>, b: Option<f64>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a.total_cmp(&b).is_eq(),
                _ => false,
            }
        }
        self.x.total_cmp(&other.x).is_eq()
            && self.y.total_cmp(&other.y).is_eq()
            && axis_eq(self.z, other.z)
            && axis_eq(self.m, other.m)
    }
}

impl Eq for Coord {}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.x)?;
        f.write_str(" ")?;
        write_value(f, self.y)?;
        if let Some(z) = self.z {
            f.write_str(" ")?;
            write_value(f, z)?;
        }
        if let Some(m) = self.m {
            f.write_str(" ")?;
            write_value(f, m)?;
        }
        Ok(())
    }
}

/// `{:?}` gives the shortest round-trip digits with a forced fractional
/// digit, but switches to exponent notation at extreme magnitudes. Grammars
/// for this text carry no exponent form, so such values are expanded
/// positionally instead, keeping the fractional digit.
fn write_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = format!("{value:?}");
    if !text.contains('e') {
        return f.write_str(&text);
    }
    let expanded = format!("{value}");
    if expanded.contains('.') {
        f.write_str(&expanded)
    } else {
        write!(f, "{expanded}.0")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_from_presence() {
        assert_eq!(Coord::xy(1.0, 2.0).dimension(), Dimension::XY);
        assert_eq!(Coord::xyz(1.0, 2.0, 3.0).dimension(), Dimension::XYZ);
        assert_eq!(Coord::xym(1.0, 2.0, 3.0).dimension(), Dimension::XYM);
        assert_eq!(Coord::xyzm(1.0, 2.0, 3.0, 4.0).dimension(), Dimension::XYZM);
    }

    #[test]
    fn absence_equals_absence() {
        assert_eq!(Coord::xy(1.0, 2.0), Coord::xy(1.0, 2.0));
        assert_ne!(Coord::xy(1.0, 2.0), Coord::xyz(1.0, 2.0, 0.0));
        assert_ne!(Coord::xym(1.0, 2.0, 3.0), Coord::xyz(1.0, 2.0, 3.0));
    }

    #[test]
    fn nan_payloads_compare_by_value() {
        assert_eq!(
            Coord::xyz(1.0, 2.0, f64::NAN),
            Coord::xyz(1.0, 2.0, f64::NAN)
        );
        assert_ne!(Coord::xy(0.0, 0.0), Coord::xy(-0.0, 0.0));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::xy(1.0, 2.0).to_string(), "1.0 2.0");
        assert_eq!(Coord::xym(1.0, 2.0, 3.5).to_string(), "1.0 2.0 3.5");
        assert_eq!(Coord::xyzm(1.0, 2.0, 3.0, 4.0).to_string(), "1.0 2.0 3.0 4.0");
    }

    #[test]
    fn display_extreme_magnitudes_without_exponent() {
        let text = Coord::xy(1e300, 2.0).to_string();
        assert!(!text.contains('e'), "{text}");
        assert!(text.starts_with('1'));
        assert!(text.ends_with(".0 2.0"));

        let text = Coord::xy(1e-300, -1e300).to_string();
        assert!(!text.contains('e'), "{text}");
        assert!(text.starts_with("0.0"));
        assert!(text.ends_with(".0"));
    }
}
