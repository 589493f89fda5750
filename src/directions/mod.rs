//! # Direction Descriptors
//!
//! A line's orientation can be described two ways:
//!
//! - **Direction ratios** `(a, b, c)`: any nonzero scalar multiple names the
//!   same direction. No normalization invariant.
//! - **Direction cosines** `(l, m, n)`: the unique unit-length triple with
//!   `l² + m² + n² = 1`, the cosines of the angles the direction makes with
//!   the coordinate axes.
//!
//! Deriving cosines from a zero vector is treated as an answerable
//! degenerate case rather than a caller error: the result is the all-zero
//! triple flagged invalid.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::vectors::{Point3, Vector3};

/// Direction ratios of a line: any triple proportional to its direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionRatios {
    /// Ratio along the x-axis
    pub a: f64,
    /// Ratio along the y-axis
    pub b: f64,
    /// Ratio along the z-axis
    pub c: f64,
}

impl DirectionRatios {
    /// Creates direction ratios from raw components
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        DirectionRatios { a, b, c }
    }

    /// Direction ratios of a vector, taken verbatim from its components
    pub fn from_vector(v: &Vector3) -> Self {
        DirectionRatios {
            a: v.x,
            b: v.y,
            c: v.z,
        }
    }

    /// Direction ratios of the line through two points
    pub fn from_points(p1: &Point3, p2: &Point3) -> Self {
        Self::from_vector(&p1.vector_to(p2))
    }

    /// The vector with these ratios as components
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }
}

/// Direction cosines of a line: the unit triple `(l, m, n)`
///
/// `valid` is false when the cosines were derived from a zero vector, in
/// which case all three components are zero and the unit-length invariant
/// does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionCosines {
    /// Cosine of the angle with the x-axis
    pub l: f64,
    /// Cosine of the angle with the y-axis
    pub m: f64,
    /// Cosine of the angle with the z-axis
    pub n: f64,
    /// False when derived from a zero vector
    pub valid: bool,
}

impl DirectionCosines {
    /// Creates direction cosines, checking the unit-length invariant
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::directions::DirectionCosines;
    ///
    /// let dc = DirectionCosines::new(1.0, 0.0, 0.0);
    /// assert!(dc.valid);
    ///
    /// let not_unit = DirectionCosines::new(1.0, 1.0, 0.0);
    /// assert!(!not_unit.valid);
    /// ```
    pub fn new(l: f64, m: f64, n: f64) -> Self {
        let sum_sq = l * l + m * m + n * n;
        DirectionCosines {
            l,
            m,
            n,
            valid: (sum_sq - 1.0).abs() < EPSILON,
        }
    }

    /// Direction cosines from direction ratios
    ///
    /// Divides each ratio by the magnitude of the triple. The zero triple
    /// yields the all-zero result flagged invalid; this is not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::directions::{DirectionCosines, DirectionRatios};
    ///
    /// let dc = DirectionCosines::from_ratios(&DirectionRatios::new(3.0, 0.0, 4.0));
    /// assert!(dc.valid);
    /// assert!((dc.l - 0.6).abs() < 1e-12);
    /// assert!((dc.n - 0.8).abs() < 1e-12);
    ///
    /// let zero = DirectionCosines::from_ratios(&DirectionRatios::new(0.0, 0.0, 0.0));
    /// assert!(!zero.valid);
    /// ```
    pub fn from_ratios(dr: &DirectionRatios) -> Self {
        let mag = (dr.a * dr.a + dr.b * dr.b + dr.c * dr.c).sqrt();
        if mag < EPSILON {
            return DirectionCosines {
                l: 0.0,
                m: 0.0,
                n: 0.0,
                valid: false,
            };
        }
        DirectionCosines::new(dr.a / mag, dr.b / mag, dr.c / mag)
    }

    /// Direction cosines of a vector
    pub fn from_vector(v: &Vector3) -> Self {
        Self::from_ratios(&DirectionRatios::from_vector(v))
    }

    /// The unit vector with these cosines as components
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.l, self.m, self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_ratios_from_vector_verbatim() {
        let dr = DirectionRatios::from_vector(&Vector3::new(2.0, -3.0, 6.0));
        assert_eq!((dr.a, dr.b, dr.c), (2.0, -3.0, 6.0));
    }

    #[test]
    fn test_ratios_from_points() {
        let dr = DirectionRatios::from_points(
            &Point3::new(1.0, 1.0, 0.0),
            &Point3::new(2.0, 0.0, 2.0),
        );
        assert_eq!((dr.a, dr.b, dr.c), (1.0, -1.0, 2.0));
    }

    #[rstest]
    #[case(2.0, -3.0, 6.0)]
    #[case(1.0, 0.0, 0.0)]
    #[case(-0.3, 0.4, 12.0)]
    fn test_cosines_unit_invariant(#[case] a: f64, #[case] b: f64, #[case] c: f64) {
        let dc = DirectionCosines::from_ratios(&DirectionRatios::new(a, b, c));
        assert!(dc.valid);
        assert_relative_eq!(
            dc.l * dc.l + dc.m * dc.m + dc.n * dc.n,
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_cosines_known_values() {
        // (2, -3, 6) has magnitude 7
        let dc = DirectionCosines::from_ratios(&DirectionRatios::new(2.0, -3.0, 6.0));
        assert_relative_eq!(dc.l, 2.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(dc.m, -3.0 / 7.0, epsilon = 1e-12);
        assert_relative_eq!(dc.n, 6.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cosines_scale_invariant() {
        let dc1 = DirectionCosines::from_ratios(&DirectionRatios::new(1.0, 2.0, 2.0));
        let dc2 = DirectionCosines::from_ratios(&DirectionRatios::new(5.0, 10.0, 10.0));
        assert_relative_eq!(dc1.l, dc2.l, epsilon = 1e-12);
        assert_relative_eq!(dc1.m, dc2.m, epsilon = 1e-12);
        assert_relative_eq!(dc1.n, dc2.n, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_ratios_flagged_invalid() {
        let dc = DirectionCosines::from_ratios(&DirectionRatios::new(0.0, 0.0, 0.0));
        assert!(!dc.valid);
        assert_eq!((dc.l, dc.m, dc.n), (0.0, 0.0, 0.0));

        let dc = DirectionCosines::from_vector(&Vector3::zero());
        assert!(!dc.valid);
    }

    #[test]
    fn test_small_but_nonzero_ratios_are_valid() {
        // Magnitude 1e-6 is well above the tolerance even though its
        // square is below it; the zero test is on the magnitude itself,
        // agreeing with Vector3::is_zero
        let dr = DirectionRatios::new(1e-6, 0.0, 0.0);
        assert!(!dr.to_vector().is_zero(crate::constants::EPSILON));
        let dc = DirectionCosines::from_ratios(&dr);
        assert!(dc.valid);
        assert_relative_eq!(dc.l, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cosines_from_vector_matches_normalize() {
        let v = Vector3::new(1.0, -1.0, 2.0);
        let dc = DirectionCosines::from_vector(&v);
        let unit = v.normalize().unwrap();
        assert_relative_eq!(dc.l, unit.x, epsilon = 1e-12);
        assert_relative_eq!(dc.m, unit.y, epsilon = 1e-12);
        assert_relative_eq!(dc.n, unit.z, epsilon = 1e-12);
    }
}
