//! # Line Representation
//!
//! A line in space is a point plus a non-zero direction vector. This module
//! builds [`LineEquation`] values in the two textbook forms:
//!
//! - **Vector form**: `r = (px, py, pz) + λ(dx, dy, dz)`
//! - **Cartesian symmetric form**:
//!   `(x - x0)/a = (y - y0)/b = (z - z0)/c`
//!
//! When a direction ratio is zero the corresponding coordinate is fixed, so
//! the symmetric form emits a fixed-coordinate clause (`"y = 2"`) instead of
//! a division term. If all three ratios are zero the "line" degenerates to a
//! single point; that is returned as a point-form result rather than an
//! error, since the geometry is still answerable.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::directions::DirectionRatios;
use crate::format::fmt_number;
use crate::vectors::{Point3, Vector3};
use crate::{GeometryError, Result};

/// Which textual form a [`LineEquation`] carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineForm {
    /// `r = P + λD`
    Vector,
    /// `(x - x0)/a = (y - y0)/b = (z - z0)/c`
    CartesianSymmetric,
    /// Degenerate: all direction ratios zero, the locus is a single point
    Point,
}

/// A line given by a point on it and its direction
///
/// The `equation` field is the human-readable rendering in the form named
/// by `form`; `point` and `direction` carry the same data numerically for
/// downstream computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEquation {
    /// Which form `equation` is rendered in
    pub form: LineForm,
    /// Formatted equation string
    pub equation: String,
    /// A point on the line
    pub point: Point3,
    /// Direction vector (zero only for the degenerate point form)
    pub direction: Vector3,
}

impl LineEquation {
    /// Builds the vector form `r = P + λD`
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the direction is
    /// the zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::{LineEquation, Point3, Vector3};
    ///
    /// let line = LineEquation::vector_form(
    ///     Point3::new(1.0, 1.0, 0.0),
    ///     Vector3::new(1.0, -1.0, 2.0),
    /// ).unwrap();
    /// assert_eq!(line.equation, "r = (1, 1, 0) + λ(1, -1, 2)");
    /// ```
    pub fn vector_form(point: Point3, direction: Vector3) -> Result<Self> {
        if direction.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "direction vector for a line cannot be the zero vector".to_string(),
            ));
        }
        Ok(LineEquation {
            form: LineForm::Vector,
            equation: format!("r = {} + λ{}", point, direction),
            point,
            direction,
        })
    }

    /// Builds the cartesian symmetric form from a point and direction ratios
    ///
    /// Axes with a zero ratio contribute a fixed-coordinate clause after the
    /// division terms, separated by `"; "`. All ratios zero produces a
    /// point-form result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::directions::DirectionRatios;
    /// use spatial3d::{LineEquation, Point3};
    ///
    /// let line = LineEquation::cartesian_symmetric(
    ///     Point3::new(1.0, 2.0, 3.0),
    ///     &DirectionRatios::new(2.0, 0.0, 5.0),
    /// );
    /// assert_eq!(line.equation, "(x - 1)/2 = (z - 3)/5; y = 2");
    /// ```
    pub fn cartesian_symmetric(point: Point3, dr: &DirectionRatios) -> Self {
        let direction = dr.to_vector();
        if direction.is_zero(EPSILON) {
            return LineEquation {
                form: LineForm::Point,
                equation: format!("Point: {}", point),
                point,
                direction: Vector3::zero(),
            };
        }

        let mut terms = Vec::new();
        if dr.a.abs() > EPSILON {
            terms.push(format!("(x - {})/{}", fmt_number(point.x), fmt_number(dr.a)));
        }
        if dr.b.abs() > EPSILON {
            terms.push(format!("(y - {})/{}", fmt_number(point.y), fmt_number(dr.b)));
        }
        if dr.c.abs() > EPSILON {
            terms.push(format!("(z - {})/{}", fmt_number(point.z), fmt_number(dr.c)));
        }

        let mut fixed = Vec::new();
        if dr.a.abs() < EPSILON {
            fixed.push(format!("x = {}", fmt_number(point.x)));
        }
        if dr.b.abs() < EPSILON {
            fixed.push(format!("y = {}", fmt_number(point.y)));
        }
        if dr.c.abs() < EPSILON {
            fixed.push(format!("z = {}", fmt_number(point.z)));
        }

        let mut equation = terms.join(" = ");
        if !fixed.is_empty() {
            if !equation.is_empty() {
                equation.push_str("; ");
            }
            equation.push_str(&fixed.join(", "));
        }

        LineEquation {
            form: LineForm::CartesianSymmetric,
            equation,
            point,
            direction,
        }
    }

    /// Builds both forms of the line through two distinct points
    ///
    /// The first point anchors both equations; the direction is `p2 - p1`.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the points
    /// coincide, since they do not determine a unique line.
    pub fn from_two_points(p1: Point3, p2: Point3) -> Result<(Self, Self)> {
        let direction = p1.vector_to(&p2);
        if direction.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "two coincident points cannot define a unique line".to_string(),
            ));
        }
        let vector = Self::vector_form(p1, direction)?;
        let symmetric = Self::cartesian_symmetric(p1, &DirectionRatios::from_vector(&direction));
        Ok((vector, symmetric))
    }

    /// A point at parameter `t` along the line: `P + t·D`
    pub fn point_at(&self, t: f64) -> Point3 {
        self.point + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_form_equation_string() {
        let line = LineEquation::vector_form(
            Point3::new(1.0, 1.0, 0.0),
            Vector3::new(1.0, -1.0, 2.0),
        )
        .unwrap();
        assert_eq!(line.form, LineForm::Vector);
        assert_eq!(line.equation, "r = (1, 1, 0) + λ(1, -1, 2)");
        assert_eq!(line.point, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(line.direction, Vector3::new(1.0, -1.0, 2.0));
    }

    #[test]
    fn test_vector_form_rejects_zero_direction() {
        let err = LineEquation::vector_form(Point3::origin(), Vector3::zero()).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateInput(_)));
    }

    #[test]
    fn test_symmetric_form_all_ratios_nonzero() {
        let line = LineEquation::cartesian_symmetric(
            Point3::new(1.0, 2.0, 3.0),
            &DirectionRatios::new(2.0, -3.0, 5.0),
        );
        assert_eq!(line.form, LineForm::CartesianSymmetric);
        assert_eq!(line.equation, "(x - 1)/2 = (y - 2)/-3 = (z - 3)/5");
    }

    #[test]
    fn test_symmetric_form_one_zero_ratio() {
        let line = LineEquation::cartesian_symmetric(
            Point3::new(1.0, 2.0, 3.0),
            &DirectionRatios::new(2.0, 0.0, 5.0),
        );
        assert_eq!(line.equation, "(x - 1)/2 = (z - 3)/5; y = 2");
    }

    #[test]
    fn test_symmetric_form_two_zero_ratios() {
        // Line parallel to the z-axis: x and y are both fixed
        let line = LineEquation::cartesian_symmetric(
            Point3::new(1.0, 2.0, 3.0),
            &DirectionRatios::new(0.0, 0.0, 4.0),
        );
        assert_eq!(line.equation, "(z - 3)/4; x = 1, y = 2");
    }

    #[test]
    fn test_symmetric_form_degenerates_to_point() {
        let line = LineEquation::cartesian_symmetric(
            Point3::new(1.0, 2.0, 3.0),
            &DirectionRatios::new(0.0, 0.0, 0.0),
        );
        assert_eq!(line.form, LineForm::Point);
        assert_eq!(line.equation, "Point: (1, 2, 3)");
        assert!(line.direction.is_zero(EPSILON));
    }

    #[test]
    fn test_from_two_points() {
        let (vector, symmetric) =
            LineEquation::from_two_points(Point3::new(1.0, 1.0, 0.0), Point3::new(2.0, 0.0, 2.0))
                .unwrap();
        assert_eq!(vector.direction, Vector3::new(1.0, -1.0, 2.0));
        assert_eq!(vector.point, Point3::new(1.0, 1.0, 0.0));
        assert_eq!(symmetric.form, LineForm::CartesianSymmetric);
        assert_eq!(symmetric.direction, vector.direction);
    }

    #[test]
    fn test_from_two_coincident_points_fails() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(LineEquation::from_two_points(p, p).is_err());

        // Within tolerance of coincident
        let q = Point3::new(1.0 + 1e-12, 2.0, 3.0);
        assert!(LineEquation::from_two_points(p, q).is_err());
    }

    #[test]
    fn test_point_at_parameter() {
        let line = LineEquation::vector_form(
            Point3::new(1.0, 1.0, 0.0),
            Vector3::new(1.0, -1.0, 2.0),
        )
        .unwrap();
        assert_eq!(line.point_at(0.0), Point3::new(1.0, 1.0, 0.0));
        assert_eq!(line.point_at(1.0), Point3::new(2.0, 0.0, 2.0));
        assert_eq!(line.point_at(-1.0), Point3::new(0.0, 2.0, -2.0));
    }
}
