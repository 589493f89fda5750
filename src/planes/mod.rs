//! # Plane Representation
//!
//! A plane is carried either as a unit normal plus its signed distance from
//! the origin, or as the coefficients `(A, B, C, D)` of
//! `Ax + By + Cz + D = 0`. The two are interconvertible whenever the normal
//! `(A, B, C)` is non-zero, which every constructor enforces.
//!
//! The canonical vector normal form keeps `d >= 0`: a negative signed
//! distance flips both the normal and the distance.

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;
use crate::format::fmt_number;
use crate::vectors::{Point3, Vector3};
use crate::{GeometryError, Result};

/// Coefficients of the cartesian plane equation `Ax + By + Cz + D = 0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneCoefficients {
    /// Coefficient of x
    pub a: f64,
    /// Coefficient of y
    pub b: f64,
    /// Coefficient of z
    pub c: f64,
    /// Constant term
    pub d: f64,
}

impl PlaneCoefficients {
    /// Creates plane coefficients for `Ax + By + Cz + D = 0`
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        PlaneCoefficients { a, b, c, d }
    }

    /// The (unnormalized) normal vector `(A, B, C)`
    pub fn normal(&self) -> Vector3 {
        Vector3::new(self.a, self.b, self.c)
    }

    /// Evaluates the left-hand side `Ax + By + Cz + D` at a point
    ///
    /// Zero within tolerance means the point lies on the plane.
    pub fn evaluate(&self, point: &Point3) -> f64 {
        self.a * point.x + self.b * point.y + self.c * point.z + self.d
    }

    /// Finds one point on the plane
    ///
    /// Solves along whichever axis has a nonzero coefficient, zeroing the
    /// other two coordinates.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when all of `(A, B, C)`
    /// are zero.
    pub fn point_on_plane(&self) -> Result<Point3> {
        if self.a.abs() > EPSILON {
            Ok(Point3::new(-self.d / self.a, 0.0, 0.0))
        } else if self.b.abs() > EPSILON {
            Ok(Point3::new(0.0, -self.d / self.b, 0.0))
        } else if self.c.abs() > EPSILON {
            Ok(Point3::new(0.0, 0.0, -self.d / self.c))
        } else {
            Err(GeometryError::DegenerateInput(
                "plane normal (A, B, C) is the zero vector".to_string(),
            ))
        }
    }
}

/// Which construction produced a [`PlaneEquation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaneForm {
    /// `r . n̂ = d` with unit normal and non-negative distance
    VectorNormal,
    /// Cartesian form built from a normal and a point on the plane
    CartesianFromNormalPoint,
    /// Cartesian form built directly from coefficients
    CartesianFromCoefficients,
}

/// A plane with its formatted equation and numeric descriptors
///
/// `normal` is always present; `distance_from_origin` and `coefficients`
/// are filled when the construction determines them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneEquation {
    /// Which constructor produced this plane
    pub form: PlaneForm,
    /// Formatted equation string
    pub equation: String,
    /// Normal vector (unit length only for the vector normal form)
    pub normal: Option<Vector3>,
    /// Perpendicular distance from the origin, when known
    pub distance_from_origin: Option<f64>,
    /// Cartesian coefficients, when known
    pub coefficients: Option<PlaneCoefficients>,
}

fn cartesian_equation(coeffs: &PlaneCoefficients) -> String {
    format!(
        "{}x + {}y + {}z + {} = 0",
        fmt_number(coeffs.a),
        fmt_number(coeffs.b),
        fmt_number(coeffs.c),
        fmt_number(coeffs.d)
    )
}

impl PlaneEquation {
    /// Builds the vector normal form `r . n̂ = d`
    ///
    /// The normal is normalized; a negative `distance` flips both the
    /// normal and the distance so the canonical distance is non-negative.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the normal is the
    /// zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::{PlaneEquation, Vector3};
    ///
    /// let plane = PlaneEquation::vector_normal_form(Vector3::new(0.0, 0.0, 2.0), -3.0).unwrap();
    /// // Flipped: unit normal (0, 0, -1) at distance 3
    /// assert_eq!(plane.distance_from_origin, Some(3.0));
    /// assert_eq!(plane.normal, Some(Vector3::new(0.0, 0.0, -1.0)));
    /// ```
    pub fn vector_normal_form(normal: Vector3, distance: f64) -> Result<Self> {
        if normal.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "normal vector for a plane cannot be the zero vector".to_string(),
            ));
        }
        let mut unit = normal.normalize()?;
        let mut d = distance;
        if d < 0.0 {
            d = -d;
            unit = -unit;
        }
        Ok(PlaneEquation {
            form: PlaneForm::VectorNormal,
            equation: format!("r . {} = {}", unit, fmt_number(d)),
            normal: Some(unit),
            distance_from_origin: Some(d),
            // In Ax + By + Cz + D = 0 terms the unit normal gives D = -d
            coefficients: Some(PlaneCoefficients::new(unit.x, unit.y, unit.z, -d)),
        })
    }

    /// Builds the cartesian form from a normal and a point on the plane
    ///
    /// `D = -(n · p)` so that the point satisfies the equation.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the normal is the
    /// zero vector.
    pub fn from_normal_and_point(normal: Vector3, point: Point3) -> Result<Self> {
        if normal.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "normal vector for a plane cannot be the zero vector".to_string(),
            ));
        }
        let d = -normal.dot(&point.to_vector());
        let coeffs = PlaneCoefficients::new(normal.x, normal.y, normal.z, d);
        Ok(PlaneEquation {
            form: PlaneForm::CartesianFromNormalPoint,
            equation: cartesian_equation(&coeffs),
            normal: Some(normal),
            distance_from_origin: None,
            coefficients: Some(coeffs),
        })
    }

    /// Builds the cartesian form directly from coefficients
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when `(A, B, C)` is the
    /// zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::{PlaneCoefficients, PlaneEquation};
    ///
    /// let plane =
    ///     PlaneEquation::from_coefficients(&PlaneCoefficients::new(1.0, 1.0, 1.0, -6.0)).unwrap();
    /// assert_eq!(plane.equation, "1x + 1y + 1z + -6 = 0");
    /// ```
    pub fn from_coefficients(coeffs: &PlaneCoefficients) -> Result<Self> {
        let normal = coeffs.normal();
        if normal.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "plane coefficients A, B, C cannot all be zero".to_string(),
            ));
        }
        Ok(PlaneEquation {
            form: PlaneForm::CartesianFromCoefficients,
            equation: cartesian_equation(coeffs),
            normal: Some(normal),
            distance_from_origin: Some(coeffs.d.abs() / normal.magnitude()),
            coefficients: Some(*coeffs),
        })
    }

    /// Builds the plane through three non-collinear points
    ///
    /// The normal is `(p2 - p1) × (p3 - p1)` and `p1` anchors the equation.
    ///
    /// # Errors
    ///
    /// Fails with [`GeometryError::DegenerateInput`] when the points are
    /// collinear (the cross product vanishes), since they do not determine
    /// a unique plane.
    pub fn from_three_points(p1: Point3, p2: Point3, p3: Point3) -> Result<Self> {
        let normal = p1.vector_to(&p2).cross(&p1.vector_to(&p3));
        if normal.is_zero(EPSILON) {
            return Err(GeometryError::DegenerateInput(
                "collinear points do not define a unique plane".to_string(),
            ));
        }
        Self::from_normal_and_point(normal, p1)
    }
}
