//! # Vector and Point Primitives
//!
//! This module provides the two value types every other module is built on:
//! [`Vector3`] for displacements and directions, and [`Point3`] for
//! locations.
//!
//! ## Design Philosophy
//!
//! The underlying arithmetic of the two types is identical, but they are
//! kept distinct so that "where something is" and "which way something
//! points" cannot be conflated by accident. A point converts to the vector
//! from the origin to itself ([`Point3::to_vector`]) and back
//! ([`Point3::from_vector`]) when the arithmetic genuinely needs to cross
//! that boundary, e.g. when evaluating `A + t·d` along a line.
//!
//! ## Immutability
//!
//! Every operation is pure and returns a new value; nothing here mutates in
//! place. Both types are `Copy`, so the ownership story is trivial.
//!
//! ## Internal Storage
//!
//! Components are stored as three `f64` values with no normalization or
//! other transformation on construction, preserving exact input values.
//!
//! ## Examples
//!
//! ```rust
//! use spatial3d::vectors::Vector3;
//!
//! let a = Vector3::new(1.0, -1.0, 2.0);
//! let b = Vector3::new(2.0, 3.0, -1.0);
//!
//! // Dot product: 2 - 3 - 2
//! assert_eq!(a.dot(&b), -3.0);
//!
//! // Cross product is orthogonal to both inputs
//! let c = a.cross(&b);
//! assert!(c.dot(&a).abs() < 1e-12);
//! assert!(c.dot(&b).abs() < 1e-12);
//! ```

use nalgebra::Vector3 as NaVector3;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::EPSILON;
use crate::format::fmt_number;
use crate::{GeometryError, Result};

/// A displacement or direction in 3D space
///
/// Used for line directions, plane normals, and differences of points.
/// All operations are closed-form componentwise arithmetic and return new
/// values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::vectors::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Calculates the magnitude (Euclidean length) of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::vectors::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a unit vector in the same direction
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateInput`] when the magnitude is
    /// within tolerance of zero, since a zero vector has no direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::vectors::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    ///
    /// assert!(Vector3::zero().normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Vector3> {
        let mag = self.magnitude();
        if mag < EPSILON {
            return Err(GeometryError::DegenerateInput(
                "cannot normalize a zero vector".to_string(),
            ));
        }
        Ok(Vector3 {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        })
    }

    /// Tests whether every component is within `epsilon` of zero
    ///
    /// This is the single degeneracy predicate the relation analyzer
    /// branches on; call it with [`crate::constants::EPSILON`] for
    /// consistency with the rest of the crate.
    pub fn is_zero(&self, epsilon: f64) -> bool {
        self.x.abs() < epsilon && self.y.abs() < epsilon && self.z.abs() < epsilon
    }

    /// Calculates the dot product with another vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::vectors::Vector3;
    ///
    /// let x_axis = Vector3::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.dot(&y_axis), 0.0); // Perpendicular
    /// ```
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// The result is perpendicular to both inputs with magnitude equal to
    /// the area of the parallelogram they span; it is the zero vector
    /// exactly when the inputs are parallel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spatial3d::vectors::Vector3;
    ///
    /// let a = Vector3::new(2.0, 1.0, -1.0);
    /// let b = Vector3::new(1.0, -1.0, 2.0);
    /// let c = a.cross(&b);
    /// assert_eq!((c.x, c.y, c.z), (1.0, -5.0, -3.0));
    /// ```
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Interprets this vector as the position of a point
    pub fn to_point(&self) -> Point3 {
        Point3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Converts to nalgebra `Vector3<f64>` for linear algebra operations
    pub fn to_na(&self) -> NaVector3<f64> {
        NaVector3::new(self.x, self.y, self.z)
    }

    /// Creates from a nalgebra `Vector3<f64>`
    pub fn from_na(vec: NaVector3<f64>) -> Self {
        Vector3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            fmt_number(self.x),
            fmt_number(self.y),
            fmt_number(self.z)
        )
    }
}

impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        Vector3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

/// A location in 3D space
///
/// Distinct from [`Vector3`] so locations and displacements keep their
/// separate semantics; convert explicitly when arithmetic needs to mix them.
///
/// # Examples
///
/// ```rust
/// use spatial3d::vectors::{Point3, Vector3};
///
/// let a = Point3::new(1.0, 1.0, 0.0);
/// let b = Point3::new(2.0, 0.0, 2.0);
///
/// // Displacement from a to b
/// let d = a.vector_to(&b);
/// assert_eq!(d, Vector3::new(1.0, -1.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    /// X-coordinate
    pub x: f64,
    /// Y-coordinate
    pub y: f64,
    /// Z-coordinate
    pub z: f64,
}

impl Point3 {
    /// Creates a new point from its coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    /// The origin
    pub fn origin() -> Self {
        Point3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// The position vector from the origin to this point
    pub fn to_vector(&self) -> Vector3 {
        Vector3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// The point at the tip of a position vector
    pub fn from_vector(v: Vector3) -> Self {
        Point3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    /// The displacement vector from this point to `other`
    pub fn vector_to(&self, other: &Point3) -> Vector3 {
        Vector3 {
            x: other.x - self.x,
            y: other.y - self.y,
            z: other.z - self.z,
        }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).magnitude()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            fmt_number(self.x),
            fmt_number(self.y),
            fmt_number(self.z)
        )
    }
}

/// Translating a point by a displacement yields a point
impl std::ops::Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, v: Vector3) -> Point3 {
        Point3 {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

/// The scalar triple product `a · (b × c)`
///
/// Its magnitude is the volume of the parallelepiped spanned by the three
/// vectors; it is zero exactly when they are coplanar.
///
/// # Examples
///
/// ```rust
/// use spatial3d::vectors::{scalar_triple_product, Vector3};
///
/// let a = Vector3::new(1.0, 0.0, 0.0);
/// let b = Vector3::new(0.0, 1.0, 0.0);
/// let c = Vector3::new(0.0, 0.0, 1.0);
/// assert_eq!(scalar_triple_product(&a, &b, &c), 1.0);
/// ```
pub fn scalar_triple_product(a: &Vector3, b: &Vector3, c: &Vector3) -> f64 {
    a.dot(&b.cross(c))
}
