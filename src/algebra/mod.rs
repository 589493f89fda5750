//! # Vector Algebra Operations
//!
//! Annotated versions of the primitive vector operations: each function
//! returns a small immutable record carrying the numeric answer together
//! with the derived quantities a caller usually wants next (the angle
//! implied by a dot product, the magnitude of a cross product, the vector
//! form of a projection).
//!
//! The records are plain structs with named fields; optional outcomes are
//! `Option` so the absent case must be handled explicitly.

use serde::{Deserialize, Serialize};

use crate::constants::{EPSILON, RAD2DEG};
use crate::vectors::{scalar_triple_product, Point3, Vector3};
use crate::{GeometryError, Result};

/// Dot product of two vectors with the angle between them
///
/// The angle fields are `None` when either vector is zero, in which case no
/// angle is defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotProduct {
    /// First operand
    pub v1: Vector3,
    /// Second operand
    pub v2: Vector3,
    /// The scalar product `v1 · v2`
    pub value: f64,
    /// Angle between the vectors in radians, if both are non-zero
    pub angle_radians: Option<f64>,
    /// Angle between the vectors in degrees, if both are non-zero
    pub angle_degrees: Option<f64>,
}

/// Computes the dot product and the inter-vector angle
///
/// The cosine is clamped to `[-1, 1]` before `acos` to absorb floating
/// point drift.
///
/// # Examples
///
/// ```rust
/// use spatial3d::algebra::dot_product;
/// use spatial3d::Vector3;
///
/// let r = dot_product(&Vector3::new(1.0, -1.0, 2.0), &Vector3::new(2.0, 3.0, -1.0));
/// assert_eq!(r.value, -3.0);
/// assert!(r.angle_radians.is_some());
/// ```
pub fn dot_product(v1: &Vector3, v2: &Vector3) -> DotProduct {
    let value = v1.dot(v2);
    let mag1 = v1.magnitude();
    let mag2 = v2.magnitude();

    let (angle_radians, angle_degrees) = if mag1 > EPSILON && mag2 > EPSILON {
        let cos_theta = (value / (mag1 * mag2)).clamp(-1.0, 1.0);
        let rad = cos_theta.acos();
        (Some(rad), Some(rad * RAD2DEG))
    } else {
        (None, None)
    };

    DotProduct {
        v1: *v1,
        v2: *v2,
        value,
        angle_radians,
        angle_degrees,
    }
}

/// Cross product of two vectors with its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossProduct {
    /// First operand
    pub v1: Vector3,
    /// Second operand
    pub v2: Vector3,
    /// The vector product `v1 × v2`
    pub value: Vector3,
    /// Magnitude of the vector product
    pub magnitude: f64,
}

/// Computes the cross product and its magnitude
pub fn cross_product(v1: &Vector3, v2: &Vector3) -> CrossProduct {
    let value = v1.cross(v2);
    CrossProduct {
        v1: *v1,
        v2: *v2,
        value,
        magnitude: value.magnitude(),
    }
}

/// Projection of one vector onto another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The vector being projected
    pub of: Vector3,
    /// The vector projected onto
    pub onto: Vector3,
    /// Scalar projection `of · onto / |onto|`
    pub scalar: f64,
    /// Vector projection along `onto`
    pub vector: Vector3,
}

/// Projects `of` onto `onto`
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when `onto` is the zero
/// vector.
pub fn projection(of: &Vector3, onto: &Vector3) -> Result<Projection> {
    let mag = onto.magnitude();
    if mag < EPSILON {
        return Err(GeometryError::DegenerateInput(
            "cannot project onto a zero vector".to_string(),
        ));
    }
    let scalar = of.dot(onto) / mag;
    let unit = onto.normalize()?;
    Ok(Projection {
        of: *of,
        onto: *onto,
        scalar,
        vector: unit * scalar,
    })
}

/// Scalar triple product `a · (b × c)` with the coplanarity verdict
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarTriple {
    /// The signed volume of the spanned parallelepiped
    pub value: f64,
    /// True when the three vectors are coplanar (value within tolerance of zero)
    pub coplanar: bool,
}

/// Computes the scalar triple product and whether the vectors are coplanar
pub fn scalar_triple(a: &Vector3, b: &Vector3, c: &Vector3) -> ScalarTriple {
    let value = scalar_triple_product(a, b, c);
    ScalarTriple {
        value,
        coplanar: value.abs() < EPSILON,
    }
}

/// Area of the triangle with two given adjacent sides
pub fn triangle_area_vectors(side1: &Vector3, side2: &Vector3) -> f64 {
    0.5 * side1.cross(side2).magnitude()
}

/// Area of the triangle with the three given vertices
pub fn triangle_area_points(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    triangle_area_vectors(&p1.vector_to(p2), &p1.vector_to(p3))
}

/// How a dividing point splits the segment in the section formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Division {
    /// The point lies between the endpoints
    Internal,
    /// The point lies on the extension of the segment
    External,
}

/// Result of the section formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionPoint {
    /// The dividing point
    pub point: Point3,
    /// Which kind of division produced it
    pub division: Division,
}

/// The point dividing `p1p2` in the ratio `m : n`
///
/// # Errors
///
/// Internal division fails when `m + n ≈ 0`; external division fails when
/// `m ≈ n`. Both denominators would otherwise vanish.
pub fn section_formula(
    p1: &Point3,
    p2: &Point3,
    m: f64,
    n: f64,
    division: Division,
) -> Result<SectionPoint> {
    let point = match division {
        Division::Internal => {
            if (m + n).abs() < EPSILON {
                return Err(GeometryError::DegenerateInput(
                    "sum of ratios m + n cannot be zero for internal division".to_string(),
                ));
            }
            Point3::new(
                (n * p1.x + m * p2.x) / (m + n),
                (n * p1.y + m * p2.y) / (m + n),
                (n * p1.z + m * p2.z) / (m + n),
            )
        }
        Division::External => {
            if (m - n).abs() < EPSILON {
                return Err(GeometryError::DegenerateInput(
                    "ratios m and n cannot be equal for external division".to_string(),
                ));
            }
            Point3::new(
                (m * p2.x - n * p1.x) / (m - n),
                (m * p2.y - n * p1.y) / (m - n),
                (m * p2.z - n * p1.z) / (m - n),
            )
        }
    };
    Ok(SectionPoint { point, division })
}

/// Collinearity verdict for a list of points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collinearity {
    /// True when all points lie on one line
    pub collinear: bool,
    /// Human-readable explanation of the verdict
    pub reason: String,
}

/// Checks whether a set of points all lie on one line
///
/// Fewer than three points are trivially collinear. Otherwise every vector
/// from the first point must be parallel to the first non-degenerate
/// reference vector; coincident points are skipped.
pub fn collinear_points(points: &[Point3]) -> Collinearity {
    if points.len() < 3 {
        return Collinearity {
            collinear: true,
            reason: "fewer than three points are trivially collinear".to_string(),
        };
    }

    let p0 = &points[0];

    // First non-zero vector out of p0 anchors the direction
    let reference = points[1..]
        .iter()
        .map(|p| p0.vector_to(p))
        .find(|v| !v.is_zero(EPSILON));

    let reference = match reference {
        Some(v) => v,
        None => {
            return Collinearity {
                collinear: true,
                reason: "all points are coincident".to_string(),
            }
        }
    };

    for (i, p) in points.iter().enumerate().skip(1) {
        let v = p0.vector_to(p);
        if v.is_zero(EPSILON) {
            continue;
        }
        if !reference.cross(&v).is_zero(EPSILON) {
            return Collinearity {
                collinear: false,
                reason: format!(
                    "vector from point 0 to point {} is not parallel to the reference direction",
                    i
                ),
            };
        }
    }

    Collinearity {
        collinear: true,
        reason: "all vectors from the first point are parallel".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_dot_product_with_angle() {
        let r = dot_product(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(r.value, 0.0);
        assert_relative_eq!(r.angle_radians.unwrap(), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(r.angle_degrees.unwrap(), 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_dot_product_zero_vector_has_no_angle() {
        let r = dot_product(&Vector3::zero(), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(r.value, 0.0);
        assert!(r.angle_radians.is_none());
        assert!(r.angle_degrees.is_none());
    }

    #[test]
    fn test_dot_product_clamps_cosine() {
        // Parallel unit-ish vectors whose cosine can drift just above 1
        let v = Vector3::new(0.1, 0.2, 0.3);
        let r = dot_product(&v, &(v * 3.0));
        assert_relative_eq!(r.angle_radians.unwrap(), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_cross_product_record() {
        let r = cross_product(&Vector3::new(2.0, 1.0, -1.0), &Vector3::new(1.0, -1.0, 2.0));
        assert_eq!(r.value, Vector3::new(1.0, -5.0, -3.0));
        assert_relative_eq!(r.magnitude, 35.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_projection() {
        let r = projection(&Vector3::new(3.0, 4.0, 0.0), &Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(r.scalar, 3.0, epsilon = 1e-12);
        assert_eq!(r.vector, Vector3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_projection_onto_zero_fails() {
        assert!(projection(&Vector3::new(1.0, 2.0, 3.0), &Vector3::zero()).is_err());
    }

    #[test]
    fn test_scalar_triple_coplanarity() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let in_plane = Vector3::new(3.0, -2.0, 0.0);
        assert!(scalar_triple(&a, &b, &in_plane).coplanar);

        let out_of_plane = Vector3::new(0.0, 0.0, 1.0);
        let r = scalar_triple(&a, &b, &out_of_plane);
        assert!(!r.coplanar);
        assert_eq!(r.value, 1.0);
    }

    #[test]
    fn test_triangle_area() {
        // Right triangle with legs 3 and 4
        let area = triangle_area_vectors(&Vector3::new(3.0, 0.0, 0.0), &Vector3::new(0.0, 4.0, 0.0));
        assert_relative_eq!(area, 6.0, epsilon = 1e-12);

        let area = triangle_area_points(
            &Point3::origin(),
            &Point3::new(3.0, 0.0, 0.0),
            &Point3::new(0.0, 4.0, 0.0),
        );
        assert_relative_eq!(area, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_area() {
        let area = triangle_area_points(
            &Point3::origin(),
            &Point3::new(1.0, 1.0, 1.0),
            &Point3::new(2.0, 2.0, 2.0),
        );
        assert_relative_eq!(area, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_section_formula_internal() {
        // Midpoint
        let r = section_formula(
            &Point3::origin(),
            &Point3::new(2.0, 4.0, 6.0),
            1.0,
            1.0,
            Division::Internal,
        )
        .unwrap();
        assert_eq!(r.point, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(r.division, Division::Internal);
    }

    #[test]
    fn test_section_formula_external() {
        let r = section_formula(
            &Point3::origin(),
            &Point3::new(1.0, 0.0, 0.0),
            2.0,
            1.0,
            Division::External,
        )
        .unwrap();
        assert_eq!(r.point, Point3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_section_formula_degenerate_ratios() {
        let p1 = Point3::origin();
        let p2 = Point3::new(1.0, 0.0, 0.0);
        assert!(section_formula(&p1, &p2, 1.0, -1.0, Division::Internal).is_err());
        assert!(section_formula(&p1, &p2, 2.0, 2.0, Division::External).is_err());
    }

    #[test]
    fn test_collinear_points() {
        let on_line: Vec<Point3> = (0..5)
            .map(|i| Point3::new(i as f64, 2.0 * i as f64, -i as f64))
            .collect();
        assert!(collinear_points(&on_line).collinear);

        let mut off_line = on_line.clone();
        off_line.push(Point3::new(1.0, 0.0, 0.0));
        assert!(!collinear_points(&off_line).collinear);
    }

    #[test]
    fn test_collinear_points_trivial_and_coincident() {
        assert!(collinear_points(&[]).collinear);
        assert!(collinear_points(&[Point3::origin(), Point3::new(1.0, 1.0, 1.0)]).collinear);

        let same = vec![Point3::new(1.0, 2.0, 3.0); 4];
        let r = collinear_points(&same);
        assert!(r.collinear);
        assert_eq!(r.reason, "all points are coincident");
    }

    #[test]
    fn test_collinear_points_skips_leading_duplicates() {
        // First two coincident, rest on a line through them
        let pts = [
            Point3::origin(),
            Point3::origin(),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        assert!(collinear_points(&pts).collinear);
    }
}
