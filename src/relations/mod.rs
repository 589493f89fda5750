//! # Relation Analyzer
//!
//! The algorithms that classify and quantify relationships between lines,
//! planes, and points: angles, perpendicular distances with their feet,
//! line–plane and plane–plane intersection, and the line–line
//! parallel / collinear / intersecting / skew classification.
//!
//! ## Degeneracy handling
//!
//! Every branch point goes through the same tolerance
//! ([`crate::constants::EPSILON`]) and the same predicates
//! ([`Vector3::is_zero`], near-zero determinant checks), so adjacent
//! classifiers cannot disagree about one configuration ("parallel" from one
//! angle, "nearly skew" from another). Angle computations clamp the
//! cosine/sine argument to `[-1, 1]` before `acos`/`asin` to absorb
//! floating point drift.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{EPSILON, RAD2DEG};
use crate::lines::LineEquation;
use crate::planes::{PlaneCoefficients, PlaneEquation};
use crate::vectors::{scalar_triple_product, Point3, Vector3};
use crate::{GeometryError, Result};

/// An angle reported in both radians and degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleBetween {
    /// Angle in radians
    pub radians: f64,
    /// Angle in degrees
    pub degrees: f64,
}

impl AngleBetween {
    fn from_radians(radians: f64) -> Self {
        AngleBetween {
            radians,
            degrees: radians * RAD2DEG,
        }
    }
}

fn require_nonzero(v: &Vector3, what: &str) -> Result<()> {
    if v.is_zero(EPSILON) {
        return Err(GeometryError::DegenerateInput(format!(
            "{} cannot be the zero vector",
            what
        )));
    }
    Ok(())
}

fn plane_normal(plane: &PlaneEquation) -> Result<Vector3> {
    plane.normal.ok_or_else(|| {
        GeometryError::DegenerateInput("plane definition lacks a normal vector".to_string())
    })
}

/// The angle between two lines given their direction vectors
///
/// `θ = acos(d1 · d2 / (|d1| |d2|))`
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when either direction is
/// the zero vector.
///
/// # Examples
///
/// ```rust
/// use spatial3d::relations::angle_between_lines;
/// use spatial3d::Vector3;
///
/// let v = Vector3::new(1.0, -1.0, 2.0);
/// let angle = angle_between_lines(&v, &v).unwrap();
/// assert!(angle.radians.abs() < 1e-12);
/// ```
pub fn angle_between_lines(d1: &Vector3, d2: &Vector3) -> Result<AngleBetween> {
    require_nonzero(d1, "line direction")?;
    require_nonzero(d2, "line direction")?;
    let cos_theta = (d1.dot(d2) / (d1.magnitude() * d2.magnitude())).clamp(-1.0, 1.0);
    Ok(AngleBetween::from_radians(cos_theta.acos()))
}

/// The angle between two planes: the angle between their normals
pub fn angle_between_planes(plane1: &PlaneEquation, plane2: &PlaneEquation) -> Result<AngleBetween> {
    let n1 = plane_normal(plane1)?;
    let n2 = plane_normal(plane2)?;
    angle_between_lines(&n1, &n2)
}

/// The angle between a line and a plane
///
/// `α = asin(|d · n| / (|d| |n|))`, the complement of the line-to-normal
/// angle. The sign of the line direction does not affect the result.
pub fn angle_line_plane(line: &LineEquation, plane: &PlaneEquation) -> Result<AngleBetween> {
    let d = line.direction;
    let n = plane_normal(plane)?;
    require_nonzero(&d, "line direction")?;
    require_nonzero(&n, "plane normal")?;
    let sin_alpha = (d.dot(&n).abs() / (d.magnitude() * n.magnitude())).clamp(-1.0, 1.0);
    Ok(AngleBetween::from_radians(sin_alpha.asin()))
}

/// Perpendicular distance from a point to a line, with the foot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLineDistance {
    /// The query point
    pub point: Point3,
    /// Perpendicular distance from the point to the line
    pub distance: f64,
    /// The closest point on the line
    pub foot: Point3,
}

/// Distance from `point` to the line through `line_point` with `direction`
///
/// `distance = |(P - A) × d| / |d|`; the foot is `A + t·d` with
/// `t = (P - A) · d / |d|²`.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when the direction is the
/// zero vector.
pub fn distance_point_line(
    point: Point3,
    line_point: Point3,
    direction: Vector3,
) -> Result<PointLineDistance> {
    require_nonzero(&direction, "line direction")?;
    let ap = line_point.vector_to(&point);
    let distance = ap.cross(&direction).magnitude() / direction.magnitude();
    let t = ap.dot(&direction) / direction.dot(&direction);
    Ok(PointLineDistance {
        point,
        distance,
        foot: line_point + direction * t,
    })
}

/// Perpendicular distance from a point to a plane, with the foot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPlaneDistance {
    /// The query point
    pub point: Point3,
    /// Absolute perpendicular distance
    pub distance: f64,
    /// Signed distance: positive on the side the normal points toward
    pub signed_distance: f64,
    /// The closest point on the plane
    pub foot: Point3,
}

/// Distance from `point` to the plane `Ax + By + Cz + D = 0`
///
/// The signed distance is `(A·Px + B·Py + C·Pz + D) / |(A, B, C)|`; the
/// foot is `P - signed · n̂`.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when `(A, B, C)` is the
/// zero vector.
pub fn distance_point_plane(
    point: Point3,
    coeffs: &PlaneCoefficients,
) -> Result<PointPlaneDistance> {
    let normal = coeffs.normal();
    require_nonzero(&normal, "plane normal (A, B, C)")?;
    let signed_distance = coeffs.evaluate(&point) / normal.magnitude();
    let unit = normal.normalize()?;
    Ok(PointPlaneDistance {
        point,
        distance: signed_distance.abs(),
        signed_distance,
        foot: point + unit * -signed_distance,
    })
}

/// How a line relates to a plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LinePlaneRelation {
    /// Parallel and off the plane, at the given distance
    ParallelDistinct {
        /// Distance between the line and the plane
        distance: f64,
    },
    /// Every point of the line satisfies the plane equation
    LiesInPlane,
    /// The line crosses the plane at one point
    Intersects {
        /// The intersection point
        point: Point3,
    },
}

/// Classifies a line against a plane
///
/// When `|d · n| < ε` the line is parallel to the plane; evaluating the
/// plane at the line's reference point then separates lies-in-plane from
/// parallel-distinct. Otherwise the crossing parameter is
/// `λ = -(n · A + D) / (n · d)` and the intersection is `A + λd`.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when the line direction or
/// the plane normal is the zero vector.
pub fn line_plane_relationship(
    line: &LineEquation,
    coeffs: &PlaneCoefficients,
) -> Result<LinePlaneRelation> {
    let d = line.direction;
    let n = coeffs.normal();
    require_nonzero(&d, "line direction")?;
    require_nonzero(&n, "plane normal (A, B, C)")?;

    let n_dot_d = n.dot(&d);
    if n_dot_d.abs() < EPSILON {
        // Direction perpendicular to the normal: line parallel to the plane
        let value_at_point = coeffs.evaluate(&line.point);
        debug!(
            "line parallel to plane: |n·d| = {:e}, plane value at line point = {:e}",
            n_dot_d.abs(),
            value_at_point
        );
        if value_at_point.abs() < EPSILON {
            Ok(LinePlaneRelation::LiesInPlane)
        } else {
            Ok(LinePlaneRelation::ParallelDistinct {
                distance: value_at_point.abs() / n.magnitude(),
            })
        }
    } else {
        let lambda = -coeffs.evaluate(&line.point) / n_dot_d;
        Ok(LinePlaneRelation::Intersects {
            point: line.point + d * lambda,
        })
    }
}

/// Intersection summary for a line and a plane
///
/// A line lying in the plane intersects it at infinitely many points, so
/// `intersects` is true with no single `point`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePlaneIntersection {
    /// Whether the line meets the plane at all
    pub intersects: bool,
    /// The unique intersection point, when there is one
    pub point: Option<Point3>,
    /// The underlying classification
    pub relation: LinePlaneRelation,
}

/// Reports whether and where a line meets a plane
pub fn intersection_line_plane(
    line: &LineEquation,
    coeffs: &PlaneCoefficients,
) -> Result<LinePlaneIntersection> {
    let relation = line_plane_relationship(line, coeffs)?;
    let (intersects, point) = match relation {
        LinePlaneRelation::Intersects { point } => (true, Some(point)),
        LinePlaneRelation::LiesInPlane => (true, None),
        LinePlaneRelation::ParallelDistinct { .. } => (false, None),
    };
    Ok(LinePlaneIntersection {
        intersects,
        point,
        relation,
    })
}

/// How two planes relate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanesRelation {
    /// The same plane, up to a scalar multiple of the coefficients
    Coincident,
    /// Parallel with a gap between them
    ParallelDistinct,
    /// The planes meet in a line
    IntersectInLine,
}

/// Result of intersecting two planes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanesIntersection {
    /// The classification
    pub relation: PlanesRelation,
    /// The line of intersection, when the planes are not parallel
    pub line: Option<LineEquation>,
}

/// Intersects two planes given by their cartesian coefficients
///
/// The candidate line direction is `n1 × n2`. When it vanishes the planes
/// are parallel; substituting a point of plane 1 into plane 2 separates
/// coincident from parallel-distinct. Otherwise a point on the line comes
/// from the first non-singular 2×2 minor, fixing z, then x, then y.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when either normal is the
/// zero vector. [`GeometryError::NumericInstability`] guards the minor
/// solve, which cannot fire once `n1 × n2` is known non-zero.
pub fn intersection_two_planes(
    c1: &PlaneCoefficients,
    c2: &PlaneCoefficients,
) -> Result<PlanesIntersection> {
    let n1 = c1.normal();
    let n2 = c2.normal();
    require_nonzero(&n1, "plane normal (A, B, C)")?;
    require_nonzero(&n2, "plane normal (A, B, C)")?;

    let direction = n1.cross(&n2);

    if direction.is_zero(EPSILON) {
        // Parallel; a sample point of plane 1 decides coincidence
        let sample = c1.point_on_plane()?;
        let value_on_plane2 = c2.evaluate(&sample);
        debug!(
            "planes parallel: sample point {} gives plane-2 value {:e}",
            sample, value_on_plane2
        );
        if value_on_plane2.abs() < EPSILON {
            return Ok(PlanesIntersection {
                relation: PlanesRelation::Coincident,
                line: None,
            });
        }
        return Ok(PlanesIntersection {
            relation: PlanesRelation::ParallelDistinct,
            line: None,
        });
    }

    // A point on the intersection line from the first non-singular minor.
    // Fixing z, then x, then y.
    let det_xy = c1.a * c2.b - c2.a * c1.b;
    let det_yz = c1.b * c2.c - c2.b * c1.c;
    let det_zx = c1.c * c2.a - c2.c * c1.a;

    let point = if det_xy.abs() > EPSILON {
        let x = (-c1.d * c2.b + c2.d * c1.b) / det_xy;
        let y = (-c1.a * c2.d + c2.a * c1.d) / det_xy;
        Point3::new(x, y, 0.0)
    } else if det_yz.abs() > EPSILON {
        let y = (-c1.d * c2.c + c2.d * c1.c) / det_yz;
        let z = (-c1.b * c2.d + c2.b * c1.d) / det_yz;
        Point3::new(0.0, y, z)
    } else if det_zx.abs() > EPSILON {
        let z = (-c1.d * c2.a + c2.d * c1.a) / det_zx;
        let x = (-c1.c * c2.d + c2.c * c1.d) / det_zx;
        Point3::new(x, 0.0, z)
    } else {
        // All minors singular would mean parallel normals, handled above
        return Err(GeometryError::NumericInstability(
            "all 2x2 minors of the plane normals are singular".to_string(),
        ));
    };

    let line = LineEquation::vector_form(point, direction)?;
    Ok(PlanesIntersection {
        relation: PlanesRelation::IntersectInLine,
        line: Some(line),
    })
}

/// How two lines relate in space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinesRelation {
    /// The same line
    Collinear,
    /// Parallel directions, distinct lines
    ParallelDistinct,
    /// The lines meet at a point
    Intersecting,
    /// Neither parallel nor intersecting
    Skew,
}

/// Classification of two lines with the shortest distance between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinesRelationship {
    /// The classification
    pub relation: LinesRelation,
    /// Shortest distance between the lines (zero when they meet)
    pub distance: f64,
    /// The meeting point, for intersecting lines
    pub intersection: Option<Point3>,
    /// The closest point pair (on line 1, on line 2), for skew lines
    pub closest_points: Option<(Point3, Point3)>,
}

/// Classifies two lines and computes the shortest distance between them
///
/// With `w = P2 - P1`:
///
/// - parallel directions (`d1 × d2 ≈ 0`): distance `|w × d1| / |d1|`,
///   collinear when that vanishes;
/// - otherwise distance `|w · (d1 × d2)| / |d1 × d2|`; zero means the lines
///   intersect, at parameter `t = ((w × d2) · (d1 × d2)) / |d1 × d2|²`
///   along line 1; a positive distance means skew, with the closest points
///   solved from the normal equations over `d1·d1, d2·d2, d1·d2, w·d1,
///   w·d2`.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when either direction is
/// the zero vector.
pub fn lines_relationship(
    p1: Point3,
    d1: Vector3,
    p2: Point3,
    d2: Vector3,
) -> Result<LinesRelationship> {
    require_nonzero(&d1, "line direction")?;
    require_nonzero(&d2, "line direction")?;

    let w = p1.vector_to(&p2);
    let cross = d1.cross(&d2);

    if cross.is_zero(EPSILON) {
        let distance = w.cross(&d1).magnitude() / d1.magnitude();
        debug!("parallel line directions, separation {:e}", distance);
        let relation = if distance < EPSILON {
            LinesRelation::Collinear
        } else {
            LinesRelation::ParallelDistinct
        };
        return Ok(LinesRelationship {
            relation,
            distance,
            intersection: None,
            closest_points: None,
        });
    }

    let cross_mag_sq = cross.dot(&cross);
    let distance = w.dot(&cross).abs() / cross_mag_sq.sqrt();

    if distance < EPSILON {
        let t = w.cross(&d2).dot(&cross) / cross_mag_sq;
        return Ok(LinesRelationship {
            relation: LinesRelation::Intersecting,
            distance,
            intersection: Some(p1 + d1 * t),
            closest_points: None,
        });
    }

    // Skew: normal equations for the closest parameter pair
    let d1d1 = d1.dot(&d1);
    let d2d2 = d2.dot(&d2);
    let d1d2 = d1.dot(&d2);
    let wd1 = w.dot(&d1);
    let wd2 = w.dot(&d2);

    let den = d1d1 * d2d2 - d1d2 * d1d2;
    if den.abs() < EPSILON {
        // Non-parallel directions guarantee a positive denominator
        return Err(GeometryError::NumericInstability(
            "normal-equations denominator vanished for non-parallel lines".to_string(),
        ));
    }
    let t = (wd1 * d2d2 - wd2 * d1d2) / den;
    let s = (wd1 * d1d2 - wd2 * d1d1) / den;

    Ok(LinesRelationship {
        relation: LinesRelation::Skew,
        distance,
        intersection: None,
        closest_points: Some((p1 + d1 * t, p2 + d2 * s)),
    })
}

/// Coplanarity verdict for two lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoplanarityCheck {
    /// True when the lines lie in a common plane
    pub coplanar: bool,
    /// The scalar triple product `[P1P2, d1, d2]`
    pub triple_product: f64,
    /// A plane containing both lines, when one exists
    pub containing_plane: Option<PlaneEquation>,
    /// Human-readable explanation of the verdict
    pub reason: String,
}

/// Checks whether two lines are coplanar and reports a containing plane
///
/// The lines are coplanar exactly when the scalar triple product
/// `[P2 - P1, d1, d2]` vanishes. Intersecting lines lie in the plane with
/// normal `d1 × d2`; parallel-distinct lines in the plane with normal
/// `(P2 - P1) × d1`; collinear lines lie in infinitely many planes, so an
/// arbitrary one perpendicular to the direction is reported.
///
/// # Errors
///
/// Fails with [`GeometryError::DegenerateInput`] when either line has a
/// zero direction.
pub fn coplanar_lines(line1: &LineEquation, line2: &LineEquation) -> Result<CoplanarityCheck> {
    let d1 = line1.direction;
    let d2 = line2.direction;
    require_nonzero(&d1, "line direction")?;
    require_nonzero(&d2, "line direction")?;

    let w = line1.point.vector_to(&line2.point);
    let triple_product = scalar_triple_product(&w, &d1, &d2);

    if triple_product.abs() >= EPSILON {
        return Ok(CoplanarityCheck {
            coplanar: false,
            triple_product,
            containing_plane: None,
            reason: "lines are skew (not coplanar)".to_string(),
        });
    }

    let d1xd2 = d1.cross(&d2);
    let (containing_plane, reason) = if d1xd2.is_zero(EPSILON) {
        let wxd1 = w.cross(&d1);
        if wxd1.is_zero(EPSILON) {
            // Same line: pick any normal perpendicular to the direction
            let normal = if d1.x.abs() > EPSILON || d1.y.abs() > EPSILON {
                Vector3::new(-d1.y, d1.x, 0.0)
            } else {
                Vector3::new(0.0, -d1.z, d1.y)
            };
            (
                Some(PlaneEquation::from_normal_and_point(normal, line1.point)?),
                "lines are collinear (same line)".to_string(),
            )
        } else {
            (
                Some(PlaneEquation::from_normal_and_point(wxd1, line1.point)?),
                "lines are parallel and coplanar".to_string(),
            )
        }
    } else {
        (
            Some(PlaneEquation::from_normal_and_point(d1xd2, line1.point)?),
            "lines are intersecting and coplanar".to_string(),
        )
    };

    Ok(CoplanarityCheck {
        coplanar: true,
        triple_product,
        containing_plane,
        reason,
    })
}
