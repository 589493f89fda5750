//! # Reflection Calculator
//!
//! Images of a point under reflection across a line or a plane. Both are
//! built on the relation analyzer's foot-of-perpendicular: the image is the
//! foot carried the same distance again, `P' = 2F - P`.

use serde::{Deserialize, Serialize};

use crate::lines::LineEquation;
use crate::planes::PlaneCoefficients;
use crate::relations::{distance_point_line, distance_point_plane};
use crate::vectors::Point3;
use crate::Result;

/// The image of a point under a reflection, with the foot of perpendicular
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointImage {
    /// The original point
    pub point: Point3,
    /// The reflected point
    pub image: Point3,
    /// The foot of the perpendicular (the midpoint of point and image)
    pub foot: Point3,
}

fn reflect_through(point: Point3, foot: Point3) -> Point3 {
    Point3::from_vector(foot.to_vector() * 2.0 - point.to_vector())
}

/// The image of a point reflected across a line
///
/// # Errors
///
/// Fails with [`crate::GeometryError::DegenerateInput`] when the line
/// direction is the zero vector, as the underlying point-to-line
/// projection does.
///
/// # Examples
///
/// ```rust
/// use spatial3d::reflections::image_point_in_line;
/// use spatial3d::{LineEquation, Point3, Vector3};
///
/// // Reflect (1, 0, 0) across the y-axis
/// let y_axis = LineEquation::vector_form(Point3::origin(), Vector3::new(0.0, 1.0, 0.0)).unwrap();
/// let r = image_point_in_line(Point3::new(1.0, 0.0, 0.0), &y_axis).unwrap();
/// assert_eq!(r.image, Point3::new(-1.0, 0.0, 0.0));
/// assert_eq!(r.foot, Point3::origin());
/// ```
pub fn image_point_in_line(point: Point3, line: &LineEquation) -> Result<PointImage> {
    let projection = distance_point_line(point, line.point, line.direction)?;
    Ok(PointImage {
        point,
        image: reflect_through(point, projection.foot),
        foot: projection.foot,
    })
}

/// The image of a point reflected across a plane
///
/// # Errors
///
/// Fails with [`crate::GeometryError::DegenerateInput`] when the plane
/// normal `(A, B, C)` is the zero vector.
pub fn image_point_in_plane(point: Point3, coeffs: &PlaneCoefficients) -> Result<PointImage> {
    let projection = distance_point_plane(point, coeffs)?;
    Ok(PointImage {
        point,
        image: reflect_through(point, projection.foot),
        foot: projection.foot,
    })
}
