//! Numeric formatting for equation strings
//!
//! Line and plane equations are rendered for human consumption, so
//! coefficients that are whole numbers print without a fractional part
//! (`"2"` rather than `"2.000"`), and everything else prints with three
//! decimals for consistent precision.

use crate::constants::EPSILON;

/// Formats a coefficient for use inside an equation string
///
/// # Examples
///
/// ```rust
/// use spatial3d::format::fmt_number;
///
/// assert_eq!(fmt_number(2.0), "2");
/// assert_eq!(fmt_number(-6.0), "-6");
/// assert_eq!(fmt_number(0.5), "0.500");
/// ```
pub fn fmt_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < EPSILON {
        if rounded == 0.0 {
            // Avoids "-0" for tiny negative values
            "0".to_string()
        } else {
            format!("{:.0}", rounded)
        }
    } else {
        format!("{:.3}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_print_as_integers() {
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(1.0), "1");
        assert_eq!(fmt_number(-3.0), "-3");
        assert_eq!(fmt_number(100.0), "100");
    }

    #[test]
    fn test_fractional_numbers_keep_three_decimals() {
        assert_eq!(fmt_number(0.25), "0.250");
        assert_eq!(fmt_number(-1.5), "-1.500");
        assert_eq!(fmt_number(1.0 / 3.0), "0.333");
    }

    #[test]
    fn test_large_whole_values_render_exactly() {
        // Magnitudes beyond the i64 range must not saturate
        assert_eq!(fmt_number(1e20), "100000000000000000000");
        assert_eq!(fmt_number(-1e20), "-100000000000000000000");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(-1e-12), "0");
    }

    #[test]
    fn test_near_integer_rounds() {
        // Values within tolerance of a whole number render as that number
        assert_eq!(fmt_number(2.0 + 1e-12), "2");
        assert_eq!(fmt_number(3.0 - 1e-12), "3");
    }
}
