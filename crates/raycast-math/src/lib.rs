#![warn(missing_docs)]

//! Math types for the raycast renderer.
//!
//! Thin wrappers around nalgebra providing the 3-component vector used for
//! positions, directions and colors, plus the closed-form quadratic solver
//! the sphere intersector is built on.

use nalgebra::Vector3;

/// A vector (or point) in 3D space.
pub type Vec3 = Vector3<f64>;

/// An RGB color. Channels are nominally in `[0, 1]`.
pub type Color = Vector3<f64>;

/// Component-wise sum `a + b`.
#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

/// Component-wise difference `a - b`.
#[inline]
pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    a - b
}

/// Scale every component of `a` by `s`.
#[inline]
pub fn scale(a: &Vec3, s: f64) -> Vec3 {
    a * s
}

/// Dot product.
#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Cross product `a × b`.
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// Solve `a·t² + b·t + c = 0`.
///
/// Returns `None` when the discriminant is negative. Otherwise returns
/// `((-b - √disc) / 2a, (-b + √disc) / 2a)` in that order, which is
/// ascending only when `a > 0`.
///
/// `a` must be non-zero.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    debug_assert!(a != 0.0, "solve_quadratic called with a == 0");

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    Some(((-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(add(&a, &b), Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(subtract(&b, &a), Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(scale(&a, 2.0), Vec3::new(2.0, 4.0, 6.0));
        assert!((dot(&a, &b) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_cross_is_right_handed() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = cross(&x, &y);
        assert!((z - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-12);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.5, 4.0);
        let c = cross(&a, &b);
        assert!(dot(&c, &a).abs() < 1e-12);
        assert!(dot(&c, &b).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_two_roots() {
        // (t - 1)(t - 3) = t² - 4t + 3
        let (t0, t1) = solve_quadratic(1.0, -4.0, 3.0).unwrap();
        assert!((t0 - 1.0).abs() < 1e-12);
        assert!((t1 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_double_root() {
        let (t0, t1) = solve_quadratic(1.0, -2.0, 1.0).unwrap();
        assert!((t0 - 1.0).abs() < 1e-12);
        assert!((t1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_quadratic_negative_leading_coefficient() {
        // -(t - 1)(t - 3): the fixed order puts the larger root first
        let (t0, t1) = solve_quadratic(-1.0, 4.0, -3.0).unwrap();
        assert!((t0 - 3.0).abs() < 1e-12);
        assert!((t1 - 1.0).abs() < 1e-12);
    }
}
