//! Ray-sphere intersection (quadratic equation).

use raycast_math::{dot, solve_quadratic, subtract};
use raycast_scene::Sphere;

use super::is_valid_hit;
use crate::Ray;

/// Intersect a ray with a sphere.
///
/// Returns the smallest strictly-positive root of `|o + t·d - c|² = r²`,
/// or `None` if the ray misses, the sphere lies entirely behind the origin,
/// or the direction is zero.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let oc = subtract(&ray.origin, &sphere.center);
    let d = &ray.direction;

    let a = dot(d, d);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * dot(d, &oc);
    let c = dot(&oc, &oc) - sphere.radius * sphere.radius;

    let (t0, t1) = solve_quadratic(a, b, c)?;

    // a > 0, so t0 <= t1
    [t0, t1].into_iter().find(|&t| is_valid_hit(t))
}
