//! Ray-plane intersection (closed-form).

use raycast_math::dot;
use raycast_scene::Plane;

use super::is_valid_hit;
use crate::Ray;

/// Intersect a ray with a plane `n · P + offset = 0`.
///
/// Returns `None` if the ray is parallel to the plane (the division yields
/// ±∞ or NaN) or the plane lies at or behind the ray origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<f64> {
    let denom = dot(&plane.normal, &ray.direction);
    let t = -(dot(&plane.normal, &ray.origin) + plane.offset) / denom;

    is_valid_hit(t).then_some(t)
}
