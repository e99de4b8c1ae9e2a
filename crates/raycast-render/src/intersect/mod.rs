//! Ray-object intersection algorithms.
//!
//! Each object kind has a dedicated closed-form intersector returning the
//! nearest strictly-positive, finite ray parameter, or `None`.

mod plane;
mod sphere;

pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use raycast_scene::RenderableObject;

use crate::Ray;

/// Intersect a ray with any renderable object.
///
/// This dispatches to the appropriate intersector based on object kind.
pub fn intersect(ray: &Ray, object: &RenderableObject) -> Option<f64> {
    match object {
        RenderableObject::Sphere(sphere) => intersect_sphere(ray, sphere),
        RenderableObject::Plane(plane) => intersect_plane(ray, plane),
    }
}

/// A usable hit lies strictly in front of the origin.
#[inline]
pub(crate) fn is_valid_hit(t: f64) -> bool {
    t.is_finite() && t > 0.0
}
