//! Ray/sphere intersection and the nearest-hit scene query.

use orb_core::{Scene, Sphere};
use orb_math::{DVec3, Interval};

/// Minimum ray distance for secondary rays.
///
/// Shadow and reflection rays start at this offset so floating-point
/// rounding at the hit point cannot make a surface occlude itself.
pub const SELF_INTERSECTION_EPSILON: f64 = 0.001;

/// Result of a nearest-hit query.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// The sphere that was hit
    pub sphere: &'a Sphere,
    /// Ray parameter of the hit
    pub t: f64,
}

/// Solve the quadratic `|origin + t*direction - center|^2 = radius^2`.
///
/// Returns the two roots, unordered. A non-positive discriminant (no
/// crossing, or a tangent graze) reports a miss as two infinities.
pub fn intersect_ray(origin: DVec3, direction: DVec3, sphere: &Sphere) -> (f64, f64) {
    let oc = origin - sphere.center;

    let k1 = direction.dot(direction);
    let k2 = 2.0 * oc.dot(direction);
    let k3 = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = k2 * k2 - 4.0 * k1 * k3;
    if discriminant <= 0.0 {
        return (f64::INFINITY, f64::INFINITY);
    }

    let sqrtd = discriminant.sqrt();
    ((-k2 + sqrtd) / (2.0 * k1), (-k2 - sqrtd) / (2.0 * k1))
}

/// Find the closest sphere along the ray within `bounds`.
///
/// Linear scan over the scene. A root replaces the current best only when
/// it lies strictly inside the bounds and is strictly smaller than the
/// best t so far, so an exact tie keeps the earlier sphere in scan order.
pub fn closest_intersection<'a>(
    origin: DVec3,
    direction: DVec3,
    bounds: Interval,
    scene: &'a Scene,
) -> Option<Hit<'a>> {
    let mut closest_t = f64::INFINITY;
    let mut closest_sphere = None;

    for sphere in scene.spheres() {
        let (t1, t2) = intersect_ray(origin, direction, sphere);
        if t1 < closest_t && bounds.surrounds(t1) {
            closest_t = t1;
            closest_sphere = Some(sphere);
        }
        if t2 < closest_t && bounds.surrounds(t2) {
            closest_t = t2;
            closest_sphere = Some(sphere);
        }
    }

    closest_sphere.map(|sphere| Hit {
        sphere,
        t: closest_t,
    })
}
