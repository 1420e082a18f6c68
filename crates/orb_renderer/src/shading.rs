//! Local Phong illumination with hard shadows.

use orb_core::{Light, Scene, Sphere};
use orb_math::{DVec3, Interval};

use crate::intersect::{closest_intersection, SELF_INTERSECTION_EPSILON};

/// Reflect vector `a` about `b`: `2 * (a . b) * b - a`.
#[inline]
pub fn reflect(a: DVec3, b: DVec3) -> DVec3 {
    2.0 * a.dot(b) * b - a
}

/// Accumulate the scalar light intensity at a hit point.
///
/// `normal` must be unit length and `view` points back toward the ray
/// origin. The result multiplies componentwise into the surface's base
/// color later; it is not itself a color, and near strong highlights it
/// can exceed 1.
pub fn compute_lighting(
    point: DVec3,
    normal: DVec3,
    view: DVec3,
    sphere: &Sphere,
    scene: &Scene,
) -> f64 {
    let mut intensity = 0.0;
    let normal_len = normal.length();
    let view_len = view.length();

    for light in scene.lights() {
        // For a point light, occluders only count strictly between the
        // surface and the light itself; a directional light can be
        // blocked from any distance.
        let (light_intensity, l, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient * sphere.k_a;
                continue;
            }
            Light::Point {
                intensity: emitted,
                position,
            } => (emitted, position - point, 1.0),
            Light::Directional {
                intensity: emitted,
                direction,
            } => (emitted, direction, f64::INFINITY),
        };

        // Hard shadow: any occluder silences both the diffuse and the
        // specular term of this light.
        let shadow_bounds = Interval::new(SELF_INTERSECTION_EPSILON, t_max);
        if closest_intersection(point, l, shadow_bounds, scene).is_some() {
            continue;
        }

        let n_dot_l = normal.dot(l);
        if n_dot_l > 0.0 {
            intensity += light_intensity * sphere.k_d * n_dot_l / (normal_len * l.length());
        }

        if sphere.has_highlight() {
            let r = reflect(l, normal);
            let r_dot_v = r.dot(view);
            if r_dot_v > 0.0 {
                intensity += light_intensity
                    * sphere.k_s
                    * (r_dot_v / (r.length() * view_len)).powf(sphere.shininess);
            }
        }
    }

    intensity
}
