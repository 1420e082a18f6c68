//! Recursive color computation: intersect, shade, reflect, blend.

use orb_core::Scene;
use orb_math::{DVec3, IVec3, Interval};

use crate::intersect::{closest_intersection, SELF_INTERSECTION_EPSILON};
use crate::shading::{compute_lighting, reflect};

/// Color returned when a ray escapes the scene.
const BACKGROUND: IVec3 = IVec3::new(255, 255, 255);

/// Scale an integer color, truncating each component toward zero.
#[inline]
fn scale_color(k: f64, color: IVec3) -> IVec3 {
    IVec3::new(
        (color.x as f64 * k) as i32,
        (color.y as f64 * k) as i32,
        (color.z as f64 * k) as i32,
    )
}

/// Clamp a raw color into displayable 0-255 channels.
#[inline]
fn clamp_color(color: IVec3) -> [u8; 3] {
    [
        color.x.clamp(0, 255) as u8,
        color.y.clamp(0, 255) as u8,
        color.z.clamp(0, 255) as u8,
    ]
}

/// Compute the color of a ray fired through the scene.
///
/// The recursion below works on raw i32 channels; over-bright lighting
/// pushes intermediate values outside [0, 255], and the single clamp here
/// at the boundary resolves them. Clamping earlier would change the
/// blended result of reflective surfaces.
pub fn trace_ray(
    origin: DVec3,
    direction: DVec3,
    bounds: Interval,
    depth: u32,
    scene: &Scene,
) -> [u8; 3] {
    clamp_color(trace(origin, direction, bounds, depth, scene))
}

/// The recursive worker. Each call either terminates (miss, matte
/// surface, or exhausted depth) or shades locally and recurses once along
/// the mirrored ray, so the reflection chain runs at most depth + 1
/// intersection queries.
fn trace(origin: DVec3, direction: DVec3, bounds: Interval, depth: u32, scene: &Scene) -> IVec3 {
    let Some(hit) = closest_intersection(origin, direction, bounds, scene) else {
        return BACKGROUND;
    };

    let point = origin + hit.t * direction;
    let normal = (point - hit.sphere.center).normalize();
    let view = -direction;

    let lighting = compute_lighting(point, normal, view, hit.sphere, scene);
    let local_color = scale_color(lighting, hit.sphere.color_rgb());

    let reflectivity = hit.sphere.reflectivity;
    if reflectivity <= 0.0 || depth == 0 {
        return local_color;
    }

    let reflected_ray = reflect(view, normal);
    let reflected_color = trace(
        point,
        reflected_ray,
        Interval::new(SELF_INTERSECTION_EPSILON, f64::INFINITY),
        depth - 1,
        scene,
    );

    scale_color(1.0 - reflectivity, local_color) + scale_color(reflectivity, reflected_color)
}
