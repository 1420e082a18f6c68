//! Sphere primitive with Phong surface parameters.

use orb_math::{DVec3, IVec3};
use thiserror::Error;

/// Sentinel shininess value meaning "no specular highlight".
pub const SHININESS_DISABLED: f64 = -1.0;

/// Errors raised when scene data violates its construction contract.
///
/// Malformed spheres are rejected here, at build time, so the tracer never
/// has to defend against them per pixel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("color component must lie in [0, 1], got {0}")]
    ColorOutOfRange(f64),

    #[error("shininess must be positive or exactly -1 (disabled), got {0}")]
    InvalidShininess(f64),

    #[error("reflectivity must lie in [0, 1], got {0}")]
    ReflectivityOutOfRange(f64),

    #[error("lighting coefficient must be non-negative and finite, got {0}")]
    InvalidCoefficient(f64),
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere with its surface description.
///
/// Immutable once constructed; owned by the [`Scene`](crate::Scene) for the
/// lifetime of a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space
    pub center: DVec3,

    /// Radius, always > 0
    pub radius: f64,

    /// Base color, components in [0, 1]
    pub color: DVec3,

    /// Specular exponent; [`SHININESS_DISABLED`] turns the highlight off
    pub shininess: f64,

    /// Fraction of the final color taken from the mirrored ray, in [0, 1]
    pub reflectivity: f64,

    /// Specular coefficient
    pub k_s: f64,

    /// Diffuse coefficient
    pub k_d: f64,

    /// Ambient coefficient
    pub k_a: f64,
}

impl Sphere {
    /// Create a sphere, validating every surface parameter.
    ///
    /// The comparisons are written so that NaN fails them too.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center: DVec3,
        radius: f64,
        color: DVec3,
        shininess: f64,
        reflectivity: f64,
        k_s: f64,
        k_d: f64,
        k_a: f64,
    ) -> SceneResult<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(SceneError::InvalidRadius(radius));
        }
        for channel in [color.x, color.y, color.z] {
            if !(0.0..=1.0).contains(&channel) {
                return Err(SceneError::ColorOutOfRange(channel));
            }
        }
        if !(shininess > 0.0 || shininess == SHININESS_DISABLED) {
            return Err(SceneError::InvalidShininess(shininess));
        }
        if !(0.0..=1.0).contains(&reflectivity) {
            return Err(SceneError::ReflectivityOutOfRange(reflectivity));
        }
        for k in [k_s, k_d, k_a] {
            if !(k >= 0.0 && k.is_finite()) {
                return Err(SceneError::InvalidCoefficient(k));
            }
        }

        Ok(Self {
            center,
            radius,
            color,
            shininess,
            reflectivity,
            k_s,
            k_d,
            k_a,
        })
    }

    /// The base color as a 0-255 integer triplet.
    ///
    /// Components truncate toward zero, matching how the tracer scales
    /// integer colors everywhere else.
    pub fn color_rgb(&self) -> IVec3 {
        IVec3::new(
            (self.color.x * 255.0) as i32,
            (self.color.y * 255.0) as i32,
            (self.color.z * 255.0) as i32,
        )
    }

    /// Whether this surface has a specular highlight at all.
    pub fn has_highlight(&self) -> bool {
        self.shininess != SHININESS_DISABLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_sphere(radius: f64) -> SceneResult<Sphere> {
        Sphere::new(
            DVec3::ZERO,
            radius,
            DVec3::new(0.5, 0.5, 0.5),
            10.0,
            0.0,
            0.1,
            0.7,
            0.2,
        )
    }

    #[test]
    fn test_valid_sphere() {
        let sphere = plain_sphere(1.0).unwrap();
        assert_eq!(sphere.radius, 1.0);
        assert!(sphere.has_highlight());
    }

    #[test]
    fn test_rejects_bad_radius() {
        assert_eq!(plain_sphere(0.0), Err(SceneError::InvalidRadius(0.0)));
        assert_eq!(plain_sphere(-2.0), Err(SceneError::InvalidRadius(-2.0)));
        assert!(plain_sphere(f64::NAN).is_err());
        assert!(plain_sphere(f64::INFINITY).is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let result = Sphere::new(
            DVec3::ZERO,
            1.0,
            DVec3::new(0.5, 1.5, 0.5),
            10.0,
            0.0,
            0.1,
            0.7,
            0.2,
        );
        assert_eq!(result, Err(SceneError::ColorOutOfRange(1.5)));
    }

    #[test]
    fn test_shininess_sentinel() {
        let sphere = Sphere::new(
            DVec3::ZERO,
            1.0,
            DVec3::ONE,
            SHININESS_DISABLED,
            0.0,
            0.1,
            0.7,
            0.2,
        )
        .unwrap();
        assert!(!sphere.has_highlight());

        // Anything else non-positive is rejected
        let bad = Sphere::new(DVec3::ZERO, 1.0, DVec3::ONE, 0.0, 0.0, 0.1, 0.7, 0.2);
        assert_eq!(bad, Err(SceneError::InvalidShininess(0.0)));
        let bad = Sphere::new(DVec3::ZERO, 1.0, DVec3::ONE, -2.0, 0.0, 0.1, 0.7, 0.2);
        assert_eq!(bad, Err(SceneError::InvalidShininess(-2.0)));
    }

    #[test]
    fn test_rejects_bad_reflectivity() {
        let bad = Sphere::new(DVec3::ZERO, 1.0, DVec3::ONE, 10.0, 1.1, 0.1, 0.7, 0.2);
        assert_eq!(bad, Err(SceneError::ReflectivityOutOfRange(1.1)));
    }

    #[test]
    fn test_rejects_negative_coefficient() {
        let bad = Sphere::new(DVec3::ZERO, 1.0, DVec3::ONE, 10.0, 0.0, -0.1, 0.7, 0.2);
        assert_eq!(bad, Err(SceneError::InvalidCoefficient(-0.1)));
    }

    #[test]
    fn test_color_rgb_truncates() {
        let sphere = Sphere::new(
            DVec3::ZERO,
            1.0,
            DVec3::new(1.0, 0.5, 0.0),
            10.0,
            0.0,
            0.1,
            0.7,
            0.2,
        )
        .unwrap();
        assert_eq!(sphere.color_rgb(), IVec3::new(255, 127, 0));
    }
}
