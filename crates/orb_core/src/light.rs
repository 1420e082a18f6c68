//! Light variants.
//!
//! A closed set: the shading engine matches exhaustively, so adding a
//! variant is a compile-time event, not a runtime dispatch question.

use orb_math::DVec3;

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform illumination independent of position or orientation.
    Ambient { intensity: f64 },

    /// Emits from a point; shadow casters must sit between surface and light.
    Point { intensity: f64, position: DVec3 },

    /// Parallel rays along a fixed direction, infinitely far away.
    Directional { intensity: f64, direction: DVec3 },
}

impl Light {
    /// The light's intensity, whatever its variant.
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity } => intensity,
            Light::Point { intensity, .. } => intensity,
            Light::Directional { intensity, .. } => intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_accessor() {
        assert_eq!(Light::Ambient { intensity: 0.05 }.intensity(), 0.05);
        assert_eq!(
            Light::Point {
                intensity: 1.25,
                position: DVec3::new(2.0, 1.0, 0.0),
            }
            .intensity(),
            1.25
        );
        assert_eq!(
            Light::Directional {
                intensity: 0.4,
                direction: DVec3::new(1.0, 4.0, 4.0),
            }
            .intensity(),
            0.4
        );
    }
}
