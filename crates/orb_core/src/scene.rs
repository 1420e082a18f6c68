//! The immutable scene: spheres and lights.

use crate::light::Light;
use crate::sphere::Sphere;

/// A complete scene.
///
/// Sphere order matters only for intersection tie-breaking: when two
/// surfaces meet a ray at exactly the same t, the earlier sphere in this
/// list wins. There is no mutation API; rebuild the scene to change it.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from already-validated spheres and lights.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// The spheres, in tie-break scan order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// The lights.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}
