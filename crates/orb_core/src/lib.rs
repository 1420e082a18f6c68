//! Orb Core - scene model for the sphere tracer.
//!
//! This crate provides the immutable scene description consumed by the
//! renderer:
//!
//! - **`Sphere`**: geometry plus Phong surface parameters, validated at
//!   construction
//! - **`Light`**: ambient, point, and directional light variants
//! - **`Scene`**: the ordered sphere list and light set, read-only once
//!   built
//!
//! Pure data: nothing here intersects, shades, or traces.

pub mod light;
pub mod scene;
pub mod sphere;

// Re-export commonly used types
pub use light::Light;
pub use scene::Scene;
pub use sphere::{Sphere, SceneError, SHININESS_DISABLED};
