//! Orb Renderer - recursive Phong ray tracing on the CPU.
//!
//! The tracing kernel: ray/sphere intersection, nearest-hit scene query,
//! local Phong illumination with hard shadows, depth-bounded specular
//! reflection, and the camera mapping that turns pixels into rays.
//!
//! Every trace is a pure function of an immutable [`Scene`] and [`Camera`]
//! snapshot, so frames parallelize over tiles with rayon without any
//! synchronization on the pixel buffer.

mod bucket;
mod camera;
mod intersect;
mod renderer;
mod shading;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use intersect::{closest_intersection, intersect_ray, Hit, SELF_INTERSECTION_EPSILON};
pub use renderer::{render, render_parallel, render_pixel, ImageBuffer, RenderConfig};
pub use shading::{compute_lighting, reflect};
pub use tracer::trace_ray;

/// Re-export the scene model and common math types
pub use orb_core::{Light, Scene, SceneError, Sphere, SHININESS_DISABLED};
pub use orb_math::{DMat3, DVec3, IVec3, Interval, Ray};
