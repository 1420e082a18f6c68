//! Camera snapshot and pixel-to-ray mapping.

use orb_math::{euler_rotation, DMat3, DVec3, Ray};

/// Size of the viewport in world units.
const VIEWPORT_SIZE: f64 = 1.0;

/// Distance from the camera to the projection plane. Always positive, so
/// a generated ray direction can never be zero-length.
const PROJECTION_PLANE: f64 = 1.0;

/// An immutable camera snapshot for one frame.
///
/// The event-handling layer owns the authoritative mutable camera state
/// (position plus three Euler view angles) and hands the renderer a copy
/// each frame; nothing here mutates during a render.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Output image width in pixels
    pub image_width: u32,
    /// Output image height in pixels
    pub image_height: u32,

    position: DVec3,
    view_angles: DVec3,

    // Cached by initialize()
    rotation: DMat3,
}

impl Camera {
    /// Create a camera at the origin looking down +Z.
    pub fn new() -> Self {
        Self {
            image_width: 900,
            image_height: 900,
            position: DVec3::ZERO,
            view_angles: DVec3::ZERO,
            rotation: DMat3::IDENTITY,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the camera position in world space.
    pub fn with_position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Set the Euler view angles (rx, ry, rz), in radians.
    pub fn with_view_angles(mut self, view_angles: DVec3) -> Self {
        self.view_angles = view_angles;
        self
    }

    /// Recompute the cached rotation matrix (call after building or after
    /// changing the view angles).
    pub fn initialize(&mut self) {
        self.rotation = euler_rotation(self.view_angles);
    }

    /// The camera position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// The Euler view angles.
    pub fn view_angles(&self) -> DVec3 {
        self.view_angles
    }

    /// Map a centered pixel offset onto the viewport plane.
    ///
    /// `x` runs over [-W/2, W/2) and `y` over [-H/2, H/2). The x step is
    /// scaled by the image height and the y step by the width; the swap
    /// looks backwards, but output compatibility depends on it staying
    /// this way.
    pub fn viewport_direction(&self, x: i32, y: i32) -> DVec3 {
        DVec3::new(
            x as f64 * (VIEWPORT_SIZE / self.image_height as f64),
            y as f64 * (VIEWPORT_SIZE / self.image_width as f64),
            PROJECTION_PLANE,
        )
    }

    /// Generate the world-space ray through a centered pixel offset.
    pub fn get_ray(&self, x: i32, y: i32) -> Ray {
        Ray::new(self.position, self.rotation * self.viewport_direction(x, y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
