//! Euler-angle rotation for camera ray directions.

use glam::{DMat3, DVec3};

/// Build the camera rotation matrix from Euler angles (rx, ry, rz).
///
/// Composes the standard axis rotations as `Rx * Ry * Rz`. The order is
/// fixed: changing it changes which way the view turns for the same
/// angles, so it must stay stable across the codebase.
pub fn euler_rotation(angles: DVec3) -> DMat3 {
    DMat3::from_rotation_x(angles.x) * DMat3::from_rotation_y(angles.y) * DMat3::from_rotation_z(angles.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx_eq(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_zero_angles_is_identity() {
        let m = euler_rotation(DVec3::ZERO);
        let v = DVec3::new(0.3, -1.2, 4.5);
        assert!(approx_eq(m * v, v));
    }

    #[test]
    fn test_single_axis_rotations() {
        // Quarter turn about X sends +Y to +Z
        let rx = euler_rotation(DVec3::new(FRAC_PI_2, 0.0, 0.0));
        assert!(approx_eq(rx * DVec3::Y, DVec3::Z));

        // Quarter turn about Y sends +Z to +X
        let ry = euler_rotation(DVec3::new(0.0, FRAC_PI_2, 0.0));
        assert!(approx_eq(ry * DVec3::Z, DVec3::X));

        // Quarter turn about Z sends +X to +Y
        let rz = euler_rotation(DVec3::new(0.0, 0.0, FRAC_PI_2));
        assert!(approx_eq(rz * DVec3::X, DVec3::Y));
    }

    #[test]
    fn test_composition_order() {
        // Rx * Ry * Rz, applied right-to-left: the Z rotation acts first.
        let angles = DVec3::new(0.4, -0.7, 1.1);
        let m = euler_rotation(angles);
        let expected = DMat3::from_rotation_x(angles.x)
            * DMat3::from_rotation_y(angles.y)
            * DMat3::from_rotation_z(angles.z);
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert!(approx_eq(m * v, expected * v));

        // The reverse composition gives a different result for distinct angles
        let reversed = DMat3::from_rotation_z(angles.z)
            * DMat3::from_rotation_y(angles.y)
            * DMat3::from_rotation_x(angles.x);
        assert!(!approx_eq(m * v, reversed * v));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = euler_rotation(DVec3::new(0.2, 0.9, -1.4));
        let v = DVec3::new(1.0, -2.0, 0.5);
        assert!(((m * v).length() - v.length()).abs() < 1e-9);
    }
}
