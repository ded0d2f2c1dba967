use std::ops::{Add, AddAssign};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Camera position relative to a look point in spherical coordinates.
///
/// Angles are in degrees. The inclination is measured from the +z axis, so an
/// inclination of zero places the camera straight above the look point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPolar {
    /// Azimuth in degrees, counter clockwise from +x.
    pub azimuth: f64,
    /// Inclination from the zenith in degrees.
    pub inclination: f64,
    /// Distance to the look point.
    pub radius: f64,
}

impl CameraPolar {
    /// Create a new CameraPolar from azimuth, inclination and radius.
    pub fn new(azimuth: f64, inclination: f64, radius: f64) -> Self {
        Self {
            azimuth,
            inclination,
            radius,
        }
    }

    /// Cartesian camera center for a camera looking at `look_at`.
    ///
    /// Example:
    /// ```
    /// use flypath_traj::camera::CameraPolar;
    /// use glam::DVec3;
    ///
    /// let above = CameraPolar::new(0.0, 0.0, 10.0).to_cartesian(DVec3::new(1.0, 2.0, 0.0));
    /// assert_eq!(above, DVec3::new(1.0, 2.0, 10.0));
    /// ```
    pub fn to_cartesian(&self, look_at: DVec3) -> DVec3 {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_inc, cos_inc) = self.inclination.to_radians().sin_cos();
        look_at + self.radius * DVec3::new(sin_inc * cos_az, sin_inc * sin_az, cos_inc)
    }
}

impl Add for CameraPolar {
    type Output = CameraPolar;

    fn add(self, rhs: CameraPolar) -> CameraPolar {
        CameraPolar {
            azimuth: self.azimuth + rhs.azimuth,
            inclination: self.inclination + rhs.inclination,
            radius: self.radius + rhs.radius,
        }
    }
}

impl AddAssign for CameraPolar {
    fn add_assign(&mut self, rhs: CameraPolar) {
        *self = *self + rhs;
    }
}

/// A struct representing the intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinholeIntrinsics {
    /// The focal length in pixels (fx, fy)
    pub focal_length: (f64, f64),
    /// The principal point in pixels (cx, cy)
    pub principal_point: (f64, f64),
}

impl PinholeIntrinsics {
    /// Creates a new PinholeIntrinsics with the given parameters.
    pub fn new(focal_length: (f64, f64), principal_point: (f64, f64)) -> Self {
        Self {
            focal_length,
            principal_point,
        }
    }

    /// Intrinsics with square pixels and the principal point at the image center.
    pub fn centered(focal_length: f64, width: u32, height: u32) -> Self {
        Self::new(
            (focal_length, focal_length),
            (width as f64 / 2.0, height as f64 / 2.0),
        )
    }
}

/// Where a camera sits and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera center in world coordinates.
    pub center: DVec3,
    /// Point the optical axis passes through.
    pub look_at: DVec3,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polar_add() {
        let mut polar = CameraPolar::new(0.0, 0.0, 10.0);
        polar += CameraPolar::new(10.0, 5.0, -1.0);
        polar = polar + CameraPolar::new(10.0, 5.0, -1.0);
        assert_eq!(polar, CameraPolar::new(20.0, 10.0, 8.0));
    }

    #[test]
    fn test_polar_to_cartesian() {
        let look_at = DVec3::new(5.0, -5.0, 0.0);

        let east = CameraPolar::new(0.0, 90.0, 10.0).to_cartesian(look_at);
        assert_relative_eq!(east.x, 15.0, epsilon = 1e-12);
        assert_relative_eq!(east.y, -5.0, epsilon = 1e-12);
        assert_relative_eq!(east.z, 0.0, epsilon = 1e-12);

        let oblique = CameraPolar::new(90.0, 45.0, 2.0).to_cartesian(look_at);
        assert_relative_eq!(oblique.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(oblique.y, -5.0 + 2f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(oblique.z, 2f64.sqrt(), epsilon = 1e-12);

        // the radius is preserved for any angles
        let any = CameraPolar::new(123.0, 67.0, 42.0).to_cartesian(look_at);
        assert_relative_eq!((any - look_at).length(), 42.0, epsilon = 1e-12);
    }

    #[test]
    fn test_centered_intrinsics() {
        let intrinsics = PinholeIntrinsics::centered(1000.0, 1280, 720);
        assert_eq!(intrinsics.focal_length, (1000.0, 1000.0));
        assert_eq!(intrinsics.principal_point, (640.0, 360.0));
    }
}
