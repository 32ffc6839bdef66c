use super::SpherePoint;
use nalgebra::{Rotation3, Vector3};

/// Orientation of the omnidirectional camera with respect to the
/// equirectangular one: a single rotation about the camera X axis.
///
/// An angle of 0 looks downward, π looks upward.
#[derive(Debug, Clone, PartialEq)]
pub struct RigOrientation {
    angle: f64,
    rotation: Rotation3<f64>,
}

impl RigOrientation {
    pub fn from_radians(angle: f64) -> Self {
        Self {
            angle,
            rotation: Rotation3::from_axis_angle(&Vector3::x_axis(), angle),
        }
    }

    pub fn from_degrees(angle: f64) -> Self {
        Self::from_radians(angle.to_radians())
    }

    pub fn identity() -> Self {
        Self::from_radians(0.0)
    }

    /// Rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Move a sphere point from the omnidirectional frame into the
    /// equirectangular frame
    pub fn change_frame(&self, point: &SpherePoint) -> SpherePoint {
        &self.rotation * point
    }
}

impl Default for RigOrientation {
    fn default() -> Self {
        Self::identity()
    }
}
