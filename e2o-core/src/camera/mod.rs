//! Camera models and the unit-sphere intermediate they share

mod equirectangular;
mod omni;
mod rig;

pub use equirectangular::EquirectangularCamera;
pub use omni::OmniCamera;
pub use rig::RigOrientation;

use crate::error::ProjectionError;
use nalgebra::{Point2, Unit, Vector3};

/// Direction on the unit sphere, expressed in some camera frame
pub type SpherePoint = Unit<Vector3<f64>>;

/// Conversion between pixel coordinates and the model's metric image plane
pub trait PixelMetric {
    /// Pixel (u, v) to metric (x, y)
    fn pixel_to_metric(&self, pixel: Point2<f64>) -> Point2<f64>;

    /// Metric (x, y) to pixel (u, v)
    fn metric_to_pixel(&self, metric: Point2<f64>) -> Point2<f64>;
}

/// Lift a metric image point onto the unit sphere
pub trait SphereUnprojection: PixelMetric {
    fn unproject_to_sphere(&self, metric: Point2<f64>) -> Result<SpherePoint, ProjectionError>;
}

/// Project a unit-sphere point onto the metric image plane. Defined for every
/// unit vector.
pub trait SphereProjection: PixelMetric {
    fn project_from_sphere(&self, point: &SpherePoint) -> Point2<f64>;
}
