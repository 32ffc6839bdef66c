use super::{PixelMetric, SphereProjection, SphereUnprojection, SpherePoint};
use crate::error::ProjectionError;
use nalgebra::{Point2, Unit, Vector3};
use std::f64::consts::PI;

/// Equirectangular (longitude/latitude) camera.
///
/// The metric plane is (longitude, latitude) in radians; `au` and `av` are
/// pixels per radian and (`u0`, `v0`) is the pixel of longitude 0,
/// latitude 0.
#[derive(Debug, Clone, PartialEq)]
pub struct EquirectangularCamera {
    au: f64,
    av: f64,
    u0: f64,
    v0: f64,
}

impl EquirectangularCamera {
    pub fn new(au: f64, av: f64, u0: f64, v0: f64) -> Self {
        Self { au, av, u0, v0 }
    }

    /// Full-sphere camera for a `width x height` panorama: 2π of longitude
    /// across the width, π of latitude down the height.
    pub fn for_image(width: usize, height: usize) -> Self {
        let w = width as f64;
        let h = height as f64;
        Self::new(w * 0.5 / PI, h * 0.5 / (PI * 0.5), w * 0.5, h * 0.5)
    }

    /// Get angular scales (pixels per radian)
    pub fn angular_scale(&self) -> (f64, f64) {
        (self.au, self.av)
    }

    /// Get image centre
    pub fn center(&self) -> (f64, f64) {
        (self.u0, self.v0)
    }
}

impl PixelMetric for EquirectangularCamera {
    fn pixel_to_metric(&self, pixel: Point2<f64>) -> Point2<f64> {
        Point2::new((pixel.x - self.u0) / self.au, (pixel.y - self.v0) / self.av)
    }

    fn metric_to_pixel(&self, metric: Point2<f64>) -> Point2<f64> {
        Point2::new(metric.x * self.au + self.u0, metric.y * self.av + self.v0)
    }
}

impl SphereProjection for EquirectangularCamera {
    fn project_from_sphere(&self, point: &SpherePoint) -> Point2<f64> {
        let mut longitude = point.x.atan2(point.z);
        // atan2 yields (-π, π]; keep the seam on the left edge. That column
        // samples (0, v), where indexing one past the row end would read (0, v + 1).
        if longitude >= PI {
            longitude = -PI;
        }
        let latitude = point.y.clamp(-1.0, 1.0).asin();

        Point2::new(longitude, latitude)
    }
}

impl SphereUnprojection for EquirectangularCamera {
    fn unproject_to_sphere(&self, metric: Point2<f64>) -> Result<SpherePoint, ProjectionError> {
        let (sin_lon, cos_lon) = metric.x.sin_cos();
        let (sin_lat, cos_lat) = metric.y.sin_cos();

        Ok(Unit::new_unchecked(Vector3::new(
            cos_lat * sin_lon,
            sin_lat,
            cos_lat * cos_lon,
        )))
    }
}
