use super::{PixelMetric, SphereUnprojection, SpherePoint};
use crate::error::{ConfigurationError, ProjectionError, Result};
use log::debug;
use nalgebra::{Point2, Unit, Vector3};

/// Central omnidirectional camera (unified sphere model).
///
/// A pixel is lifted to the unit sphere through the mirror parameter `xi`:
/// `xi = 0` degenerates to a pinhole, `xi = 1` is a parabolic mirror and
/// `xi > 1` leaves part of the image plane without a real sphere point.
#[derive(Debug, Clone, PartialEq)]
pub struct OmniCamera {
    au: f64,
    av: f64,
    u0: f64,
    v0: f64,
    xi: f64,
}

impl OmniCamera {
    /// Create a new omnidirectional camera from its intrinsics
    pub fn new(au: f64, av: f64, u0: f64, v0: f64, xi: f64) -> Result<Self> {
        if !au.is_finite() || !av.is_finite() || au == 0.0 || av == 0.0 {
            return Err(ConfigurationError::InvalidIntrinsics(format!(
                "focal scales must be finite and non-zero (au = {au}, av = {av})"
            ))
            .into());
        }
        if !u0.is_finite() || !v0.is_finite() {
            return Err(ConfigurationError::InvalidIntrinsics(format!(
                "principal point must be finite (u0 = {u0}, v0 = {v0})"
            ))
            .into());
        }
        if !xi.is_finite() || xi < 0.0 {
            return Err(ConfigurationError::InvalidIntrinsics(format!(
                "mirror parameter must be finite and non-negative (xi = {xi})"
            ))
            .into());
        }

        debug!("omni camera au = {au} ; av = {av} ; u0 = {u0} ; v0 = {v0} ; xi = {xi}");
        Ok(Self { au, av, u0, v0, xi })
    }

    /// Get focal scales
    pub fn focal_scale(&self) -> (f64, f64) {
        (self.au, self.av)
    }

    /// Get principal point
    pub fn principal_point(&self) -> (f64, f64) {
        (self.u0, self.v0)
    }

    /// Get mirror parameter
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Project a sphere point back onto the metric image plane
    pub fn project_sphere_point(&self, point: &SpherePoint) -> Result<Point2<f64>> {
        let denom = point.z + self.xi;
        if denom <= 0.0 {
            return Err(ProjectionError::BehindMirror.into());
        }
        Ok(Point2::new(point.x / denom, point.y / denom))
    }
}

impl PixelMetric for OmniCamera {
    fn pixel_to_metric(&self, pixel: Point2<f64>) -> Point2<f64> {
        Point2::new((pixel.x - self.u0) / self.au, (pixel.y - self.v0) / self.av)
    }

    fn metric_to_pixel(&self, metric: Point2<f64>) -> Point2<f64> {
        Point2::new(metric.x * self.au + self.u0, metric.y * self.av + self.v0)
    }
}

impl SphereUnprojection for OmniCamera {
    fn unproject_to_sphere(&self, metric: Point2<f64>) -> std::result::Result<SpherePoint, ProjectionError> {
        let r2 = metric.x * metric.x + metric.y * metric.y;
        let discriminant = 1.0 + (1.0 - self.xi * self.xi) * r2;
        if discriminant < 0.0 {
            return Err(ProjectionError::NoRealRoot { discriminant });
        }

        let fact = (self.xi + discriminant.sqrt()) / (r2 + 1.0);

        // Already unit length up to rounding
        Ok(Unit::new_unchecked(Vector3::new(
            fact * metric.x,
            fact * metric.y,
            fact - self.xi,
        )))
    }
}
