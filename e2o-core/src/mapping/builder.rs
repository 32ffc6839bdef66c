use super::table::{CorrespondenceTable, SourcePixel};
use crate::camera::{RigOrientation, SphereProjection, SphereUnprojection};
use crate::error::{ConfigurationError, Result};
use log::{error, info, warn};
use nalgebra::Point2;

/// How projected source coordinates become integer pixel indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelQuantization {
    /// Truncate toward zero
    #[default]
    Truncate,
    /// Nearest pixel
    Round,
}

impl PixelQuantization {
    fn apply(self, value: f64) -> i64 {
        match self {
            PixelQuantization::Truncate => value as i64,
            PixelQuantization::Round => value.round() as i64,
        }
    }
}

/// Everything the correspondence table depends on besides the camera models
#[derive(Debug, Clone, PartialEq)]
pub struct MappingConfig {
    pub output_width: usize,
    pub output_height: usize,
    pub input_width: usize,
    pub input_height: usize,
    pub rig: RigOrientation,
    pub quantization: PixelQuantization,
}

impl MappingConfig {
    pub fn new(output_size: (usize, usize), input_size: (usize, usize), rig: RigOrientation) -> Self {
        Self {
            output_width: output_size.0,
            output_height: output_size.1,
            input_width: input_size.0,
            input_height: input_size.1,
            rig,
            quantization: PixelQuantization::default(),
        }
    }

    pub fn with_quantization(mut self, quantization: PixelQuantization) -> Self {
        self.quantization = quantization;
        self
    }

    /// Reject sizes that would give an empty table or an empty source
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if self.output_width == 0 || self.output_height == 0 {
            return Err(ConfigurationError::EmptyOutput {
                width: self.output_width,
                height: self.output_height,
            });
        }
        if self.input_width == 0 || self.input_height == 0 {
            return Err(ConfigurationError::EmptyInput {
                width: self.input_width,
                height: self.input_height,
            });
        }
        Ok(())
    }
}

/// Source coordinate in the equirectangular image for output pixel
/// (uo, vo), before quantization. `None` when the pixel has no sphere point.
pub fn map_pixel<O, E>(
    uo: f64,
    vo: f64,
    omni: &O,
    equi: &E,
    rig: &RigOrientation,
) -> Option<Point2<f64>>
where
    O: SphereUnprojection + ?Sized,
    E: SphereProjection + ?Sized,
{
    let metric = omni.pixel_to_metric(Point2::new(uo, vo));
    let sphere = omni.unproject_to_sphere(metric).ok()?;
    let sphere = rig.change_frame(&sphere);
    Some(equi.metric_to_pixel(equi.project_from_sphere(&sphere)))
}

/// Build the correspondence table for `config`.
///
/// Output pixels without a sphere point, and the rare projections that
/// land on the far edge of the input (the pole at `v == input_height`),
/// store [`SourcePixel::SENTINEL`].
pub fn build_table<O, E>(config: &MappingConfig, omni: &O, equi: &E) -> Result<CorrespondenceTable>
where
    O: SphereUnprojection + ?Sized,
    E: SphereProjection + ?Sized,
{
    if let Err(e) = config.validate() {
        error!("refusing to build correspondence table: {e}");
        return Err(e.into());
    }

    let input_width = config.input_width as i64;
    let input_height = config.input_height as i64;

    let mut entries = Vec::with_capacity(config.output_width * config.output_height);
    let mut unprojectable = 0usize;
    let mut out_of_bounds = 0usize;

    for vo in 0..config.output_height {
        for uo in 0..config.output_width {
            let Some(source) = map_pixel(uo as f64, vo as f64, omni, equi, &config.rig) else {
                unprojectable += 1;
                entries.push(SourcePixel::SENTINEL);
                continue;
            };

            let u = config.quantization.apply(source.x);
            let v = config.quantization.apply(source.y);
            if u < 0 || v < 0 || u >= input_width || v >= input_height {
                out_of_bounds += 1;
                entries.push(SourcePixel::SENTINEL);
                continue;
            }

            entries.push(SourcePixel::new(u as u32, v as u32));
        }
    }

    if out_of_bounds > 0 {
        warn!(
            "{out_of_bounds} output pixels project outside the {}x{} input and sample the sentinel",
            config.input_width, config.input_height
        );
    }
    info!(
        "correspondence table {}x{} <- {}x{}: {} entries, {} without sphere point",
        config.output_width,
        config.output_height,
        config.input_width,
        config.input_height,
        entries.len(),
        unprojectable
    );

    Ok(CorrespondenceTable::from_entries(
        (config.output_width, config.output_height),
        (config.input_width, config.input_height),
        entries,
        unprojectable + out_of_bounds,
    ))
}
