use e2o_core::{
    ConfigurationError, E2oError, EquirectangularCamera, MappingConfig, MappingContext,
    PixelQuantization, RigOrientation,
};
use e2o_io::{FrameNaming, Result, load_omni_calibration, read_frame, write_frame};
use log::info;
use std::path::PathBuf;

/// One run of the tool: which calibration, which frames, which output
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub calibration: PathBuf,
    pub naming: FrameNaming,
    pub first: u32,
    pub last: u32,
    pub output_width: usize,
    pub output_height: usize,
    pub rig: RigOrientation,
    pub quantization: PixelQuantization,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub frames_written: usize,
    pub sentinel_pixels: usize,
}

/// Load the calibration, build the mapping from the first frame's size and
/// convert every frame in `first..=last`. Any failure aborts the run.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    if config.first > config.last {
        return Err(E2oError::from(ConfigurationError::InvalidFrameRange {
            first: config.first,
            last: config.last,
        })
        .into());
    }

    let omni = load_omni_calibration(&config.calibration)?;
    let (au, av) = omni.focal_scale();
    let (u0, v0) = omni.principal_point();
    info!(
        "omnidirectional camera intrinsics: au = {au} ; av = {av} ; u0 = {u0} ; v0 = {v0} ; xi = {}",
        omni.xi()
    );

    let first = read_frame(config.naming.input_path(config.first))?;
    let (input_width, input_height) = first.size();
    let equi = EquirectangularCamera::for_image(input_width, input_height);

    let mapping = MappingConfig::new(
        (config.output_width, config.output_height),
        (input_width, input_height),
        config.rig.clone(),
    )
    .with_quantization(config.quantization);
    let context = MappingContext::build(mapping, omni, equi)?;

    let mut pending = Some(first);
    let mut output = context.output_frame();
    let mut frames_written = 0;
    for index in config.first..=config.last {
        let input = match pending.take() {
            Some(frame) => frame,
            None => read_frame(config.naming.input_path(index))?,
        };

        context.apply_into(&input, &mut output)?;

        let path = config.naming.output_path(index);
        write_frame(&path, &output)?;
        info!("frame {index} -> {}", path.display());
        frames_written += 1;
    }

    Ok(BatchReport {
        frames_written,
        sentinel_pixels: context.table().sentinel_count(),
    })
}
