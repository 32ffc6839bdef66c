//! Equirectangular to central omnidirectional image sequence mapping
//!
//! Usage:
//!   equi2omni data/omni_400_400.yaml media/ 94 104 400 400 0

mod batch;

use batch::{BatchConfig, run_batch};
use clap::Parser;
use e2o_core::{PixelQuantization, RigOrientation};
use e2o_io::FrameNaming;
use log::info;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Map equirectangular images to a central omnidirectional camera"
)]
struct Args {
    /// YAML file with the omnidirectional camera intrinsics
    calibration: PathBuf,

    /// Directory of NNNNNN.png inputs; oNNNN.png outputs are written next to them
    images_dir: PathBuf,

    /// Index of the first image to transform
    first: u32,

    /// Index of the last image to transform
    last: u32,

    /// Width (pixels) of the output omnidirectional images
    width: usize,

    /// Height (pixels) of the output omnidirectional images
    height: usize,

    /// Omnidirectional camera axis orientation in degrees: 0 downward, 180 upward
    #[arg(allow_negative_numbers = true)]
    orientation: Option<f64>,

    /// Sample the nearest equirectangular pixel instead of truncating
    #[arg(long)]
    round: bool,
}

impl Args {
    fn into_batch_config(self) -> BatchConfig {
        let degrees = self.orientation.unwrap_or_else(|| {
            info!("no omni camera orientation given, assuming 0 degrees");
            0.0
        });

        BatchConfig {
            calibration: self.calibration,
            naming: FrameNaming::new(self.images_dir),
            first: self.first,
            last: self.last,
            output_width: self.width,
            output_height: self.height,
            rig: RigOrientation::from_degrees(degrees),
            quantization: if self.round {
                PixelQuantization::Round
            } else {
                PixelQuantization::Truncate
            },
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let config = Args::parse().into_batch_config();
    let report = run_batch(&config)?;
    info!(
        "{} frames written, {} output pixels without source",
        report.frames_written, report.sentinel_pixels
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_parse_positional_arguments() {
        let args = Args::try_parse_from([
            "equi2omni",
            "data/omni_400_400.yaml",
            "media",
            "94",
            "104",
            "400",
            "300",
            "180",
        ])
        .unwrap();
        let config = args.into_batch_config();

        assert_eq!(config.calibration, PathBuf::from("data/omni_400_400.yaml"));
        assert_eq!(config.naming, FrameNaming::new("media"));
        assert_eq!((config.first, config.last), (94, 104));
        assert_eq!((config.output_width, config.output_height), (400, 300));
        assert!((config.rig.angle() - PI).abs() < 1e-12);
        assert_eq!(config.quantization, PixelQuantization::Truncate);
    }

    #[test]
    fn test_orientation_defaults_to_zero() {
        let args =
            Args::try_parse_from(["equi2omni", "c.yaml", "dir", "0", "1", "64", "64", "--round"])
                .unwrap();
        let config = args.into_batch_config();
        assert_eq!(config.rig.angle(), 0.0);
        assert_eq!(config.quantization, PixelQuantization::Round);
    }

    #[test]
    fn test_negative_orientation() {
        let args =
            Args::try_parse_from(["equi2omni", "c.yaml", "dir", "0", "1", "64", "64", "-90"])
                .unwrap();
        assert_eq!(args.orientation, Some(-90.0));
    }

    #[test]
    fn test_missing_size_is_rejected() {
        let res = Args::try_parse_from(["equi2omni", "c.yaml", "dir", "0", "1", "64"]);
        assert!(res.is_err());
    }
}
