use crate::error::Result;
use e2o_core::OmniCamera;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Intrinsics of a central omnidirectional camera as stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmniCalibration {
    pub au: f64,
    pub av: f64,
    pub u0: f64,
    pub v0: f64,
    pub xi: f64,
}

impl OmniCalibration {
    /// Validate and build the camera model
    pub fn to_camera(&self) -> Result<OmniCamera> {
        Ok(OmniCamera::new(self.au, self.av, self.u0, self.v0, self.xi)?)
    }
}

impl From<&OmniCamera> for OmniCalibration {
    fn from(camera: &OmniCamera) -> Self {
        let (au, av) = camera.focal_scale();
        let (u0, v0) = camera.principal_point();
        Self {
            au,
            av,
            u0,
            v0,
            xi: camera.xi(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CalibrationFile {
    omni: OmniCalibration,
}

/// Parse a calibration document of the form
///
/// ```yaml
/// omni:
///   au: 100.0
///   av: 100.0
///   u0: 200.0
///   v0: 200.0
///   xi: 1.0
/// ```
pub fn parse_omni_calibration(yaml: &str) -> Result<OmniCamera> {
    let file: CalibrationFile = serde_yaml::from_str(yaml)?;
    file.omni.to_camera()
}

/// Load and validate an omnidirectional camera from a YAML calibration file
pub fn load_omni_calibration<P: AsRef<Path>>(path: P) -> Result<OmniCamera> {
    let path = path.as_ref();
    debug!("loading omni calibration from {}", path.display());
    let yaml = fs::read_to_string(path)?;
    parse_omni_calibration(&yaml)
}

/// Write a camera's intrinsics in the format read by [`load_omni_calibration`]
pub fn save_omni_calibration<P: AsRef<Path>>(path: P, camera: &OmniCamera) -> Result<()> {
    let file = CalibrationFile {
        omni: OmniCalibration::from(camera),
    };
    fs::write(path, serde_yaml::to_string(&file)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;
    use e2o_core::{ConfigurationError, E2oError};

    const SAMPLE: &str = "omni:\n  au: 100.0\n  av: 101.5\n  u0: 200.0\n  v0: 199.0\n  xi: 1.0\n";

    #[test]
    fn test_parse_sample() {
        let cam = parse_omni_calibration(SAMPLE).unwrap();
        assert_eq!(cam.focal_scale(), (100.0, 101.5));
        assert_eq!(cam.principal_point(), (200.0, 199.0));
        assert_eq!(cam.xi(), 1.0);
    }

    #[test]
    fn test_missing_field() {
        let res = parse_omni_calibration("omni:\n  au: 100.0\n  av: 100.0\n  u0: 1.0\n  v0: 1.0\n");
        assert!(matches!(res, Err(IoError::Yaml(_))));
    }

    #[test]
    fn test_invalid_intrinsics_surface_as_configuration_error() {
        let res = parse_omni_calibration("omni: {au: 0.0, av: 100.0, u0: 1.0, v0: 1.0, xi: 1.0}");
        assert!(matches!(
            res,
            Err(IoError::Core(E2oError::Configuration(
                ConfigurationError::InvalidIntrinsics(_)
            )))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("omni.yaml");
        let cam = OmniCamera::new(312.25, 311.75, 640.5, 480.25, 0.875).unwrap();

        save_omni_calibration(&path, &cam).unwrap();
        let loaded = load_omni_calibration(&path).unwrap();
        assert_eq!(loaded, cam);
    }

    #[test]
    fn test_load_missing_file() {
        let res = load_omni_calibration("does/not/exist.yaml");
        assert!(matches!(res, Err(IoError::File(_))));
    }
}
