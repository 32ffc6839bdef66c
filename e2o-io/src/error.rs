use e2o_core::E2oError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Calibration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Frame shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] E2oError),
}

pub type Result<T> = std::result::Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use e2o_core::ConfigurationError;

    #[test]
    fn test_core_error_is_transparent() {
        let err: IoError = E2oError::from(ConfigurationError::InvalidIntrinsics("xi".to_string())).into();
        assert_eq!(err.to_string(), "Configuration error: Invalid intrinsics: xi");
    }

    #[test]
    fn test_file_error_display() {
        let err: IoError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml").into();
        assert_eq!(err.to_string(), "File error: missing.yaml");
    }
}
