use thiserror::Error;

/// Common errors across the equirectangular to omnidirectional pipeline
#[derive(Error, Debug)]
pub enum E2oError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Frame is {actual:?} but the mapping expects {expected:?}")]
    FrameMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Per-pixel projection failures. The table builder absorbs these into
/// sentinel entries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("No real sphere point (discriminant {discriminant})")]
    NoRealRoot { discriminant: f64 },

    #[error("Point behind mirror")]
    BehindMirror,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Output image has no pixels ({width}x{height})")]
    EmptyOutput { width: usize, height: usize },

    #[error("Input image has no pixels ({width}x{height})")]
    EmptyInput { width: usize, height: usize },

    #[error("Invalid intrinsics: {0}")]
    InvalidIntrinsics(String),

    #[error("Invalid frame range: first {first} > last {last}")]
    InvalidFrameRange { first: u32, last: u32 },
}

pub type Result<T> = std::result::Result<T, E2oError>;
