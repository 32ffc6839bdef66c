
//! Calibration and frame I/O for the equirectangular to omnidirectional mapper

pub mod calibration;
pub mod error;
pub mod frame;
pub mod naming;

pub use calibration::{
    OmniCalibration, load_omni_calibration, parse_omni_calibration, save_omni_calibration,
};
pub use error::{IoError, Result};
pub use frame::{read_frame, write_frame};
pub use naming::FrameNaming;
