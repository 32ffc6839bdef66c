use crate::error::Result;
use e2o_core::frame::CHANNELS;
use e2o_core::{E2oError, Frame};
use image::ExtendedColorType;
use log::debug;
use ndarray::Array3;
use std::path::Path;

/// Decode an image file into an RGBA frame
pub fn read_frame<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    debug!("read {}x{} frame from {}", width, height, path.display());

    let data = Array3::from_shape_vec(
        (height as usize, width as usize, CHANNELS),
        image.into_raw(),
    )?;
    Ok(Frame::from_array(data)?)
}

/// Encode a frame; the format follows the file extension
pub fn write_frame<P: AsRef<Path>>(path: P, frame: &Frame) -> Result<()> {
    let path = path.as_ref();
    let width = to_u32(frame.width())?;
    let height = to_u32(frame.height())?;

    image::save_buffer(path, frame.as_bytes()?, width, height, ExtendedColorType::Rgba8)?;
    debug!("wrote {}x{} frame to {}", width, height, path.display());
    Ok(())
}

fn to_u32(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        E2oError::InvalidInput(format!("frame dimension {value} does not fit an image")).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("000001.png");

        let mut frame = Frame::new(7, 5);
        frame.set_pixel(0, 0, [255, 0, 0, 255]);
        frame.set_pixel(6, 4, [1, 2, 3, 4]);
        frame.set_pixel(3, 2, [10, 200, 30, 128]);

        write_frame(&path, &frame).unwrap();
        let back = read_frame(&path).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn test_rgb_file_gains_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        image::save_buffer(&path, &[9, 8, 7, 6, 5, 4], 2, 1, ExtendedColorType::Rgb8).unwrap();

        let frame = read_frame(&path).unwrap();
        assert_eq!(frame.size(), (2, 1));
        assert_eq!(frame.pixel(0, 0), [9, 8, 7, 255]);
        assert_eq!(frame.pixel(1, 0), [6, 5, 4, 255]);
    }

    #[test]
    fn test_read_missing_file() {
        let res = read_frame("no/such/frame.png");
        assert!(matches!(res, Err(IoError::Image(_))));
    }
}
