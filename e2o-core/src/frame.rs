use crate::error::{E2oError, Result};
use ndarray::{Array3, Axis};

/// Bytes per pixel: RGBA, one byte per channel
pub const CHANNELS: usize = 4;

pub type Rgba = [u8; CHANNELS];

/// RGBA raster stored as a `(height, width, 4)` array in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    data: Array3<u8>,
}

impl Frame {
    /// Create a black, fully transparent frame
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Create a frame with every pixel set to `pixel`
    pub fn filled(width: usize, height: usize, pixel: Rgba) -> Self {
        let mut frame = Self::new(width, height);
        frame.fill(pixel);
        frame
    }

    /// Wrap interleaved RGBA bytes
    pub fn from_rgba(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let data = Array3::from_shape_vec((height, width, CHANNELS), bytes).map_err(|e| {
            E2oError::InvalidInput(format!("RGBA buffer does not fit {width}x{height}: {e}"))
        })?;
        Ok(Self { data })
    }

    /// Wrap an array of shape `(height, width, 4)`. Non-contiguous arrays
    /// are copied into standard layout.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        if data.shape()[2] != CHANNELS {
            return Err(E2oError::InvalidInput(format!(
                "expected {CHANNELS} channels, got {}",
                data.shape()[2]
            )));
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// Get frame dimensions (width, height)
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn pixel(&self, u: usize, v: usize) -> Rgba {
        let mut px = [0; CHANNELS];
        for (c, value) in px.iter_mut().enumerate() {
            *value = self.data[[v, u, c]];
        }
        px
    }

    pub fn set_pixel(&mut self, u: usize, v: usize, pixel: Rgba) {
        for (c, value) in pixel.iter().enumerate() {
            self.data[[v, u, c]] = *value;
        }
    }

    pub fn fill(&mut self, pixel: Rgba) {
        for mut px in self.data.lanes_mut(Axis(2)) {
            for (c, value) in pixel.iter().enumerate() {
                px[c] = *value;
            }
        }
    }

    /// Interleaved RGBA bytes, row-major
    pub fn as_bytes(&self) -> Result<&[u8]> {
        self.data
            .as_slice()
            .ok_or_else(|| E2oError::InvalidInput("frame is not contiguous".to_string()))
    }

    pub fn as_bytes_mut(&mut self) -> Result<&mut [u8]> {
        self.data
            .as_slice_mut()
            .ok_or_else(|| E2oError::InvalidInput("frame is not contiguous".to_string()))
    }

    pub fn into_rgba(self) -> Vec<u8> {
        let (bytes, _offset) = self.data.into_raw_vec_and_offset();
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_dimensions() {
        let frame = Frame::new(640, 320);
        assert_eq!(frame.size(), (640, 320));
        assert_eq!(frame.as_bytes().unwrap().len(), 640 * 320 * 4);
        assert_eq!(frame.pixel(639, 319), [0, 0, 0, 0]);
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut frame = Frame::new(4, 3);
        frame.set_pixel(2, 1, [10, 20, 30, 255]);
        assert_eq!(frame.pixel(2, 1), [10, 20, 30, 255]);

        // Row-major interleaved layout
        let offset = (4 + 2) * CHANNELS;
        assert_eq!(&frame.as_bytes().unwrap()[offset..offset + 4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_filled() {
        let frame = Frame::filled(5, 2, [255, 255, 255, 255]);
        assert!(frame.as_bytes().unwrap().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_from_rgba_rejects_wrong_length() {
        let res = Frame::from_rgba(4, 4, vec![0; 4 * 4 * 3]);
        assert!(matches!(res, Err(E2oError::InvalidInput(_))));

        let frame = Frame::from_rgba(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(frame.pixel(1, 0), [5, 6, 7, 8]);
        assert_eq!(frame.into_rgba(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_array_rejects_three_channels() {
        let res = Frame::from_array(Array3::zeros((2, 2, 3)));
        assert!(res.is_err());
    }

    #[test]
    fn test_from_array_makes_standard_layout() {
        let mut data = Array3::<u8>::zeros((3, 2, CHANNELS));
        data[[2, 1, 0]] = 9;
        // Swapping the spatial axes leaves the buffer in column-major order
        let swapped = data.permuted_axes([1, 0, 2]);
        assert!(!swapped.is_standard_layout());

        let frame = Frame::from_array(swapped).unwrap();
        assert_eq!(frame.size(), (3, 2));
        assert!(frame.as_bytes().is_ok());
        assert_eq!(frame.pixel(2, 1), [9, 0, 0, 0]);
    }
}
