/// Equirectangular pixel an output pixel samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePixel {
    pub u: u32,
    pub v: u32,
}

impl SourcePixel {
    /// Stored for output pixels with no valid source
    pub const SENTINEL: SourcePixel = SourcePixel { u: 0, v: 0 };

    pub fn new(u: u32, v: u32) -> Self {
        Self { u, v }
    }
}

/// Dense omni pixel → equirectangular pixel lookup, one entry per output
/// pixel in row-major order.
///
/// Every entry lies inside the input image it was built for.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrespondenceTable {
    output_width: usize,
    output_height: usize,
    input_width: usize,
    input_height: usize,
    entries: Vec<SourcePixel>,
    sentinel_count: usize,
}

impl CorrespondenceTable {
    pub(super) fn from_entries(
        output_size: (usize, usize),
        input_size: (usize, usize),
        entries: Vec<SourcePixel>,
        sentinel_count: usize,
    ) -> Self {
        debug_assert_eq!(entries.len(), output_size.0 * output_size.1);
        Self {
            output_width: output_size.0,
            output_height: output_size.1,
            input_width: input_size.0,
            input_height: input_size.1,
            entries,
            sentinel_count,
        }
    }

    /// Output (omnidirectional) dimensions (width, height)
    pub fn output_size(&self) -> (usize, usize) {
        (self.output_width, self.output_height)
    }

    /// Input (equirectangular) dimensions (width, height)
    pub fn input_size(&self) -> (usize, usize) {
        (self.input_width, self.input_height)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SourcePixel] {
        &self.entries
    }

    /// Entry for output pixel (u, v), `None` outside the output image
    pub fn get(&self, u: usize, v: usize) -> Option<SourcePixel> {
        if u >= self.output_width || v >= self.output_height {
            return None;
        }
        self.entries.get(v * self.output_width + u).copied()
    }

    /// Number of output pixels that had no valid source and hold the sentinel
    pub fn sentinel_count(&self) -> usize {
        self.sentinel_count
    }
}
