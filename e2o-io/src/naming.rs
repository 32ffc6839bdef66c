use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "png";

/// File names of a numbered image sequence.
///
/// Inputs are `NNNNNN.<ext>` (six digits), outputs `oNNNN.<ext>` (letter
/// `o` and four digits), both inside the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    directory: PathBuf,
    extension: String,
}

impl FrameNaming {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self::with_extension(directory, DEFAULT_EXTENSION)
    }

    pub fn with_extension<P: AsRef<Path>>(directory: P, extension: &str) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            extension: extension.to_string(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn input_path(&self, index: u32) -> PathBuf {
        self.directory
            .join(format!("{:06}.{}", index, self.extension))
    }

    pub fn output_path(&self, index: u32) -> PathBuf {
        self.directory
            .join(format!("o{:04}.{}", index, self.extension))
    }
}
