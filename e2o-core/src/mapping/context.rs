use super::apply::apply_table;
use super::builder::{MappingConfig, build_table};
use super::table::CorrespondenceTable;
use crate::camera::{EquirectangularCamera, OmniCamera, SphereProjection, SphereUnprojection};
use crate::error::Result;
use crate::frame::Frame;
use log::debug;

/// Camera models, configuration and the correspondence table built from
/// them. Built once per run and then applied to every frame.
#[derive(Debug, Clone)]
pub struct MappingContext<O = OmniCamera, E = EquirectangularCamera> {
    omni: O,
    equi: E,
    config: MappingConfig,
    table: CorrespondenceTable,
}

impl<O, E> MappingContext<O, E>
where
    O: SphereUnprojection,
    E: SphereProjection,
{
    pub fn build(config: MappingConfig, omni: O, equi: E) -> Result<Self> {
        let table = build_table(&config, &omni, &equi)?;
        Ok(Self {
            omni,
            equi,
            config,
            table,
        })
    }

    pub fn table(&self) -> &CorrespondenceTable {
        &self.table
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    pub fn omni(&self) -> &O {
        &self.omni
    }

    pub fn equi(&self) -> &E {
        &self.equi
    }

    /// Output (omnidirectional) dimensions (width, height)
    pub fn output_size(&self) -> (usize, usize) {
        self.table.output_size()
    }

    /// Input (equirectangular) dimensions (width, height)
    pub fn input_size(&self) -> (usize, usize) {
        self.table.input_size()
    }

    /// A blank frame of the output size, to be reused with [`Self::apply_into`]
    pub fn output_frame(&self) -> Frame {
        let (width, height) = self.output_size();
        Frame::new(width, height)
    }

    /// Map `input` into a newly allocated output frame
    pub fn apply(&self, input: &Frame) -> Result<Frame> {
        let mut output = self.output_frame();
        self.apply_into(input, &mut output)?;
        Ok(output)
    }

    /// Map `input` into `output`, overwriting every pixel
    pub fn apply_into(&self, input: &Frame, output: &mut Frame) -> Result<()> {
        debug!("mapping {:?} frame to {:?}", input.size(), output.size());
        apply_table(&self.table, input, output)
    }
}
