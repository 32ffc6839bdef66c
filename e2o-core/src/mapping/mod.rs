//! Correspondence table construction and application

mod apply;
mod builder;
mod context;
mod table;

pub use apply::apply_table;
pub use builder::{MappingConfig, PixelQuantization, build_table, map_pixel};
pub use context::MappingContext;
pub use table::{CorrespondenceTable, SourcePixel};
