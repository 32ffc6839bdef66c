pub mod camera;
pub mod error;
pub mod frame;
pub mod mapping;

pub use camera::{
    EquirectangularCamera, OmniCamera, PixelMetric, RigOrientation, SphereProjection,
    SpherePoint, SphereUnprojection,
};
pub use error::{ConfigurationError, E2oError, ProjectionError, Result};
pub use frame::{Frame, Rgba};
pub use mapping::{
    CorrespondenceTable, MappingConfig, MappingContext, PixelQuantization, SourcePixel,
    apply_table, build_table, map_pixel,
};
