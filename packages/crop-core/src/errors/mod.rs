pub mod types;

pub use types::{DecodeError, EncodeError, GeometryError, PipelineError, StorageError};
