pub mod config;
pub mod constants;
pub mod errors;
pub mod keys;
pub mod storage;
pub mod transform;

// 公開API
pub use config::CropConfig;
pub use constants::{
    DEFAULT_CONTAINER, DEFAULT_INPUT_PREFIX, DEFAULT_JPEG_QUALITY, DEFAULT_OUTPUT_PREFIX,
    DEFAULT_TARGET_SIDE,
};
pub use errors::{DecodeError, EncodeError, GeometryError, PipelineError, StorageError};
pub use keys::derive_output_key;
pub use storage::{ObjectStore, StorageHttpClient};
pub use transform::{CropRect, compute_crop_rect, crop_image, decode_image, encode_image};
