pub mod crop;
pub mod decode;
pub mod encode;
pub mod geometry;

pub use crop::crop_image;
pub use decode::decode_image;
pub use encode::encode_image;
pub use geometry::{CropRect, compute_crop_rect};
