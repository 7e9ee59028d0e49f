use crate::errors::DecodeError;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::io::Cursor;

/// 画像バイト列をデコードし、DynamicImage と検出フォーマットを返す
///
/// フォーマットを判定できない場合は UnknownFormat、
/// 判定後にデコードへ失敗した場合は Corrupt
pub fn decode_image(input: &[u8]) -> Result<(DynamicImage, ImageFormat), DecodeError> {
    let reader = ImageReader::new(Cursor::new(input))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupt(format!("failed to guess format: {e}")))?;

    let format = reader.format().ok_or(DecodeError::UnknownFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::Corrupt(e.to_string()))?;

    Ok((img, format))
}
