use crate::constants::DEFAULT_JPEG_QUALITY;
use crate::errors::EncodeError;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

/// デコード時に検出したフォーマットのまま画像を再エンコードする
pub fn encode_image(img: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    let mut buf = Cursor::new(Vec::new());

    match format {
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buf, DEFAULT_JPEG_QUALITY);
            img.to_rgb8()
                .write_with_encoder(encoder)
                .map_err(|e| EncodeError(format!("JPEG encode failed: {e}")))?;
        }
        ImageFormat::WebP => {
            // image クレートの WebP エンコーダはロスレスのみ対応
            let encoder = WebPEncoder::new_lossless(&mut buf);
            img.write_with_encoder(encoder)
                .map_err(|e| EncodeError(format!("WebP encode failed: {e}")))?;
        }
        _ => {
            img.write_to(&mut buf, format)
                .map_err(|e| EncodeError(format!("{format:?} encode failed: {e}")))?;
        }
    }

    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::crop::crop_image;
    use crate::transform::decode::decode_image;
    use crate::transform::geometry::compute_crop_rect;

    #[test]
    fn test_encode_jpeg() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, ImageFormat::Jpeg).unwrap();

        assert!(!data.is_empty());
        // JPEG マジックナンバー確認
        assert_eq!(&data[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, ImageFormat::Png).unwrap();

        assert!(!data.is_empty());
        // PNG マジックナンバー確認
        assert_eq!(&data[0..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_webp() {
        let img = DynamicImage::new_rgb8(10, 10);
        let data = encode_image(&img, ImageFormat::WebP).unwrap();

        assert!(!data.is_empty());
        // WebP は RIFF コンテナ
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[test]
    fn test_format_preserved_through_pipeline() {
        // デコード → クロップ → 再エンコードでフォーマットが保存される
        let img = DynamicImage::new_rgb8(10, 8);
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();

        let (decoded, format) = decode_image(buf.get_ref()).unwrap();
        assert_eq!(format, ImageFormat::Png);

        let rect = compute_crop_rect(decoded.width(), decoded.height(), 4);
        let cropped = crop_image(&decoded, &rect).unwrap();
        let encoded = encode_image(&cropped, format).unwrap();

        let (reread, reread_format) = decode_image(&encoded).unwrap();
        assert_eq!(reread_format, ImageFormat::Png);
        assert_eq!(reread.width(), 4);
        assert_eq!(reread.height(), 4);
    }
}
