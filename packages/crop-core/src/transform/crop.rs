use crate::errors::GeometryError;
use crate::transform::geometry::CropRect;
use image::DynamicImage;

/// 矩形でクロップした新しい画像を返す
///
/// 矩形がソース境界に収まらない場合は OutOfBounds。
/// 算出された原点が負のケース（ソースが一辺より小さい）もここで弾く
pub fn crop_image(img: &DynamicImage, rect: &CropRect) -> Result<DynamicImage, GeometryError> {
    let source_width = img.width();
    let source_height = img.height();

    let within = rect.x >= 0
        && rect.y >= 0
        && rect.x + i64::from(rect.width) <= i64::from(source_width)
        && rect.y + i64::from(rect.height) <= i64::from(source_height);

    if !within {
        return Err(GeometryError::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            source_width,
            source_height,
        });
    }

    Ok(img.crop_imm(rect.x as u32, rect.y as u32, rect.width, rect.height))
}
