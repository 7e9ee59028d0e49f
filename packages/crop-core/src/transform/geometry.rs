/// クロップ矩形
///
/// 原点はソース寸法が一辺より小さい場合に負になり得るため符号付きで保持する。
/// 算出値はクランプしない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// 中央クロップの矩形を計算する
///
/// 各軸のクロップ幅は min(ソース寸法, target_side)、
/// 原点は floor((ソース寸法 - target_side) / 2)
pub fn compute_crop_rect(source_width: u32, source_height: u32, target_side: u32) -> CropRect {
    CropRect {
        x: center_origin(source_width, target_side),
        y: center_origin(source_height, target_side),
        width: source_width.min(target_side),
        height: source_height.min(target_side),
    }
}

fn center_origin(dimension: u32, target_side: u32) -> i64 {
    // div_euclid で負数も床方向に丸める
    (i64::from(dimension) - i64::from(target_side)).div_euclid(2)
}
