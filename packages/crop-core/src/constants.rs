/// クロップ後の正方形の一辺（px）
pub const DEFAULT_TARGET_SIDE: u32 = 600;

/// 入力オブジェクトのキープレフィックス
pub const DEFAULT_INPUT_PREFIX: &str = "input/";

/// 出力オブジェクトのキープレフィックス
pub const DEFAULT_OUTPUT_PREFIX: &str = "output/";

/// 出力先コンテナのデフォルト名
pub const DEFAULT_CONTAINER: &str = "photos";

/// JPEG 再エンコード時の品質（1-100）
pub const DEFAULT_JPEG_QUALITY: u8 = 80;
