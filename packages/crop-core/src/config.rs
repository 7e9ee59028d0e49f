use crate::constants::{
    DEFAULT_CONTAINER, DEFAULT_INPUT_PREFIX, DEFAULT_OUTPUT_PREFIX, DEFAULT_TARGET_SIDE,
};

/// クロップパイプラインの設定
///
/// 元は埋め込み定数だった値を明示的な設定として外部化したもの。
/// バッチ処理の構築時に渡す
#[derive(Debug, Clone)]
pub struct CropConfig {
    /// 出力先コンテナ名
    pub container: String,
    /// 入力キープレフィックス
    pub input_prefix: String,
    /// 出力キープレフィックス
    pub output_prefix: String,
    /// クロップ後の正方形の一辺（px）
    pub target_side: u32,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            input_prefix: DEFAULT_INPUT_PREFIX.to_string(),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            target_side: DEFAULT_TARGET_SIDE,
        }
    }
}

impl CropConfig {
    /// 環境変数から CropConfig を作成する
    ///
    /// 任意の環境変数（未設定時はデフォルト値）:
    /// - TARGET_CONTAINER
    /// - INPUT_PREFIX
    /// - OUTPUT_PREFIX
    /// - TARGET_SIDE
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let container = std::env::var("TARGET_CONTAINER").unwrap_or(defaults.container);
        let input_prefix = std::env::var("INPUT_PREFIX").unwrap_or(defaults.input_prefix);
        let output_prefix = std::env::var("OUTPUT_PREFIX").unwrap_or(defaults.output_prefix);

        let target_side = match std::env::var("TARGET_SIDE") {
            Ok(value) => value
                .parse::<u32>()
                .map_err(|_| format!("TARGET_SIDE must be a positive integer, got {value}"))?,
            Err(_) => defaults.target_side,
        };

        // 一辺は正の整数のみ
        if target_side == 0 {
            return Err("TARGET_SIDE must be a positive integer, got 0".to_string());
        }

        Ok(Self {
            container,
            input_prefix,
            output_prefix,
            target_side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CropConfig::default();

        assert_eq!(config.container, "photos");
        assert_eq!(config.input_prefix, "input/");
        assert_eq!(config.output_prefix, "output/");
        assert_eq!(config.target_side, 600);
    }
}
