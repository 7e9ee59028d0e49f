use thiserror::Error;

/// クロップパイプラインの統合エラー型
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// 画像デコードエラー
#[derive(Debug, Error)]
pub enum DecodeError {
    /// フォーマットを判定できない場合は即時に失敗させる
    #[error("image format could not be determined")]
    UnknownFormat,

    #[error("decode failed: {0}")]
    Corrupt(String),
}

/// クロップ矩形エラー
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "crop rectangle ({x}, {y}) {width}x{height} is outside the {source_width}x{source_height} source"
    )]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        source_width: u32,
        source_height: u32,
    },
}

/// 画像エンコードエラー
#[derive(Debug, Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

/// ストレージアクセスエラー
///
/// NotFound（オブジェクト不在）と Transient（I/O 起因、再配信で回復し得る）を区別する
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {container}/{key}")]
    NotFound { container: String, key: String },

    #[error("storage error: {0}")]
    Transient(String),
}
