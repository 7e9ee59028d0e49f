pub mod client;

pub use client::StorageHttpClient;
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;

use async_trait::async_trait;
use bytes::Bytes;

/// オブジェクトストアへの読み書き
///
/// バッチ処理はこのインターフェース越しにストレージへアクセスする
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// コンテナとキーを指定してオブジェクトを取得する
    async fn get_object(&self, container: &str, key: &str) -> Result<Bytes, StorageError>;

    /// コンテナとキーを指定してオブジェクトを書き込む
    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
