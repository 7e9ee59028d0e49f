use crate::errors::StorageError;
use crate::storage::ObjectStore;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

/// オブジェクトストアの HTTP ゲートウェイクライアント
///
/// `{base_url}/{container}/{key}` に対してオブジェクトの取得・書き込みを行う
#[derive(Clone)]
pub struct StorageHttpClient {
    client: Client,
    base_url: String,
}

impl StorageHttpClient {
    /// 新しい StorageHttpClient を作成する
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 環境変数から StorageHttpClient を作成する
    ///
    /// 必須の環境変数:
    /// - STORAGE_URL
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            std::env::var("STORAGE_URL").map_err(|_| "STORAGE_URL is not set".to_string())?;

        Ok(Self::new(base_url))
    }

    fn object_url(&self, container: &str, key: &str) -> String {
        format!("{}/{}/{}", self.base_url, container, key)
    }
}

#[async_trait]
impl ObjectStore for StorageHttpClient {
    async fn get_object(&self, container: &str, key: &str) -> Result<Bytes, StorageError> {
        let url = self.object_url(container, key);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StorageError::Transient(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            reqwest::StatusCode::NOT_FOUND => {
                return Err(StorageError::NotFound {
                    container: container.to_string(),
                    key: key.to_string(),
                });
            }
            status => {
                tracing::error!(container = %container, key = %key, status = %status, "unexpected response from storage");
                return Err(StorageError::Transient(format!(
                    "unexpected status: {status}"
                )));
            }
        }

        let data = response
            .bytes()
            .await
            .map_err(|e| StorageError::Transient(e.to_string()))?;

        Ok(data)
    }

    async fn put_object(
        &self,
        container: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let url = self.object_url(container, key);

        let response = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(container = %container, key = %key, status = %status, "storage write rejected");
            return Err(StorageError::Transient(format!(
                "unexpected status: {status}"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client() {
        let client = StorageHttpClient::new("https://storage.example.com/".to_string());

        // 末尾のスラッシュが削除される
        assert_eq!(client.base_url, "https://storage.example.com");
    }

    #[test]
    fn test_object_url() {
        let client = StorageHttpClient::new("https://storage.example.com".to_string());

        assert_eq!(
            client.object_url("photos", "input/photo.png"),
            "https://storage.example.com/photos/input/photo.png"
        );
    }

    #[test]
    fn test_from_env_missing_vars() {
        // 環境変数が設定されていない場合はエラー
        let result = StorageHttpClient::from_env();
        assert!(result.is_err());
    }
}
