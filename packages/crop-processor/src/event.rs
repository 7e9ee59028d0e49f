use serde::Deserialize;

/// オブジェクト作成イベントのエンベロープ（S3 互換の通知形式）
#[derive(Debug, Deserialize)]
pub struct ObjectCreatedEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub s3: Option<S3Entity>,
}

#[derive(Debug, Deserialize)]
pub struct S3Entity {
    pub bucket: S3Bucket,
    pub object: S3Object,
}

#[derive(Debug, Deserialize)]
pub struct S3Bucket {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct S3Object {
    pub key: String,
}

/// バッチ内の1件の通知
#[derive(Debug, Clone)]
pub struct Notification {
    /// 作成元コンテナ名
    pub container: String,
    /// オブジェクトキー（デコード済み）
    pub key: String,
}

impl ObjectCreatedEvent {
    /// レコードを到着順の Notification に変換する
    ///
    /// s3 エンティティを持たないレコードは読み飛ばす。
    /// キーはエンベロープ内で URL エンコードされているためデコードする
    pub fn notifications(&self) -> Vec<Notification> {
        self.records
            .iter()
            .filter_map(|record| record.s3.as_ref())
            .map(|s3| Notification {
                container: s3.bucket.name.clone(),
                key: decode_key(&s3.object.key),
            })
            .collect()
    }
}

fn decode_key(key: &str) -> String {
    match urlencoding::decode(key) {
        Ok(decoded) => decoded.into_owned(),
        // デコードできないキーは原文のまま扱う
        Err(_) => key.to_string(),
    }
}
