use crop_core::{
    CropConfig, ObjectStore, PipelineError, compute_crop_rect, crop_image, decode_image,
    derive_output_key, encode_image,
};

use crate::event::Notification;

/// バッチ全体を失敗させた通知とその原因
#[derive(Debug, thiserror::Error)]
#[error("processing failed for {container}/{key}: {source}")]
pub struct BatchFailure {
    pub container: String,
    pub key: String,
    #[source]
    pub source: PipelineError,
}

/// 通知バッチを到着順に処理し、書き込んだ出力キーを返す
///
/// 各通知は 取得 → デコード → 矩形計算 → クロップ → 再エンコード → 書き込み を
/// 順番に実行する。いずれかの通知が失敗した時点でバッチ全体を中断し、
/// 後続の通知には触れない（配信側の再配信に委ねる）。
/// 中断しても書き込み済みの出力はそのまま残る
pub async fn process_batch<S: ObjectStore>(
    store: &S,
    config: &CropConfig,
    batch: &[Notification],
) -> Result<Vec<String>, BatchFailure> {
    let mut stored = Vec::with_capacity(batch.len());

    for notification in batch {
        tracing::info!(key = %notification.key, "object processing - START");

        match process_one(store, config, notification).await {
            Ok(output_key) => {
                tracing::info!(key = %notification.key, output_key = %output_key, "object processing - SUCCESS");
                stored.push(output_key);
            }
            Err(error) => {
                tracing::error!(
                    container = %notification.container,
                    key = %notification.key,
                    error = %error,
                    "object processing - FAILED, aborting batch"
                );
                return Err(BatchFailure {
                    container: notification.container.clone(),
                    key: notification.key.clone(),
                    source: error,
                });
            }
        }
    }

    Ok(stored)
}

/// 1件の通知を処理して出力キーを返す
async fn process_one<S: ObjectStore>(
    store: &S,
    config: &CropConfig,
    notification: &Notification,
) -> Result<String, PipelineError> {
    let input = store
        .get_object(&notification.container, &notification.key)
        .await?;

    let (img, format) = decode_image(&input)?;
    let rect = compute_crop_rect(img.width(), img.height(), config.target_side);
    let cropped = crop_image(&img, &rect)?;
    let encoded = encode_image(&cropped, format)?;

    let output_key = derive_output_key(
        &notification.key,
        &config.input_prefix,
        &config.output_prefix,
    );

    store
        .put_object(
            &config.container,
            &output_key,
            encoded.into(),
            format.to_mime_type(),
        )
        .await?;

    Ok(output_key)
}
