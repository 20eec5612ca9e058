use thiserror::Error;

use crate::config::RESIZED_PREFIX;
use crate::notify::NotifyError;
use crate::storage::StorageError;
use crate::AppContext;
use resizer_core::{transform, validate_key, TransformError, ValidationError};

/// 1レコード処理のエラー
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),
}

impl From<ValidationError> for ProcessError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidKey(err.to_string())
    }
}

/// 1レコード分のパイプライン: 取得 → 変換 → 保存 → 成功通知
pub async fn process_record(
    ctx: &AppContext,
    bucket: &str,
    raw_key: &str,
) -> Result<(), ProcessError> {
    let key = decode_key(raw_key)?;
    validate_key(&key)?;

    tracing::info!(bucket = %bucket, key = %key, "downloading source object");
    let object = ctx.store.get(bucket, &key).await?;
    tracing::info!(
        key = %key,
        content_type = ?object.content_type,
        size = object.bytes.len(),
        "downloaded source object"
    );

    let output = transform(&object.bytes, &ctx.config.params)?;
    tracing::info!(
        key = %key,
        original_width = output.original_width,
        original_height = output.original_height,
        width = output.width,
        height = output.height,
        quality = ctx.config.params.quality,
        quality_applied = output.format.supports_quality(),
        "image resized"
    );

    let destination_key = destination_key(&key);
    ctx.store
        .put(
            &ctx.config.destination_bucket,
            &destination_key,
            output.bytes.clone(),
            output.format.content_type(),
        )
        .await?;
    tracing::info!(
        bucket = %ctx.config.destination_bucket,
        key = %destination_key,
        size = output.bytes.len(),
        "uploaded resized image"
    );

    ctx.notifier
        .publish_success(&key, &ctx.config.destination_bucket)
        .await?;

    Ok(())
}

/// S3 イベント通知のオブジェクトキーを URL デコードする
///
/// イベント内のキーはスペースが '+' に置き換えられたうえで
/// パーセントエンコードされている
fn decode_key(raw: &str) -> Result<String, ProcessError> {
    let plus_decoded = raw.replace('+', " ");

    urlencoding::decode(&plus_decoded)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| ProcessError::InvalidKey(format!("invalid URL encoding: {raw}")))
}

/// 出力バケット内のキーを組み立てる（`resized/` 配下に置く）
fn destination_key(key: &str) -> String {
    format!("{RESIZED_PREFIX}{key}")
}
