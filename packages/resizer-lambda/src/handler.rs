use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{json, Value};

use crate::record::process_record;
use crate::AppContext;

/// S3 イベントを処理する Lambda ハンドラ
///
/// 1回の呼び出しに複数レコードが含まれうるため、レコードごとに独立して処理し、
/// 失敗は個別に通知してバッチ全体は中断しない。
/// 1件でも失敗があれば最後に呼び出し自体を失敗として返す。
pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    ctx: &AppContext,
) -> Result<Value, Error> {
    let records = event.payload.records;
    if records.is_empty() {
        tracing::warn!("S3 event contained no records");
    }

    let total = records.len();
    let mut failed = 0usize;

    for record in &records {
        let Some((bucket, raw_key, size)) = record_location(record) else {
            tracing::error!("invalid S3 event record structure, skipping record");
            continue;
        };

        tracing::info!(bucket = %bucket, key = %raw_key, size = ?size, "processing record");

        if let Err(err) = process_record(ctx, &bucket, &raw_key).await {
            failed += 1;
            tracing::error!(bucket = %bucket, key = %raw_key, error = %err, "failed to process record");

            if let Err(notify_err) = ctx
                .notifier
                .publish_failure(&raw_key, &bucket, &err.to_string())
                .await
            {
                tracing::error!(error = %notify_err, "failed to publish error notification");
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} of {total} records failed").into());
    }

    Ok(json!({
        "statusCode": 200,
        "body": "Image processing complete for all records!",
    }))
}

/// レコードからバケット名・オブジェクトキー・サイズを取り出す
///
/// 必須フィールドが欠けたレコードは None（呼び出し側でスキップする）
fn record_location(record: &S3EventRecord) -> Option<(String, String, Option<i64>)> {
    let bucket = record.s3.bucket.name.clone()?;
    let key = record.s3.object.key.clone()?;

    Some((bucket, key, record.s3.object.size))
}
