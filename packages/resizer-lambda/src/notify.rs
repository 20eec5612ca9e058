use thiserror::Error;

const SUCCESS_SUBJECT: &str = "Image Resizing Success Notification";
const FAILURE_SUBJECT: &str = "Image Resizing Error Notification";

/// 通知エラー
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("publish failed: {0}")]
    Publish(String),
}

/// SNS トピックへ処理結果を通知するクライアント
#[derive(Clone)]
pub struct Notifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl Notifier {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }

    /// 成功通知を発行する
    pub async fn publish_success(
        &self,
        key: &str,
        destination_bucket: &str,
    ) -> Result<(), NotifyError> {
        let message =
            format!("Image {key} has been resized and uploaded to {destination_bucket}.");

        self.publish(&message, SUCCESS_SUBJECT).await?;
        tracing::info!(key = %key, "success notification published");

        Ok(())
    }

    /// 失敗通知を発行する
    ///
    /// 詳細を残すためメッセージ本文は JSON にする
    pub async fn publish_failure(
        &self,
        key: &str,
        source_bucket: &str,
        error: &str,
    ) -> Result<(), NotifyError> {
        let message = failure_message(key, source_bucket, error);

        self.publish(&message, FAILURE_SUBJECT).await?;
        tracing::info!(key = %key, "error notification published");

        Ok(())
    }

    async fn publish(&self, message: &str, subject: &str) -> Result<(), NotifyError> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .subject(subject)
            .send()
            .await
            .map_err(|e| NotifyError::Publish(e.into_service_error().to_string()))?;

        Ok(())
    }
}

fn failure_message(key: &str, source_bucket: &str, error: &str) -> String {
    let body = serde_json::json!({
        "statusCode": 500,
        "error": format!("Failed to process {key} from {source_bucket}. Error: {error}"),
        "key": key,
        "source_bucket": source_bucket,
    });

    // json! が生成する値の整形は失敗しない
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
}
