use crate::constants::MAX_KEY_LENGTH;
use crate::errors::ValidationError;

/// オブジェクトキーを検証する
///
/// URL デコード済みのキーを前提に、パストラバーサルと制御文字を検出する
pub fn validate_key(key: &str) -> Result<(), ValidationError> {
    // 空文字チェック
    if key.is_empty() {
        return Err(ValidationError("key is empty".to_string()));
    }

    // 長さチェック
    if key.len() > MAX_KEY_LENGTH {
        return Err(ValidationError(format!(
            "key is too long (max {MAX_KEY_LENGTH})"
        )));
    }

    // パストラバーサル防止
    if key.contains("..") || key.starts_with('/') || key.contains("//") || key.contains('\\') {
        return Err(ValidationError("path traversal detected".to_string()));
    }

    // 制御文字の検出
    if key.chars().any(char::is_control) {
        return Err(ValidationError("control characters in key".to_string()));
    }

    Ok(())
}
