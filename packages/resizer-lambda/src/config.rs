use resizer_core::{validate_quality, validate_scale, TransformParams};
use thiserror::Error;

/// 必須の環境変数
const ENV_DESTINATION_BUCKET: &str = "DESTINATION_BUCKET_NAME";
const ENV_TOPIC_ARN: &str = "SNS_TOPIC_ARN";

/// 任意の環境変数（不正な値は警告してデフォルトを使用）
const ENV_RESIZE_PERCENTAGE: &str = "RESIZE_PERCENTAGE";
const ENV_JPEG_QUALITY: &str = "JPEG_QUALITY";

/// 出力キーのプレフィックス
pub const RESIZED_PREFIX: &str = "resized/";

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} environment variable is not set")]
    MissingVar { name: &'static str },
}

/// 起動時に環境変数から読み込まれる設定
#[derive(Debug, Clone)]
pub struct Config {
    pub destination_bucket: String,
    pub topic_arn: String,
    pub params: TransformParams,
}

impl Config {
    /// 環境変数から設定を読み込む
    ///
    /// 出力バケットと SNS トピックは必須。縮小率と品質は任意で、
    /// 不正な値は警告ログを出してデフォルト（50% / 75）に置き換える。
    /// デフォルト置換はここで完結し、変換処理には検証済みの値だけが渡る。
    pub fn from_env() -> Result<Self, ConfigError> {
        let destination_bucket = require_var(ENV_DESTINATION_BUCKET)?;
        let topic_arn = require_var(ENV_TOPIC_ARN)?;

        let scale = match std::env::var(ENV_RESIZE_PERCENTAGE) {
            Ok(raw) => match parse_scale(&raw) {
                Ok(scale) => Some(scale),
                Err(err) => {
                    tracing::warn!(
                        value = %raw,
                        error = %err,
                        "invalid RESIZE_PERCENTAGE, using default 50%"
                    );
                    None
                }
            },
            Err(_) => None,
        };

        let quality = match std::env::var(ENV_JPEG_QUALITY) {
            Ok(raw) => match parse_quality(&raw) {
                Ok(quality) => Some(quality),
                Err(err) => {
                    tracing::warn!(
                        value = %raw,
                        error = %err,
                        "invalid JPEG_QUALITY, using default 75"
                    );
                    None
                }
            },
            Err(_) => None,
        };

        Ok(Self {
            destination_bucket,
            topic_arn,
            params: TransformParams::new(scale, quality),
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar { name })
}

/// 百分率文字列を (0, 1] の縮小倍率へ変換する
fn parse_scale(raw: &str) -> Result<f64, String> {
    let percentage: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {raw}"))?;

    let scale = percentage / 100.0;
    validate_scale(scale).map_err(|e| e.to_string())?;

    Ok(scale)
}

/// 品質文字列を [0, 100] の整数へ変換する
fn parse_quality(raw: &str) -> Result<u8, String> {
    let quality: i64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("not an integer: {raw}"))?;

    validate_quality(quality).map_err(|e| e.to_string())?;

    Ok(quality as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("50").unwrap(), 0.5);
        assert_eq!(parse_scale("100").unwrap(), 1.0);
        assert_eq!(parse_scale(" 25 ").unwrap(), 0.25);
    }

    #[test]
    fn test_parse_scale_invalid() {
        assert!(parse_scale("0").is_err());
        assert!(parse_scale("-10").is_err());
        assert!(parse_scale("150").is_err());
        assert!(parse_scale("abc").is_err());
        assert!(parse_scale("").is_err());
    }

    #[test]
    fn test_parse_quality() {
        assert_eq!(parse_quality("75").unwrap(), 75);
        assert_eq!(parse_quality("0").unwrap(), 0);
        assert_eq!(parse_quality("100").unwrap(), 100);
    }

    #[test]
    fn test_parse_quality_invalid() {
        assert!(parse_quality("-1").is_err());
        assert!(parse_quality("101").is_err());
        assert!(parse_quality("75.5").is_err());
        assert!(parse_quality("high").is_err());
    }

    #[test]
    fn test_from_env_missing_vars() {
        // 環境変数が設定されていない場合はエラー
        let result = Config::from_env();
        assert!(result.is_err());
    }
}
