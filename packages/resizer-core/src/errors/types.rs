use thiserror::Error;

/// 画像変換エラー
///
/// `Decode` と `Encode` は transform 本体が返す。
/// `InvalidParams` は呼び出し側のパラメータ検証でのみ発生する。
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),
}

/// オブジェクトキー検証エラー
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);
