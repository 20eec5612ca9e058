use crate::constants::{DEFAULT_QUALITY, DEFAULT_SCALE};
use image::ImageFormat;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Avif,
}

impl OutputFormat {
    /// デコード時に推測された元フォーマットから出力フォーマットを決定する
    ///
    /// 対応エンコーダのないフォーマット・フォーマット不明の場合は JPEG にフォールバック
    pub fn from_source(source: Option<ImageFormat>) -> Self {
        source.and_then(Self::from_image_format).unwrap_or(Self::Jpeg)
    }

    /// image クレートの ImageFormat から変換
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::WebP => Some(Self::WebP),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::Avif => Some(Self::Avif),
            _ => None,
        }
    }

    /// Content-Type を取得
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
            Self::Gif => "image/gif",
            Self::Avif => "image/avif",
        }
    }

    /// エンコーダが品質パラメータを受け付けるか
    ///
    /// PNG/GIF と（ロスレスの）WebP は品質指定なしでエンコードされる
    pub fn supports_quality(&self) -> bool {
        matches!(self, Self::Jpeg | Self::Avif)
    }
}

/// 変換パラメータ
///
/// scale は (0, 1]、quality は [0, 100] を前提とする。
/// 検証は呼び出し側（設定読み込み層）が validation モジュールで行う。
#[derive(Debug, Clone)]
pub struct TransformParams {
    pub scale: f64,
    pub quality: u8,
}

impl TransformParams {
    /// 未指定の値にデフォルトを補完してパラメータを作成
    pub fn new(scale: Option<f64>, quality: Option<u8>) -> Self {
        Self {
            scale: scale.unwrap_or(DEFAULT_SCALE),
            quality: quality.unwrap_or(DEFAULT_QUALITY),
        }
    }
}
