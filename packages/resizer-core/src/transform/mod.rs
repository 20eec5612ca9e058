pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod params;
pub mod resize;

pub use decode::decode_image;
pub use dimensions::scaled_dimensions;
pub use encode::encode_image;
pub use params::{OutputFormat, TransformParams};
pub use resize::resize_image;

use crate::errors::TransformError;
use bytes::Bytes;

/// 変換結果
///
/// エンコード済みバイト列と、呼び出し側のログ出力用の変換前後の寸法を持つ
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub bytes: Bytes,
    pub format: OutputFormat,
    pub original_width: u32,
    pub original_height: u32,
    pub width: u32,
    pub height: u32,
}

/// 画像バイト列を縮小・再エンコードする
///
/// デコード → 寸法計算 → リサイズ → 再エンコードの単発パイプライン。
/// 出力フォーマットは元のコンテナフォーマットを維持し、判別不能な場合は JPEG。
/// scale と quality の検証は呼び出し側の責務（validation モジュール参照）。
/// 寸法が変わらない場合もメタデータ削除のため再エンコードは必ず行う。
pub fn transform(
    input: &[u8],
    params: &TransformParams,
) -> Result<TransformOutput, TransformError> {
    let (img, source_format) = decode_image(input)?;

    let (src_w, src_h) = (img.width(), img.height());
    let (dst_w, dst_h) = scaled_dimensions(src_w, src_h, params.scale);

    let resized = if dst_w != src_w || dst_h != src_h {
        resize_image(&img, dst_w, dst_h)?
    } else {
        img
    };

    let format = OutputFormat::from_source(source_format);
    let encoded = encode_image(&resized, format, params.quality)?;

    Ok(TransformOutput {
        bytes: Bytes::from(encoded),
        format,
        original_width: src_w,
        original_height: src_h,
        width: dst_w,
        height: dst_h,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, ImageReader, RgbImage};
    use std::io::Cursor;

    fn gradient_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    fn encode_as(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    fn decode_output(output: &TransformOutput) -> (DynamicImage, Option<ImageFormat>) {
        let reader = ImageReader::new(Cursor::new(output.bytes.as_ref()))
            .with_guessed_format()
            .unwrap();
        let format = reader.format();
        (reader.decode().unwrap(), format)
    }

    #[test]
    fn test_transform_jpeg_half_scale() {
        // 1000x800 JPEG を 50% に縮小
        let input = {
            let img = gradient_image(1000, 800);
            let mut buf = Cursor::new(Vec::new());
            img.to_rgb8()
                .write_with_encoder(image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut buf, 90,
                ))
                .unwrap();
            buf.into_inner()
        };
        let params = TransformParams::new(Some(0.5), Some(75));

        let output = transform(&input, &params).unwrap();
        assert_eq!(output.original_width, 1000);
        assert_eq!(output.original_height, 800);
        assert_eq!(output.width, 500);
        assert_eq!(output.height, 400);
        assert_eq!(output.format, OutputFormat::Jpeg);
        // 典型的な写真的画像では出力は入力より小さくなる
        assert!(output.bytes.len() < input.len());

        let (decoded, format) = decode_output(&output);
        assert_eq!(decoded.width(), 500);
        assert_eq!(decoded.height(), 400);
        assert_eq!(format, Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_transform_preserves_png_format() {
        let input = encode_as(&gradient_image(64, 48), ImageFormat::Png);
        let params = TransformParams::new(Some(0.5), Some(75));

        let output = transform(&input, &params).unwrap();
        assert_eq!(output.format, OutputFormat::Png);
        assert_eq!(output.width, 32);
        assert_eq!(output.height, 24);

        let (_, format) = decode_output(&output);
        assert_eq!(format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_transform_identity_scale() {
        // scale=1.0 では寸法は変わらない（再エンコードのみ）
        let input = encode_as(&gradient_image(33, 17), ImageFormat::Png);
        let params = TransformParams::new(Some(1.0), None);

        let output = transform(&input, &params).unwrap();
        assert_eq!(output.width, 33);
        assert_eq!(output.height, 17);

        let (decoded, _) = decode_output(&output);
        assert_eq!(decoded.width(), 33);
        assert_eq!(decoded.height(), 17);
    }

    #[test]
    fn test_transform_clamps_to_one_pixel() {
        // 3x3 PNG を 10% に縮小 → 1x1 にクランプ、エラーなし
        let input = encode_as(&gradient_image(3, 3), ImageFormat::Png);
        let params = TransformParams::new(Some(0.1), None);

        let output = transform(&input, &params).unwrap();
        assert_eq!(output.width, 1);
        assert_eq!(output.height, 1);

        let (decoded, _) = decode_output(&output);
        assert_eq!(decoded.width(), 1);
        assert_eq!(decoded.height(), 1);
    }

    #[test]
    fn test_transform_corrupted_input() {
        let input = b"this is not an image at all";
        let params = TransformParams::new(None, None);

        let result = transform(input, &params);
        assert!(matches!(result.unwrap_err(), TransformError::Decode(_)));
    }

    #[test]
    fn test_transform_truncated_input() {
        // 先頭だけ正しい PNG シグネチャを持つ切り詰められたバイト列
        let mut input = encode_as(&gradient_image(32, 32), ImageFormat::Png);
        input.truncate(24);
        let params = TransformParams::new(None, None);

        let result = transform(&input, &params);
        assert!(matches!(result.unwrap_err(), TransformError::Decode(_)));
    }
}
