use crate::errors::TransformError;
use fast_image_resize::{images::Image, FilterType, PixelType, ResizeOptions, Resizer};
use image::DynamicImage;

/// 画像をリサイズする
///
/// fast_image_resize の Lanczos3 フィルタで高品質なダウンサンプリングを行う
pub fn resize_image(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<DynamicImage, TransformError> {
    // RGB8 に変換
    let rgb_img = img.to_rgb8();
    let width = rgb_img.width();
    let height = rgb_img.height();

    let src_image = Image::from_vec_u8(width, height, rgb_img.into_raw(), PixelType::U8x3)
        .map_err(|e| TransformError::Encode(format!("failed to create source image: {e}")))?;

    let mut dst_image = Image::new(target_w, target_h, PixelType::U8x3);

    let mut resizer = Resizer::new();
    resizer
        .resize(
            &src_image,
            &mut dst_image,
            &ResizeOptions::new().resize_alg(fast_image_resize::ResizeAlg::Convolution(
                FilterType::Lanczos3,
            )),
        )
        .map_err(|e| TransformError::Encode(format!("resize failed: {e}")))?;

    // DynamicImage に変換
    let resized_rgb = image::RgbImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| TransformError::Encode("failed to convert resized image".to_string()))?;

    Ok(DynamicImage::ImageRgb8(resized_rgb))
}
