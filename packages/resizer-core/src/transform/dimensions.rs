/// 縮小後の寸法を計算する
///
/// 各軸で `max(1, floor(dim * scale))`。床関数の後に 1px へクランプするため、
/// scale がどれだけ小さくても出力が 0 になることはない。
pub fn scaled_dimensions(src_w: u32, src_h: u32, scale: f64) -> (u32, u32) {
    let new_w = (src_w as f64 * scale).floor() as u32;
    let new_h = (src_h as f64 * scale).floor() as u32;

    // 最小1pxを保証
    (new_w.max(1), new_h.max(1))
}
