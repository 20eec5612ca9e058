/// デフォルト縮小倍率（50%）
pub const DEFAULT_SCALE: f64 = 0.5;

/// デフォルト品質（0-100、JPEG/AVIF のみ有効）
pub const DEFAULT_QUALITY: u8 = 75;

/// オブジェクトキーの最大長
pub const MAX_KEY_LENGTH: usize = 1024;
