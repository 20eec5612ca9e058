use crate::errors::TransformError;

/// 縮小倍率を検証する
///
/// 有効範囲は (0, 1]。変換本体に渡る前に呼び出し側で検証する
pub fn validate_scale(scale: f64) -> Result<(), TransformError> {
    if !scale.is_finite() || scale <= 0.0 || scale > 1.0 {
        return Err(TransformError::InvalidParams(format!(
            "scale must be in (0, 1], got {scale}"
        )));
    }

    Ok(())
}

/// 品質を検証する
///
/// 有効範囲は [0, 100]。u8 への絞り込み前に範囲外を検出できるよう i64 を取る
pub fn validate_quality(quality: i64) -> Result<(), TransformError> {
    if !(0..=100).contains(&quality) {
        return Err(TransformError::InvalidParams(format!(
            "quality must be 0-100, got {quality}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_scale() {
        assert!(validate_scale(0.5).is_ok());
        assert!(validate_scale(1.0).is_ok());
        assert!(validate_scale(0.001).is_ok());
    }

    #[test]
    fn test_invalid_scale() {
        assert!(validate_scale(0.0).is_err());
        assert!(validate_scale(-0.5).is_err());
        assert!(validate_scale(1.5).is_err());
        assert!(validate_scale(f64::NAN).is_err());
        assert!(validate_scale(f64::INFINITY).is_err());
    }

    #[test]
    fn test_valid_quality() {
        assert!(validate_quality(0).is_ok());
        assert!(validate_quality(75).is_ok());
        assert!(validate_quality(100).is_ok());
    }

    #[test]
    fn test_invalid_quality() {
        assert!(validate_quality(-1).is_err());
        assert!(validate_quality(101).is_err());
        assert!(validate_quality(1000).is_err());
    }
}
