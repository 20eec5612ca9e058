pub mod constants;
pub mod errors;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{DEFAULT_QUALITY, DEFAULT_SCALE, MAX_KEY_LENGTH};
pub use errors::{TransformError, ValidationError};
pub use transform::{
    decode_image, encode_image, resize_image, scaled_dimensions, transform, OutputFormat,
    TransformOutput, TransformParams,
};
pub use validation::{validate_key, validate_quality, validate_scale};
