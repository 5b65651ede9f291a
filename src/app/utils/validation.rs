use regex::Regex;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

/// Characters that would escape the output directory or truncate the name.
pub static UNSAFE_FILE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\\x00]").unwrap());

/// Rejects zero, negative, infinite and NaN values for `field`.
pub fn ensure_positive(field: &'static str, value: f32) -> Result<(), ValidationErrors> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }

    let mut error = ValidationError::new("range");
    error.add_param("value".into(), &value);

    let mut errors = ValidationErrors::new();
    errors.add(field, error);

    Err(errors)
}

pub fn field_error(field: &'static str, code: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code));
    errors
}

pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !UNSAFE_FILE_NAME_REGEX.is_match(name)
}
