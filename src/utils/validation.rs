use crate::utils::error::{HelloError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// A name must fit on one output line.
pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value contains null bytes".to_string(),
        });
    }

    if value.contains(['\n', '\r']) {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }

    Ok(())
}

pub fn validate_sum_in_range(field_name: &str, a: i64, b: i64) -> Result<()> {
    if a.checked_add(b).is_none() {
        return Err(HelloError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} + {}", a, b),
            reason: "Sum overflows a 64-bit integer".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("greeting.name", "Bazel").is_ok());
        assert!(validate_single_line("greeting.name", "").is_ok());
        assert!(validate_single_line("greeting.name", "  spaced  ").is_ok());
        assert!(validate_single_line("greeting.name", "two\nlines").is_err());
        assert!(validate_single_line("greeting.name", "cr\r").is_err());
        assert!(validate_single_line("greeting.name", "nul\0").is_err());
    }

    #[test]
    fn test_validate_sum_in_range() {
        assert!(validate_sum_in_range("addition", 5, 3).is_ok());
        assert!(validate_sum_in_range("addition", i64::MIN, i64::MAX).is_ok());

        match validate_sum_in_range("addition", i64::MAX, 1) {
            Err(HelloError::InvalidConfigValueError { field, .. }) => assert_eq!(field, "addition"),
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }
}
