use crate::utils::error::{EtlError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Rejects configurations that would overwrite the input with the output.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(EtlError::InvalidConfigValue {
            field: "output.path".to_string(),
            value: output.to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(EtlError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "data/stores.json").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "   ").is_err());
        assert!(validate_path("input.path", "bad\0path.json").is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("in.json", "out.json").is_ok());
        assert!(validate_distinct_paths("in.json", "in.json").is_err());
        // Path comparison ignores redundant separators
        assert!(validate_distinct_paths("data/in.json", "data//in.json").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("output.indent", 4usize, 0, 16).is_ok());
        assert!(validate_range("output.indent", 0usize, 0, 16).is_ok());
        assert!(validate_range("output.indent", 17usize, 0, 16).is_err());
    }
}
