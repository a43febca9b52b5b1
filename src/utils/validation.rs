use crate::utils::error::{Result, ShelfError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed: &[&str]) -> Result<()> {
    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed.contains(&extension) => Ok(()),
        Some(extension) => Err(ShelfError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed.join(", ")
            ),
        }),
        None => Err(ShelfError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

/// Inclusive range check. Written with explicit comparisons so NaN fails
/// rather than slipping through a negated test.
pub fn validate_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if min <= value && value <= max {
        Ok(())
    } else {
        Err(ShelfError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "Dune").is_ok());
        assert!(validate_non_empty_string("title", "").is_err());
        assert!(validate_non_empty_string("title", "   ").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("import", "books.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("import", "books.txt", &["csv"]).is_err());
        assert!(validate_file_extension("import", "books", &["csv"]).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("rating", 0.0, 0.0, 5.0).is_ok());
        assert!(validate_range("rating", 5.0, 0.0, 5.0).is_ok());
        assert!(validate_range("rating", 5.01, 0.0, 5.0).is_err());
        assert!(validate_range("rating", -0.1, 0.0, 5.0).is_err());
        assert!(validate_range("rating", f64::NAN, 0.0, 5.0).is_err());
        assert!(validate_range("rating", f64::INFINITY, 0.0, 5.0).is_err());
    }
}
