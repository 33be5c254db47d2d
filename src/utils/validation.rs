use crate::utils::error::{CompareError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_optional_non_empty(field_name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(v) => validate_non_empty_string(field_name, v),
        None => Ok(()),
    }
}
