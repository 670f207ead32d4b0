use crate::utils::error::{FormError, Result};
use regex::Regex;
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::InvalidSchemaValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names(field_name: &str, names: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(FormError::InvalidSchemaValueError {
                field: field_name.to_string(),
                value: name.clone(),
                reason: "Duplicate field name".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_pattern(field_name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FormError::InvalidSchemaValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regex pattern: {}", e),
    })
}

pub fn validate_bounds(field_name: &str, min: Option<usize>, max: Option<usize>) -> Result<()> {
    if let (Some(min_len), Some(max_len)) = (min, max) {
        if min_len > max_len {
            return Err(FormError::InvalidSchemaValueError {
                field: field_name.to_string(),
                value: format!("min={}, max={}", min_len, max_len),
                reason: "min cannot be greater than max".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_field_reference(field_name: &str, target: &str, declared: &[String]) -> Result<()> {
    if !declared.iter().any(|name| name == target) {
        return Err(FormError::InvalidSchemaValueError {
            field: field_name.to_string(),
            value: target.to_string(),
            reason: "References a field that is not declared in the schema".to_string(),
        });
    }
    Ok(())
}
