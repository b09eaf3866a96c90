use crate::utils::error::{CalcError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// 同一個按鍵不能同時綁定到兩個動作
pub fn validate_disjoint(field_name: &str, left: &[String], right: &[String]) -> Result<()> {
    let left_set: HashSet<&str> = left.iter().map(String::as_str).collect();

    if let Some(shared) = right.iter().find(|k| left_set.contains(k.as_str())) {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shared.clone(),
            reason: "Key is bound to more than one action".to_string(),
        });
    }
    Ok(())
}
