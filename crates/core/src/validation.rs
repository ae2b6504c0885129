//! Input validation for work order writes.
//!
//! All checks return [`CoreError::Validation`] naming the offending field.

use std::collections::HashSet;

use crate::error::CoreError;

/// Maximum length of a work order id.
pub const MAX_ID_LEN: usize = 64;
/// Maximum length of a work order name.
pub const MAX_NAME_LEN: usize = 255;

/// Validate that a text field is non-blank and within `max_len` characters.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be blank")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate the fields of a new work order.
pub fn validate_new_work_order(
    id: &str,
    name: &str,
    priority: &str,
    product_type: &str,
) -> Result<(), CoreError> {
    validate_text(id, "id", MAX_ID_LEN)?;
    validate_text(name, "name", MAX_NAME_LEN)?;
    validate_text(priority, "priority", MAX_NAME_LEN)?;
    validate_text(product_type, "productType", MAX_NAME_LEN)?;
    Ok(())
}

/// Validate the ids of a reorder request.
///
/// The request must name at least one work order and no id may repeat.
/// Position values are not range-checked.
pub fn validate_reorder_ids<'a, I>(ids: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(
                "work order id must not be blank".to_string(),
            ));
        }
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "work order {id} appears more than once"
            )));
        }
    }
    if seen.is_empty() {
        return Err(CoreError::Validation(
            "work_orders must contain at least one entry".to_string(),
        ));
    }
    Ok(())
}
