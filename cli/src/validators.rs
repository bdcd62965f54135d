use crate::errors::CliError;

/// Treats a blank value the same as a missing one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Rejects a missing or blank name. A valid name is sent exactly as typed.
pub fn validate_group_name(name: Option<String>) -> Result<String, CliError> {
    non_empty(name).ok_or_else(|| CliError::Validation("name cannot be empty.".to_string()))
}

/// Ids end up as URL path segments, so they must name exactly one segment.
pub fn validate_id(kind: &str, id: &str) -> Result<(), CliError> {
    match id.trim() {
        "" => Err(CliError::Validation(format!("{kind} id cannot be empty."))),
        "." | ".." => Err(CliError::Validation(format!("invalid {kind} id: {id}"))),
        _ => Ok(()),
    }
}
