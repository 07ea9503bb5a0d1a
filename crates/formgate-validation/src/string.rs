//! String validation functions

use crate::messages;

/// Validates that a value is present. Only the empty string fails;
/// whitespace-only values pass.
pub fn validate_required(s: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(messages::REQUIRED.to_string())
    } else {
        Ok(())
    }
}

/// Validates minimum length in characters
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(messages::min_length(min))
    }
}

/// Validates maximum length in characters
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(messages::max_length(max))
    }
}
