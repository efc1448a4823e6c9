//! Validation result type shared by the validator and its callers.

use serde::{Deserialize, Serialize};

/// Outcome of validating one raw input document.
///
/// Invariant: `is_valid` is true exactly when `errors` is empty, with one
/// carve-out — empty or whitespace-only input reports invalid with an empty
/// error list, since absence of data is not itself an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Character count of the raw input (not bytes).
    pub data_length: usize,
}

impl ValidationResult {
    /// Result for empty/whitespace-only input.
    pub fn empty_input() -> Self {
        Self {
            is_valid: false,
            errors: Vec::new(),
            data_length: 0,
        }
    }

    /// Result for non-empty input with the collected error list.
    pub fn from_errors(errors: Vec<String>, data_length: usize) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            data_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_shape() {
        let result = ValidationResult::empty_input();
        assert!(!result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.data_length, 0);
    }

    #[test]
    fn validity_tracks_error_list() {
        assert!(ValidationResult::from_errors(Vec::new(), 10).is_valid);
        assert!(!ValidationResult::from_errors(vec!["bad".to_string()], 10).is_valid);
    }
}
