//! Validation errors raised while turning request bodies into records.

use thiserror::Error;

/// A request body that cannot become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or blank
    #[error("{field} is required")]
    Required { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Required { field: "name" };
        assert_eq!(err.to_string(), "name is required");
    }
}
