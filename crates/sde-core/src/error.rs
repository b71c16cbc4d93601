//! Centralized error types for the sequence editor backend.

use thiserror::Error;

/// Main error type for diagram entity operations.
#[derive(Error, Debug)]
pub enum SdeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to create {0}")]
    CreateFailed(&'static str),

    #[error("Store error: {0}")]
    Store(#[from] sde_graph::StoreError),
}

/// Result type for diagram entity operations.
pub type SdeResult<T> = Result<T, SdeError>;

impl SdeError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Reject empty or whitespace-only required names before any store access.
pub(crate) fn ensure_name(name: &str, entity: &str) -> SdeResult<()> {
    if name.trim().is_empty() {
        return Err(SdeError::validation(format!(
            "{entity} name must be a non-empty string"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        assert!(ensure_name("", "participant").is_err());
        assert!(ensure_name("   ", "package").is_err());
        assert!(ensure_name("Alice", "participant").is_ok());
    }

    #[test]
    fn create_failed_names_the_entity_kind() {
        let err = SdeError::CreateFailed("participant");
        assert_eq!(err.to_string(), "Failed to create participant");
    }
}
