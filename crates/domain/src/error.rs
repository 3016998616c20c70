//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ShopError`]
//! via `#[from]` or by boxing into the `Storage` variant.

/// Top-level error type shared by services, adapters, and handlers.
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// A domain invariant was violated by the caller's input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested entity does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The storage backend failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` must not be empty.
    #[error("name must not be empty")]
    EmptyName,

    /// `price` must not be negative.
    #[error("price must not be negative")]
    NegativePrice,
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Human-readable entity kind (`"Category"`, `"Product"`, `"Review"`).
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Product",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Product 42 not found");
    }

    #[test]
    fn should_convert_validation_error_into_shop_error() {
        let err: ShopError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            ShopError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_convert_not_found_error_into_shop_error() {
        let err: ShopError = NotFoundError {
            entity: "Review",
            id: "1".to_string(),
        }
        .into();
        assert!(matches!(err, ShopError::NotFound(_)));
    }
}
