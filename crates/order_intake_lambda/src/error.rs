use order_intake_core::contract::ValidationError;
use thiserror::Error;

use crate::adapters::order_store::StoreError;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntakeError {
    /// Caller-correctable failures; everything else is reported as a 500.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_failures_are_client_errors() {
        assert!(IntakeError::from(ValidationError::EmptyBody).is_validation());

        let store_failure = IntakeError::from(StoreError::Write {
            order_id: "order-1".to_string(),
            message: "throttled".to_string(),
        });
        assert!(!store_failure.is_validation());

        let serialization_failure = serde_json::from_str::<serde_json::Value>("{")
            .map_err(IntakeError::from)
            .expect_err("truncated JSON should fail");
        assert!(!serialization_failure.is_validation());
    }

    #[test]
    fn validation_message_passes_through() {
        let error = IntakeError::from(ValidationError::MissingFields(vec!["email"]));
        assert_eq!(error.to_string(), "Missing required fields: email");
    }
}
