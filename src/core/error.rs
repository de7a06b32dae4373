use thiserror::Error;

use crate::repositories::RepositoryError;

/// Business-rule violations raised by the use-case layer.
///
/// Storage faults pass through the `Repository` variant untouched; they are
/// never reinterpreted as domain violations. The transport layer owns the
/// mapping to user-visible responses.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced entity does not exist.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// The user is farther from the gym than the check-in geofence allows.
    #[error("check-in rejected: {distance_km:.3} km exceeds the {max_km} km radius")]
    MaxDistance { distance_km: f64, max_km: f64 },

    /// A check-in already exists for this user on this calendar day.
    #[error("max number of check-ins reached for the day")]
    MaxNumberOfCheckIns,

    /// Caller broke an input contract (e.g. a zero page number).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage fault, propagated as-is.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_distance_message_carries_both_distances() {
        let err = DomainError::MaxDistance {
            distance_km: 0.8514,
            max_km: 0.1,
        };
        let message = err.to_string();
        assert!(message.contains("0.851"));
        assert!(message.contains("0.1 km"));
    }

    #[test]
    fn test_repository_errors_pass_through_unchanged() {
        let source = RepositoryError::Query("connection reset".to_string());
        let err = DomainError::from(source);
        assert_eq!(err.to_string(), "storage query failed: connection reset");
    }
}
