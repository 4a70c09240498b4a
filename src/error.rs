//! Error taxonomy shared by every core operation

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Expected failure outcomes of core operations
///
/// The core never renders messages for end users; the HTTP layer decides
/// status codes and wording from the variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DashboardError {
    /// Unknown email or wrong password. Both cases are reported identically.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashboardError {
    pub fn event_not_found(id: impl Into<String>) -> Self {
        DashboardError::NotFound {
            entity: "Event",
            id: id.into(),
        }
    }

    pub fn user_not_found(id: impl Into<String>) -> Self {
        DashboardError::NotFound {
            entity: "User",
            id: id.into(),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::InvalidCredentials => "INVALID_CREDENTIALS",
            DashboardError::Unauthenticated => "UNAUTHENTICATED",
            DashboardError::Forbidden(_) => "FORBIDDEN",
            DashboardError::NotFound { .. } => "NOT_FOUND",
            DashboardError::InvalidArgument(_) => "INVALID_ARGUMENT",
            DashboardError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<bcrypt::BcryptError> for DashboardError {
    fn from(e: bcrypt::BcryptError) -> Self {
        DashboardError::Internal(format!("password hashing failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let err = DashboardError::event_not_found("42");
        assert_eq!(err.to_string(), "Event with id 42 not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_unauthenticated_and_forbidden_are_distinct() {
        let unauth = DashboardError::Unauthenticated;
        let forbidden = DashboardError::Forbidden("delete".to_string());
        assert_ne!(unauth.code(), forbidden.code());
    }
}
