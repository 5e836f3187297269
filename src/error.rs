//! Error types for portal data operations.
//!
//! Every condition here is recoverable by correcting user input; nothing in
//! the in-memory data core is fatal. Validation and not-found conditions are
//! returned as typed errors so a UI layer can surface feedback instead of
//! silently dropping the operation.

use thiserror::Error;

use crate::types::ScriptStatus;

#[derive(Debug, Error)]
pub enum PortalError {
    // Input validation
    #[error("Invalid contact '{0}': expected a phone number or email address")]
    InvalidContact(String),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid duration '{0}': expected m:ss")]
    InvalidDuration(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Lookup
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    // Script lifecycle
    #[error("Cannot move script from {} to {}", from.as_str(), to.as_str())]
    InvalidTransition {
        from: ScriptStatus,
        to: ScriptStatus,
    },

    // Infrastructure
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State lock poisoned")]
    LockPoisoned,
}

impl PortalError {
    /// Returns true if this error came from rejecting user input, as opposed
    /// to an internal condition (poisoned lock, unreadable config).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PortalError::InvalidContact(_)
                | PortalError::MissingField(_)
                | PortalError::InvalidDuration(_)
                | PortalError::InvalidCredentials
                | PortalError::InvalidTransition { .. }
        )
    }

    /// Get a user-facing recovery suggestion.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortalError::InvalidContact(_) => {
                "Enter a phone number like +1-555-123-4567 or an email address."
            }
            PortalError::MissingField(_) => "Fill in the missing field and try again.",
            PortalError::InvalidDuration(_) => "Use m:ss format, e.g. 3:24.",
            PortalError::InvalidCredentials => "Check your email and password.",
            PortalError::NotFound { .. } => "The record may have been deleted. Refresh the list.",
            PortalError::InvalidTransition { .. } => {
                "Archived scripts cannot change status. Duplicate the script instead."
            }
            PortalError::Config(_) => "Check ~/.oronno/portal.json for syntax errors.",
            PortalError::LockPoisoned => "Restart the portal.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(PortalError::InvalidContact("x".into()).is_validation());
        assert!(PortalError::MissingField("reason").is_validation());
        assert!(!PortalError::NotFound {
            entity: "alert",
            id: 9
        }
        .is_validation());
        assert!(!PortalError::LockPoisoned.is_validation());
    }

    #[test]
    fn display_includes_context() {
        let err = PortalError::NotFound {
            entity: "script",
            id: 4,
        };
        assert_eq!(err.to_string(), "script 4 not found");
    }
}
