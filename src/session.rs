//! Operator login. The backing identity provider is stubbed, but the call
//! keeps the latency and validation shape of the real exchange.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

use crate::dnc;
use crate::error::PortalError;

/// Simulated round-trip to the identity provider.
const LOGIN_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub email: String,
    pub started_at: DateTime<Utc>,
}

/// Authenticate an operator. The email must look like an email and the
/// password must be non-empty; anything else is rejected after the same
/// delay a real provider would impose.
pub async fn login(email: &str, password: &str) -> Result<Session, PortalError> {
    let email = email.trim();
    sleep(Duration::from_millis(LOGIN_DELAY_MS)).await;

    if !dnc::is_email(email) || password.is_empty() {
        return Err(PortalError::InvalidCredentials);
    }

    Ok(Session {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        started_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn login_accepts_valid_credentials() {
        let session = login("operator@oronno.com", "hunter2").await.unwrap();
        assert_eq!(session.email, "operator@oronno.com");
        assert!(!session.id.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn login_rejects_bad_email_and_empty_password() {
        assert!(matches!(
            login("not-an-email", "hunter2").await,
            Err(PortalError::InvalidCredentials)
        ));
        assert!(matches!(
            login("operator@oronno.com", "").await,
            Err(PortalError::InvalidCredentials)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn login_trims_the_email() {
        let session = login("  operator@oronno.com  ", "pw").await.unwrap();
        assert_eq!(session.email, "operator@oronno.com");
    }
}
