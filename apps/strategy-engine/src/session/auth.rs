//! Mock authentication flow.
//!
//! The platform has no real backend: logins are checked against a fixed
//! demo account list after a fixed-duration pause that stands in for the
//! network round trip. Failures map onto the same error codes the frontend
//! has always consumed as redirect query parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::ErrorCode;

/// Demo accounts accepted by the mock login.
static DEMO_ACCOUNTS: [(&str, &str); 4] = [
    ("admin@algofax.com", "admin123"),
    ("john@example.com", "password"),
    ("demo@demo.com", "demo"),
    ("test@test.com", "test123"),
];

/// Authentication errors, mirroring the frontend's redirect codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Credentials did not match a demo account.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// Login failed for a reason other than bad credentials.
    #[error("login failed")]
    LoginFailed,
    /// Password and confirmation did not match.
    #[error("passwords don't match")]
    PasswordsDontMatch,
    /// Signup failed.
    #[error("signup failed")]
    SignupFailed,
}

impl AuthError {
    /// The engine error code for this failure.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidCredentials => ErrorCode::InvalidCredentials,
            Self::LoginFailed => ErrorCode::LoginFailed,
            Self::PasswordsDontMatch => ErrorCode::PasswordsDontMatch,
            Self::SignupFailed => ErrorCode::SignupFailed,
        }
    }
}

/// Signup form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password confirmation.
    pub confirm_password: String,
}

/// The mock authentication service.
#[derive(Debug, Clone)]
pub struct AuthService {
    simulated_latency: Duration,
}

impl AuthService {
    /// Create a service with the given simulated network latency.
    #[must_use]
    pub const fn new(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }

    /// Check credentials against the demo account list.
    ///
    /// Success mints an opaque session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no demo account
    /// matches.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        tokio::time::sleep(self.simulated_latency).await;

        let valid = DEMO_ACCOUNTS
            .iter()
            .any(|(e, p)| *e == email && *p == password);
        if !valid {
            tracing::info!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(email, "login successful");
        Ok(Uuid::new_v4().to_string())
    }

    /// Validate a signup request.
    ///
    /// Nothing is persisted; a valid request simply succeeds so the
    /// frontend can show its `account_created` banner.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordsDontMatch`] when the confirmation
    /// differs, [`AuthError::SignupFailed`] when required fields are empty.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), AuthError> {
        if request.password != request.confirm_password {
            return Err(AuthError::PasswordsDontMatch);
        }

        tokio::time::sleep(self.simulated_latency).await;

        if request.email.is_empty() || request.password.is_empty() {
            return Err(AuthError::SignupFailed);
        }

        tracing::info!(email = %request.email, "signup accepted");
        Ok(())
    }
}
