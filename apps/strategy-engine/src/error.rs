//! Error handling for the strategy engine.
//!
//! The error taxonomy is intentionally shallow because the core is pure
//! computation: a missing quote degrades to a zero price, an unknown strategy
//! id yields an absent result, and nothing in the calculator aborts. The types
//! here exist for the boundaries around the core - request validation, session
//! checks, and store lookups - and carry enough context for the HTTP layer to
//! map them onto status codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for the strategy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (400)
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Quantity outside the accepted lot range.
    InvalidQuantity,

    // Not found errors (404)
    /// Strategy id not in the catalog.
    UnknownStrategy,
    /// Position not found.
    PositionNotFound,
    /// Alert not found.
    AlertNotFound,

    // Auth errors (401; surfaced as redirect query codes by the frontend)
    /// Credentials did not match any account.
    InvalidCredentials,
    /// Login failed for a reason other than bad credentials.
    LoginFailed,
    /// Password and confirmation did not match.
    PasswordsDontMatch,
    /// Signup failed.
    SignupFailed,
    /// Request requires an authenticated session.
    Unauthorized,

    // Internal errors (500)
    /// Unexpected server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidRequest | Self::InvalidQuantity | Self::PasswordsDontMatch => 400,
            Self::InvalidCredentials | Self::LoginFailed | Self::Unauthorized => 401,
            Self::UnknownStrategy | Self::PositionNotFound | Self::AlertNotFound => 404,
            Self::SignupFailed => 422,
            Self::InternalError => 500,
        }
    }

    /// The error reason string, matching the redirect query codes the
    /// auth flow has always surfaced (e.g. `invalid_credentials`).
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidQuantity => "invalid_quantity",
            Self::UnknownStrategy => "unknown_strategy",
            Self::PositionNotFound => "position_not_found",
            Self::AlertNotFound => "alert_not_found",
            Self::InvalidCredentials => "invalid_credentials",
            Self::LoginFailed => "login_failed",
            Self::PasswordsDontMatch => "passwords_dont_match",
            Self::SignupFailed => "signup_failed",
            Self::Unauthorized => "unauthorized",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// An engine error with context.
#[derive(Debug, Error)]
pub struct EngineError {
    /// Error code.
    code: ErrorCode,
    /// Human-readable message.
    message: String,
    /// Additional context (key-value pairs).
    context: Vec<(String, String)>,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Convert to an HTTP-compatible error response body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            details: self.context.iter().cloned().collect(),
        }
    }

    /// Unknown strategy id.
    #[must_use]
    pub fn unknown_strategy(strategy_id: &str) -> Self {
        Self::new(
            ErrorCode::UnknownStrategy,
            format!("Strategy '{strategy_id}' is not in the catalog"),
        )
        .with_context("strategy_id", strategy_id)
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Position not found.
    #[must_use]
    pub fn position_not_found(position_id: &str) -> Self {
        Self::new(
            ErrorCode::PositionNotFound,
            format!("Position {position_id} not found"),
        )
        .with_context("position_id", position_id)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.reason(), self.message)
    }
}

/// HTTP-compatible error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Additional details.
    pub details: std::collections::HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), 400);
        assert_eq!(ErrorCode::InvalidCredentials.http_status(), 401);
        assert_eq!(ErrorCode::UnknownStrategy.http_status(), 404);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_reason_matches_redirect_codes() {
        // These strings are the query-parameter error codes the auth flow
        // has always used; the API keeps them stable.
        assert_eq!(ErrorCode::InvalidCredentials.reason(), "invalid_credentials");
        assert_eq!(ErrorCode::PasswordsDontMatch.reason(), "passwords_dont_match");
        assert_eq!(ErrorCode::SignupFailed.reason(), "signup_failed");
    }

    #[test]
    fn test_engine_error_creation() {
        let error = EngineError::new(ErrorCode::InvalidRequest, "Bad request")
            .with_context("field", "quantity")
            .with_context("value", "-1");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Bad request");
        assert_eq!(error.context().len(), 2);
    }

    #[test]
    fn test_to_http_response() {
        let error = EngineError::unknown_strategy("foo-bar");
        let response = error.to_http_response();

        assert_eq!(response.code, "unknown_strategy");
        assert!(response.details.contains_key("strategy_id"));
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::invalid_request("Missing field");
        assert_eq!(error.to_string(), "[invalid_request] Missing field");
    }
}
