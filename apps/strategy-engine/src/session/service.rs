//! Session service: the single writer for session facts.

use std::sync::Arc;
use std::sync::RwLock;

use super::guard::{GuardDecision, LayoutShell, RouteGuard, SessionFacts, SessionState};
use super::token::TokenStore;

/// Owns the session facts and applies transitions.
///
/// Login success lands in `LoggedInNoBroker`; a separate broker-link step
/// moves to `LoggedInWithBroker`; logout clears the token and both facts.
/// There is exactly one of these per application session.
pub struct SessionService {
    tokens: Arc<dyn TokenStore>,
    broker_linked: RwLock<bool>,
    guard: RouteGuard,
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl SessionService {
    /// Create a service over a token store.
    #[must_use]
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            tokens,
            broker_linked: RwLock::new(false),
            guard: RouteGuard::new(),
        }
    }

    /// Current session facts.
    #[must_use]
    pub fn facts(&self) -> SessionFacts {
        SessionFacts {
            authenticated: self.tokens.get_token().is_some(),
            broker_linked: *self.broker_linked.read().unwrap(),
        }
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.facts().state()
    }

    /// Record a successful login.
    pub fn login_succeeded(&self, token: String) {
        self.tokens.set_token(token);
        *self.broker_linked.write().unwrap() = false;
        tracing::info!(state = ?self.state(), "session transition: login");
    }

    /// Record broker setup completion.
    ///
    /// A no-op while logged out; linking requires a session.
    pub fn link_broker(&self) {
        if self.tokens.get_token().is_none() {
            tracing::warn!("broker link attempted without a session");
            return;
        }
        *self.broker_linked.write().unwrap() = true;
        tracing::info!(state = ?self.state(), "session transition: broker linked");
    }

    /// Log out: clear the token and reset the broker fact.
    pub fn logout(&self) {
        self.tokens.clear_token();
        *self.broker_linked.write().unwrap() = false;
        tracing::info!("session transition: logout");
    }

    /// Route-guard decision for a navigation to `path`.
    #[must_use]
    pub fn guard_route(&self, path: &str) -> GuardDecision {
        self.guard.evaluate(path, self.facts())
    }

    /// Shell selection for `path`.
    #[must_use]
    pub fn shell(&self, path: &str) -> LayoutShell {
        self.guard.shell(path)
    }
}
