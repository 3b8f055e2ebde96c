//! Session state and route guarding.
//!
//! The platform shell decides which layout and navigation to show from two
//! independent session facts: `authenticated` (a token is present) and
//! `broker_linked` (the user completed broker setup). The facts are never
//! inferred from which page happens to be open; the guard only consumes
//! them. Transitions are synchronous: they happen in response to auth
//! calls and navigation checks, with no timers involved.

mod auth;
mod guard;
mod service;
mod token;

pub use auth::{AuthError, AuthService, SignupRequest};
pub use guard::{
    GuardDecision, LayoutShell, NavItem, RouteGuard, SessionFacts, SessionState, visible_navigation,
};
pub use service::SessionService;
pub use token::{InMemoryTokenStore, TokenStore};
