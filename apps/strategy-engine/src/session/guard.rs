//! Route guard and navigation visibility.

use serde::{Deserialize, Serialize};

/// Session lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    /// No token present.
    LoggedOut,
    /// Authenticated but broker setup incomplete.
    LoggedInNoBroker,
    /// Authenticated with a linked broker.
    LoggedInWithBroker,
}

/// The two independent facts the guard consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFacts {
    /// A token is present.
    pub authenticated: bool,
    /// Broker setup has been completed.
    pub broker_linked: bool,
}

impl SessionFacts {
    /// Collapse the facts into a session state.
    ///
    /// `broker_linked` without `authenticated` cannot happen through the
    /// service (logout clears both); it collapses to `LoggedOut`.
    #[must_use]
    pub const fn state(self) -> SessionState {
        match (self.authenticated, self.broker_linked) {
            (false, _) => SessionState::LoggedOut,
            (true, false) => SessionState::LoggedInNoBroker,
            (true, true) => SessionState::LoggedInWithBroker,
        }
    }
}

/// Outcome of a route-guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// No token on a protected route.
    RedirectToLogin,
    /// Token present on an auth route.
    RedirectToDashboard,
}

/// Which application shell to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutShell {
    /// Full shell with the trading sidebar.
    Sidebar,
    /// Bare shell for auth pages.
    Bare,
}

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display name.
    pub name: &'static str,
    /// Route path.
    pub href: &'static str,
}

const fn nav(name: &'static str, href: &'static str) -> NavItem {
    NavItem { name, href }
}

/// Items shown to everyone.
static PUBLIC_NAV: [NavItem; 2] = [nav("Home", "/"), nav("Contact", "/contact")];

/// Trading items, visible once a broker is linked.
static TRADING_NAV: [NavItem; 10] = [
    nav("Dashboard", "/dashboard"),
    nav("Strategies", "/strategies"),
    nav("Charts", "/charts"),
    nav("Options", "/options"),
    nav("Options Strategies", "/options-strategies"),
    nav("Watchlist", "/watchlist"),
    nav("Positions", "/positions"),
    nav("Orders", "/orders"),
    nav("Set Alerts", "/set-alerts"),
    nav("Position Adjustment", "/position-adjustment"),
];

/// Account items, visible when logged in.
static ACCOUNT_NAV: [NavItem; 3] = [
    nav("Account Settings", "/settings"),
    nav("Billing & Plans", "/billing"),
    nav("Help & Support", "/help"),
];

/// Routes that require a token.
static PROTECTED_ROUTES: [&str; 10] = [
    "/dashboard",
    "/strategies",
    "/charts",
    "/options",
    "/options-strategies",
    "/watchlist",
    "/positions",
    "/orders",
    "/set-alerts",
    "/position-adjustment",
];

/// Routes rendered in the bare shell; a logged-in user is bounced off them.
static AUTH_ROUTES: [&str; 3] = ["/login", "/register", "/auth"];

/// Stateless route-guard rules.
///
/// Checks run on every route change; there is nothing to cancel or retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Create the guard.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decide what to do with a navigation to `path`.
    #[must_use]
    pub fn evaluate(&self, path: &str, facts: SessionFacts) -> GuardDecision {
        if !facts.authenticated && Self::is_protected(path) {
            return GuardDecision::RedirectToLogin;
        }
        if facts.authenticated && Self::is_auth_route(path) {
            return GuardDecision::RedirectToDashboard;
        }
        GuardDecision::Allow
    }

    /// Shell selection for `path`.
    #[must_use]
    pub fn shell(&self, path: &str) -> LayoutShell {
        if Self::is_auth_route(path) {
            LayoutShell::Bare
        } else {
            LayoutShell::Sidebar
        }
    }

    fn is_protected(path: &str) -> bool {
        PROTECTED_ROUTES.iter().any(|p| path.starts_with(p))
    }

    fn is_auth_route(path: &str) -> bool {
        AUTH_ROUTES.iter().any(|p| path.starts_with(p))
    }
}

/// Navigation visible for a session state.
#[must_use]
pub fn visible_navigation(state: SessionState) -> Vec<NavItem> {
    let mut items: Vec<NavItem> = PUBLIC_NAV.to_vec();
    if matches!(state, SessionState::LoggedInWithBroker) {
        items.extend_from_slice(&TRADING_NAV);
    }
    if matches!(
        state,
        SessionState::LoggedInNoBroker | SessionState::LoggedInWithBroker
    ) {
        items.extend_from_slice(&ACCOUNT_NAV);
    }
    items
}
