//! HTTP/JSON API implementation.
//!
//! A REST surface for the dashboard frontend: strategy catalog and
//! analysis, the chain snapshot, session/auth flow, positions, and alerts.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::alerts::{Alert, AlertCondition, AlertKind, AlertStore};
use crate::chain::{OptionChainPort, OptionChainSnapshot};
use crate::error::{EngineError, ErrorCode};
use crate::events::{Notification, NotificationBus, NotificationKind};
use crate::positions::{PositionRecord, PositionRepositoryPort};
use crate::session::{
    AuthService, GuardDecision, LayoutShell, NavItem, SessionService, SessionState, SignupRequest,
    visible_navigation,
};
use crate::strategy::{StrategyAnalysis, StrategyAnalyzer, StrategyDefinition, catalog};

/// Upper bound on lots per request, matching the order form.
const MAX_QUANTITY: u32 = 100;

/// Shared state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The strategy analyzer.
    pub analyzer: StrategyAnalyzer,
    /// Chain snapshot provider.
    pub chain: Arc<dyn OptionChainPort>,
    /// Mock auth service.
    pub auth: Arc<AuthService>,
    /// Session state machine.
    pub session: Arc<SessionService>,
    /// Position store.
    pub positions: Arc<dyn PositionRepositoryPort>,
    /// Alert store.
    pub alerts: Arc<AlertStore>,
    /// Notification bus.
    pub bus: NotificationBus,
    /// Default lot quantity when a request omits one.
    pub lot_size: u32,
    /// Engine version string.
    pub version: String,
}

/// Create the Axum router with all endpoints.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/strategies", get(list_strategies))
        .route("/v1/analyze", post(analyze_strategy))
        .route("/v1/chain", get(get_chain))
        .route("/v1/positions", get(list_positions).post(execute_strategy))
        .route("/v1/positions/{id}/close", post(close_position))
        .route("/v1/auth/login", post(login))
        .route("/v1/auth/signup", post(signup))
        .route("/v1/auth/logout", post(logout))
        .route("/v1/session", get(get_session))
        .route("/v1/session/guard", post(guard_route))
        .route("/v1/session/broker", post(link_broker))
        .route("/v1/alerts", get(list_alerts).post(create_alert))
        .route("/v1/alerts/{id}", delete(delete_alert))
        .route("/v1/alerts/evaluate", post(evaluate_alerts))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

/// Strategy catalog endpoint.
async fn list_strategies() -> Json<&'static [StrategyDefinition]> {
    Json(catalog())
}

/// Request to analyze a strategy.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Strategy id (e.g. `"long-straddle"`).
    pub strategy_id: String,
    /// Lot quantity; defaults to the configured lot size.
    pub quantity: Option<u32>,
}

/// Analyze endpoint.
async fn analyze_strategy(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<StrategyAnalysis>, ApiError> {
    let quantity = validated_quantity(req.quantity, state.lot_size)?;
    let snapshot = state.chain.snapshot().await;

    tracing::info!(strategy_id = %req.strategy_id, quantity, "analyzing strategy");

    let analysis = state
        .analyzer
        .analyze_by_id(&req.strategy_id, &snapshot, quantity)
        .ok_or_else(|| ApiError::from_error(EngineError::unknown_strategy(&req.strategy_id)))?;

    Ok(Json(analysis))
}

/// Chain snapshot endpoint.
async fn get_chain(State(state): State<AppState>) -> Json<OptionChainSnapshot> {
    Json(state.chain.snapshot().await)
}

/// List positions endpoint.
async fn list_positions(State(state): State<AppState>) -> Result<Json<Vec<PositionRecord>>, ApiError> {
    let positions = state
        .positions
        .list()
        .await
        .map_err(|e| ApiError::from_error(EngineError::internal(e.to_string())))?;
    Ok(Json(positions))
}

/// Request to execute a strategy into a position.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// Strategy id.
    pub strategy_id: String,
    /// Lot quantity; defaults to the configured lot size.
    pub quantity: Option<u32>,
}

/// Execute endpoint: analyze, persist a position, notify.
async fn execute_strategy(
    State(state): State<AppState>,
    Json(req): Json<ExecuteRequest>,
) -> Result<(StatusCode, Json<PositionRecord>), ApiError> {
    if !state.session.facts().authenticated {
        return Err(ApiError::from_error(EngineError::new(
            ErrorCode::Unauthorized,
            "Executing a strategy requires a session",
        )));
    }

    let quantity = validated_quantity(req.quantity, state.lot_size)?;
    let snapshot = state.chain.snapshot().await;

    let analysis = state
        .analyzer
        .analyze_by_id(&req.strategy_id, &snapshot, quantity)
        .ok_or_else(|| ApiError::from_error(EngineError::unknown_strategy(&req.strategy_id)))?;

    let position = PositionRecord::open(&analysis, quantity);
    state
        .positions
        .save(&position)
        .await
        .map_err(|e| ApiError::from_error(EngineError::internal(e.to_string())))?;

    tracing::info!(
        position_id = %position.id,
        strategy_id = %position.strategy_id,
        quantity,
        "strategy executed"
    );

    state.bus.publish(Notification::new(
        NotificationKind::OrderExecuted,
        "Strategy Executed",
        format!("{} opened as {}", analysis.name, position.id),
    ));

    Ok((StatusCode::CREATED, Json(position)))
}

/// Close position endpoint.
async fn close_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PositionRecord>, ApiError> {
    let closed = state.positions.close(&id).await.map_err(|_| {
        ApiError::from_error(EngineError::position_not_found(&id))
    })?;

    state.bus.publish(Notification::new(
        NotificationKind::PositionUpdate,
        "Position Closed",
        format!("{} closed", closed.id),
    ));

    Ok(Json(closed))
}

/// Login request.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
    /// Session state after login.
    pub state: SessionState,
}

/// Login endpoint.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = state
        .auth
        .login(&req.email, &req.password)
        .await
        .map_err(|e| ApiError::from_error(EngineError::new(e.error_code(), e.to_string())))?;

    state.session.login_succeeded(token.clone());

    Ok(Json(LoginResponse {
        token,
        state: state.session.state(),
    }))
}

/// Signup response.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    /// Success code consumed by the frontend banner.
    pub code: &'static str,
}

/// Signup endpoint.
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    state
        .auth
        .signup(&req)
        .await
        .map_err(|e| ApiError::from_error(EngineError::new(e.error_code(), e.to_string())))?;

    Ok(Json(SignupResponse {
        code: "account_created",
    }))
}

/// Session snapshot response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Current session state.
    pub state: SessionState,
    /// Navigation visible for that state.
    pub navigation: Vec<NavItem>,
}

/// Logout endpoint.
async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    state.session.logout();
    session_response(&state)
}

/// Current session endpoint.
async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    session_response(&state)
}

/// Broker link endpoint.
async fn link_broker(State(state): State<AppState>) -> Json<SessionResponse> {
    state.session.link_broker();
    session_response(&state)
}

fn session_response(state: &AppState) -> Json<SessionResponse> {
    let session_state = state.session.state();
    Json(SessionResponse {
        state: session_state,
        navigation: visible_navigation(session_state),
    })
}

/// Route-guard check request.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuardRequest {
    /// Route path being navigated to.
    pub path: String,
}

/// Route-guard check response.
#[derive(Debug, Serialize)]
pub struct GuardResponse {
    /// What the navigation should do.
    pub decision: GuardDecision,
    /// Which shell the route renders in.
    pub shell: LayoutShell,
    /// Session state the decision was made from.
    pub state: SessionState,
}

/// Route-guard endpoint, checked on every route change.
async fn guard_route(
    State(state): State<AppState>,
    Json(req): Json<GuardRequest>,
) -> Json<GuardResponse> {
    Json(GuardResponse {
        decision: state.session.guard_route(&req.path),
        shell: state.session.shell(&req.path),
        state: state.session.state(),
    })
}

/// List alerts endpoint.
async fn list_alerts(State(state): State<AppState>) -> Json<Vec<Alert>> {
    Json(state.alerts.list())
}

/// Request to create an alert.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAlertRequest {
    /// Watched symbol.
    pub symbol: String,
    /// Alert kind.
    pub kind: AlertKind,
    /// Trigger condition.
    pub condition: AlertCondition,
    /// Threshold value.
    pub threshold: Decimal,
}

/// Create alert endpoint.
async fn create_alert(
    State(state): State<AppState>,
    Json(req): Json<CreateAlertRequest>,
) -> Result<(StatusCode, Json<Alert>), ApiError> {
    if req.symbol.is_empty() {
        return Err(ApiError::from_error(EngineError::invalid_request(
            "Alert symbol must not be empty",
        )));
    }

    let alert = state
        .alerts
        .create(Alert::new(req.symbol, req.kind, req.condition, req.threshold));

    state.bus.publish(Notification::new(
        NotificationKind::System,
        "Alert Created",
        format!("{} alert for {}", alert.symbol, alert.id),
    ));

    Ok((StatusCode::CREATED, Json(alert)))
}

/// Delete alert endpoint.
async fn delete_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if state.alerts.delete(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::from_error(
            EngineError::new(ErrorCode::AlertNotFound, format!("Alert {id} not found"))
                .with_context("alert_id", id),
        ))
    }
}

/// Request to evaluate price alerts against a spot move.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluateAlertsRequest {
    /// Spot at the previous refresh cycle.
    pub previous_spot: Decimal,
}

/// Evaluate alerts endpoint: compares the previous spot against the current
/// snapshot and fires matching price alerts.
async fn evaluate_alerts(
    State(state): State<AppState>,
    Json(req): Json<EvaluateAlertsRequest>,
) -> Json<Vec<Alert>> {
    let snapshot = state.chain.snapshot().await;
    let fired = state.alerts.evaluate_spot(req.previous_spot, snapshot.spot_price);

    for alert in &fired {
        state.bus.publish(Notification::new(
            NotificationKind::AlertTriggered,
            "Alert Triggered",
            format!("{} {:?} {}", alert.symbol, alert.condition, alert.threshold),
        ));
    }

    Json(fired)
}

/// Quantity validation shared by analyze and execute.
fn validated_quantity(quantity: Option<u32>, lot_size: u32) -> Result<u32, ApiError> {
    let quantity = quantity.unwrap_or(lot_size);
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(ApiError::from_error(
            EngineError::new(
                ErrorCode::InvalidQuantity,
                format!("Quantity must be between 1 and {MAX_QUANTITY} lots"),
            )
            .with_context("quantity", quantity.to_string()),
        ));
    }
    Ok(quantity)
}

/// API error wrapper.
#[derive(Debug)]
pub struct ApiError(EngineError);

impl ApiError {
    /// Create from an engine error.
    #[must_use]
    pub const fn from_error(error: EngineError) -> Self {
        Self(error)
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.0.code().http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.to_http_response())).into_response()
    }
}
