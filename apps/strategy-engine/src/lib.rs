// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Rust Core Library
//!
//! Deterministic options strategy engine for the Algofax trading platform.
//!
//! # Architecture
//!
//! The engine is a set of pure domain modules behind a thin HTTP/JSON API:
//!
//! - `chain`: Option chain snapshot types and the chain provider port
//! - `strategy`: The strategy analyzer - strike resolution, leg resolution,
//!   and per-strategy risk metrics (premium, max profit/loss, breakevens)
//! - `session`: Login/broker session state machine and route guard
//! - `positions`: Executed strategy position records and repository port
//! - `alerts`: Price/P&L/volume alert definitions and evaluation
//! - `events`: Notification bus (explicit instance, no global dispatcher)
//! - `config`: YAML configuration with environment overrides
//! - `server`: Axum HTTP API exposing the above to the dashboard frontend
//!
//! Every analysis operation is synchronous and side-effect-free: it reads an
//! immutable [`chain::OptionChainSnapshot`] and returns fresh values. The only
//! shared mutable state is the session token and the in-memory stores, each
//! behind its own lock.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Price alert definitions and evaluation.
pub mod alerts;

/// Option chain snapshot types and chain provider port.
pub mod chain;

/// Configuration loading and validation.
pub mod config;

/// Error types shared across the engine.
pub mod error;

/// Notification bus and notification types.
pub mod events;

/// Executed strategy position records.
pub mod positions;

/// HTTP/JSON API server.
pub mod server;

/// Login/broker session state machine and route guard.
pub mod session;

/// Strategy catalog, strike/leg resolution, and risk metrics.
pub mod strategy;

/// Tracing subscriber setup.
pub mod telemetry;

// Re-exports for the common entry points
pub use chain::{OptionChainPort, OptionChainSnapshot, OptionQuote, StaticChainProvider};
pub use error::{EngineError, ErrorCode};
pub use strategy::{
    LegAction, OptionType, ResolvedLeg, RiskBound, StrategyAnalysis, StrategyAnalyzer,
    StrategyDefinition, StrategyKind, StrategyMetrics, StrikeSelector,
};
