//! The options strategy analyzer.
//!
//! Given a strategy id, an option chain snapshot, and a lot quantity, the
//! analyzer selects strikes for each leg, prices the legs from the snapshot,
//! and derives aggregate risk metrics: net premium, max profit/loss, and
//! breakeven levels.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use strategy_engine::chain::StaticChainProvider;
//! use strategy_engine::strategy::{StrategyAnalyzer, StrategyKind, UniformProbability};
//!
//! let analyzer = StrategyAnalyzer::new(50, Arc::new(UniformProbability));
//! let snapshot = StaticChainProvider::fixture();
//!
//! let analysis = analyzer.analyze(StrategyKind::LongStraddle, &snapshot, 25);
//! assert_eq!(analysis.legs[0].strike, 19650);
//! ```

mod catalog;
mod legs;
mod metrics;
mod probability;
mod strikes;

pub use catalog::{
    LegAction, LegTemplate, MarketBias, StrategyDefinition, StrategyKind, StrikeSelector, catalog,
    definition, definition_by_id,
};
pub use legs::{ResolvedLeg, resolve_legs};
pub use strikes::{atm_strike, resolve_strike};
pub use metrics::{
    RiskBound, StrategyAnalysis, StrategyAnalyzer, StrategyMetrics, TimeDecay, VolatilityImpact,
};
pub use probability::{FixedProbability, ProbabilityModel, UniformProbability};

// The chain-side option type is part of the leg vocabulary too.
pub use crate::chain::OptionType;
