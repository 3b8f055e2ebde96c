//! Probability-of-profit estimation.
//!
//! The platform's "success rate" figure has never been a statistically
//! derived value; it is a display placeholder. The trait below keeps that
//! placeholder behind an interface so a real model (e.g. one derived from
//! implied volatility and days to expiry) can be substituted without
//! touching the metrics calculator.

use rand::Rng;
use rust_decimal::Decimal;

use crate::chain::OptionChainSnapshot;

use super::catalog::StrategyKind;

/// Estimator for a strategy's probability of profit, in percent.
pub trait ProbabilityModel: Send + Sync {
    /// Estimate the probability of profit for `kind` given the breakeven
    /// levels and the snapshot the metrics were derived from.
    fn estimate(
        &self,
        kind: StrategyKind,
        breakevens: &[Decimal],
        snapshot: &OptionChainSnapshot,
    ) -> Decimal;
}

/// The placeholder estimator: uniform in [50, 80) percent.
///
/// TODO: replace with a probability-of-profit model driven by the chain's
/// implied volatilities once an expiry is carried on the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformProbability;

impl ProbabilityModel for UniformProbability {
    fn estimate(
        &self,
        _kind: StrategyKind,
        _breakevens: &[Decimal],
        _snapshot: &OptionChainSnapshot,
    ) -> Decimal {
        let sampled: f64 = rand::rng().random_range(50.0..80.0);
        Decimal::try_from(sampled).map_or_else(|_| Decimal::from(65), |d| d.round_dp(1))
    }
}

/// Fixed-value estimator for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbability(pub Decimal);

impl ProbabilityModel for FixedProbability {
    fn estimate(
        &self,
        _kind: StrategyKind,
        _breakevens: &[Decimal],
        _snapshot: &OptionChainSnapshot,
    ) -> Decimal {
        self.0
    }
}
