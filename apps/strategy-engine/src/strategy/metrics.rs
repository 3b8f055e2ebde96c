//! Per-strategy risk metrics.
//!
//! Each strategy family has its own risk geometry, so metric derivation is a
//! variant dispatch over [`StrategyKind`] rather than one generic formula.
//! The calculator is stateless and idempotent: the same snapshot and kind
//! always produce the same deterministic fields.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chain::OptionChainSnapshot;

use super::catalog::{StrategyKind, definition, definition_by_id};
use super::legs::{ResolvedLeg, resolve_legs};
use super::probability::ProbabilityModel;

/// A profit or loss bound: a concrete level, or unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBound {
    /// Bounded at the given amount.
    Limited(Decimal),
    /// Unbounded (theoretically unlimited).
    Unlimited,
}

impl RiskBound {
    /// Scale a bounded amount by lot quantity; unlimited stays unlimited.
    #[must_use]
    pub fn scale(self, quantity: Decimal) -> Self {
        match self {
            Self::Limited(amount) => Self::Limited(amount * quantity),
            Self::Unlimited => Self::Unlimited,
        }
    }

    /// The bounded amount, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<Decimal> {
        match self {
            Self::Limited(amount) => Some(*amount),
            Self::Unlimited => None,
        }
    }
}

impl std::fmt::Display for RiskBound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(amount) => write!(f, "{amount}"),
            Self::Unlimited => write!(f, "Unlimited"),
        }
    }
}

/// Which way theta works on the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeDecay {
    /// Decay accrues to the position (net short premium).
    Positive,
    /// Decay bleeds the position (net long premium).
    Negative,
}

/// How strongly a volatility move affects the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityImpact {
    /// Straddle families: vega dominates.
    HighImpact,
    /// Everything else.
    MediumImpact,
}

/// Aggregate risk metrics for an analyzed strategy.
///
/// Monetary fields are scaled by lot quantity; breakevens are underlying
/// price levels and are never scaled. Ephemeral: recomputed on demand,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    /// Net premium, signed: negative is a net debit (paid), positive a
    /// net credit (received).
    pub total_premium: Decimal,
    /// Best-case profit at expiry.
    pub max_profit: RiskBound,
    /// Worst-case loss at expiry.
    pub max_loss: RiskBound,
    /// Underlying levels where expiry P&L is zero.
    pub breakevens: Vec<Decimal>,
    /// Probability-of-profit estimate, percent. Stubbed output; see
    /// [`super::probability::ProbabilityModel`].
    pub probability_estimate: Decimal,
    /// Theta direction for the position.
    pub time_decay: TimeDecay,
    /// Vega sensitivity bucket.
    pub volatility_impact: VolatilityImpact,
}

/// One full analysis result: the resolved legs plus derived metrics.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyAnalysis {
    /// Strategy family.
    pub kind: StrategyKind,
    /// Display name from the catalog.
    pub name: &'static str,
    /// Legs bound to strikes and prices.
    pub legs: Vec<ResolvedLeg>,
    /// Derived risk metrics.
    pub metrics: StrategyMetrics,
}

/// The strategy analyzer: strike/leg resolution plus metric derivation.
///
/// Holds only configuration (strike interval) and the probability model;
/// every call reads an immutable snapshot and returns fresh values, so the
/// analyzer may be shared freely across handlers.
#[derive(Clone)]
pub struct StrategyAnalyzer {
    strike_interval: i64,
    probability: Arc<dyn ProbabilityModel>,
}

impl std::fmt::Debug for StrategyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyAnalyzer")
            .field("strike_interval", &self.strike_interval)
            .finish_non_exhaustive()
    }
}

impl StrategyAnalyzer {
    /// Create an analyzer with the given strike interval and probability model.
    #[must_use]
    pub fn new(strike_interval: i64, probability: Arc<dyn ProbabilityModel>) -> Self {
        Self {
            strike_interval,
            probability,
        }
    }

    /// The configured strike interval.
    #[must_use]
    pub const fn strike_interval(&self) -> i64 {
        self.strike_interval
    }

    /// Resolve the legs for a strategy against the snapshot.
    #[must_use]
    pub fn resolve_legs(&self, kind: StrategyKind, snapshot: &OptionChainSnapshot) -> Vec<ResolvedLeg> {
        resolve_legs(definition(kind), snapshot, self.strike_interval)
    }

    /// Analyze a strategy by string id.
    ///
    /// Returns `None` for ids outside the catalog; callers must branch on
    /// this before display, never substitute default metrics.
    #[must_use]
    pub fn analyze_by_id(
        &self,
        strategy_id: &str,
        snapshot: &OptionChainSnapshot,
        quantity: u32,
    ) -> Option<StrategyAnalysis> {
        definition_by_id(strategy_id).map(|def| self.analyze(def.kind, snapshot, quantity))
    }

    /// Analyze a strategy: resolve legs and derive metrics.
    #[must_use]
    pub fn analyze(
        &self,
        kind: StrategyKind,
        snapshot: &OptionChainSnapshot,
        quantity: u32,
    ) -> StrategyAnalysis {
        let def = definition(kind);
        let legs = resolve_legs(def, snapshot, self.strike_interval);
        let metrics = self.metrics_from_legs(kind, &legs, snapshot, quantity);
        StrategyAnalysis {
            kind,
            name: def.name,
            legs,
            metrics,
        }
    }

    /// Derive metrics for a strategy against the snapshot.
    #[must_use]
    pub fn compute_metrics(
        &self,
        kind: StrategyKind,
        snapshot: &OptionChainSnapshot,
        quantity: u32,
    ) -> StrategyMetrics {
        let legs = self.resolve_legs(kind, snapshot);
        self.metrics_from_legs(kind, &legs, snapshot, quantity)
    }

    /// Metric derivation from already-resolved legs.
    ///
    /// Leg order is fixed by the catalog templates, so each family indexes
    /// its legs positionally.
    fn metrics_from_legs(
        &self,
        kind: StrategyKind,
        legs: &[ResolvedLeg],
        snapshot: &OptionChainSnapshot,
        quantity: u32,
    ) -> StrategyMetrics {
        let (total_premium, max_profit, max_loss, breakevens) = match kind {
            StrategyKind::LongStraddle => long_straddle(legs),
            StrategyKind::ShortStraddle => short_straddle(legs),
            StrategyKind::LongStrangle => long_strangle(legs),
            StrategyKind::IronCondor => iron_condor(legs),
            StrategyKind::BullCallSpread => bull_call_spread(legs),
            StrategyKind::BearPutSpread => bear_put_spread(legs),
        };

        let probability_estimate = self.probability.estimate(kind, &breakevens, snapshot);
        let qty = Decimal::from(quantity);

        StrategyMetrics {
            total_premium: total_premium * qty,
            max_profit: max_profit.scale(qty),
            max_loss: max_loss.scale(qty),
            breakevens,
            probability_estimate,
            time_decay: if kind.is_long_premium() {
                TimeDecay::Negative
            } else {
                TimeDecay::Positive
            },
            volatility_impact: if kind.is_straddle() {
                VolatilityImpact::HighImpact
            } else {
                VolatilityImpact::MediumImpact
            },
        }
    }
}

type CoreMetrics = (Decimal, RiskBound, RiskBound, Vec<Decimal>);

/// Long straddle: buy ATM call + buy ATM put.
fn long_straddle(legs: &[ResolvedLeg]) -> CoreMetrics {
    let strike = Decimal::from(legs[0].strike);
    let paid = legs[0].price + legs[1].price;
    (
        -paid,
        RiskBound::Unlimited,
        RiskBound::Limited(paid),
        vec![strike + paid, strike - paid],
    )
}

/// Short straddle: sell ATM call + sell ATM put.
fn short_straddle(legs: &[ResolvedLeg]) -> CoreMetrics {
    let strike = Decimal::from(legs[0].strike);
    let received = legs[0].price + legs[1].price;
    (
        received,
        RiskBound::Limited(received),
        RiskBound::Unlimited,
        vec![strike + received, strike - received],
    )
}

/// Long strangle: buy OTM call + buy OTM put.
fn long_strangle(legs: &[ResolvedLeg]) -> CoreMetrics {
    let call_strike = Decimal::from(legs[0].strike);
    let put_strike = Decimal::from(legs[1].strike);
    let paid = legs[0].price + legs[1].price;
    (
        -paid,
        RiskBound::Unlimited,
        RiskBound::Limited(paid),
        vec![call_strike + paid, put_strike - paid],
    )
}

/// Bull call spread: buy ATM call, sell OTM call.
fn bull_call_spread(legs: &[ResolvedLeg]) -> CoreMetrics {
    vertical_spread(&legs[0], &legs[1], SpreadSide::Call)
}

/// Bear put spread: buy ATM put, sell OTM put.
fn bear_put_spread(legs: &[ResolvedLeg]) -> CoreMetrics {
    vertical_spread(&legs[0], &legs[1], SpreadSide::Put)
}

enum SpreadSide {
    Call,
    Put,
}

/// Debit vertical spread economics shared by the bull call and bear put
/// families. Breakeven steps up from the bought strike for calls and down
/// for puts.
fn vertical_spread(buy: &ResolvedLeg, sell: &ResolvedLeg, side: SpreadSide) -> CoreMetrics {
    let buy_strike = Decimal::from(buy.strike);
    let sell_strike = Decimal::from(sell.strike);
    let net_debit = (buy.price - sell.price).abs();

    let width = (sell_strike - buy_strike).abs();
    let max_profit = width - net_debit;
    if max_profit < Decimal::ZERO {
        tracing::warn!(
            buy_strike = %buy_strike,
            sell_strike = %sell_strike,
            net_debit = %net_debit,
            "degenerate spread quotes: debit exceeds spread width"
        );
    }

    let breakeven = match side {
        SpreadSide::Call => buy_strike + net_debit,
        SpreadSide::Put => buy_strike - net_debit,
    };

    (
        -net_debit,
        RiskBound::Limited(max_profit),
        RiskBound::Limited(net_debit),
        vec![breakeven],
    )
}

/// Iron condor: sell OTM call/put, buy far OTM wings.
///
/// Derived from the four legs: net credit from the quotes, max loss is the
/// wing width less the credit, breakevens sit one credit outside the short
/// strikes.
fn iron_condor(legs: &[ResolvedLeg]) -> CoreMetrics {
    let short_call = &legs[0];
    let long_call = &legs[1];
    let short_put = &legs[2];
    let long_put = &legs[3];

    let net_credit = (short_call.price + short_put.price) - (long_call.price + long_put.price);
    let width = Decimal::from(long_call.strike - short_call.strike);
    let max_loss = width - net_credit;

    if net_credit <= Decimal::ZERO {
        tracing::warn!(%net_credit, "iron condor quotes produce no net credit");
    } else if max_loss < Decimal::ZERO {
        tracing::warn!(
            %net_credit,
            %width,
            "iron condor credit exceeds wing width; quotes are not arbitrage-free"
        );
    }

    let lower_breakeven = Decimal::from(short_put.strike) - net_credit;
    let upper_breakeven = Decimal::from(short_call.strike) + net_credit;

    (
        net_credit,
        RiskBound::Limited(net_credit),
        RiskBound::Limited(max_loss),
        vec![lower_breakeven, upper_breakeven],
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::chain::StaticChainProvider;
    use crate::strategy::probability::FixedProbability;

    use super::*;

    fn analyzer() -> StrategyAnalyzer {
        StrategyAnalyzer::new(50, Arc::new(FixedProbability(dec!(65))))
    }

    #[test]
    fn test_long_straddle_fixture_numbers() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::LongStraddle, &snapshot, 1);

        assert_eq!(metrics.total_premium, dec!(-286.65));
        assert_eq!(metrics.max_loss, RiskBound::Limited(dec!(286.65)));
        assert_eq!(metrics.max_profit, RiskBound::Unlimited);
        assert_eq!(metrics.breakevens, vec![dec!(19936.65), dec!(19363.35)]);
        assert_eq!(metrics.time_decay, TimeDecay::Negative);
        assert_eq!(metrics.volatility_impact, VolatilityImpact::HighImpact);
    }

    #[test]
    fn test_short_straddle_mirrors_long() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::ShortStraddle, &snapshot, 1);

        assert_eq!(metrics.total_premium, dec!(286.65));
        assert_eq!(metrics.max_profit, RiskBound::Limited(dec!(286.65)));
        assert_eq!(metrics.max_loss, RiskBound::Unlimited);
        assert_eq!(metrics.breakevens, vec![dec!(19936.65), dec!(19363.35)]);
        assert_eq!(metrics.time_decay, TimeDecay::Positive);
    }

    #[test]
    fn test_long_strangle_breakevens_from_otm_strikes() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::LongStrangle, &snapshot, 1);

        // OTM call 19700 @ 85.60, OTM put 19600 @ 138.90
        assert_eq!(metrics.total_premium, dec!(-224.50));
        assert_eq!(metrics.max_loss, RiskBound::Limited(dec!(224.50)));
        assert_eq!(metrics.max_profit, RiskBound::Unlimited);
        assert_eq!(metrics.breakevens, vec![dec!(19924.50), dec!(19375.50)]);
        assert_eq!(metrics.volatility_impact, VolatilityImpact::MediumImpact);
    }

    #[test]
    fn test_bull_call_spread_fixture_numbers() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::BullCallSpread, &snapshot, 1);

        // Buy 19650C @ 118.40, sell 19700C @ 85.60
        assert_eq!(metrics.total_premium, dec!(-32.80));
        assert_eq!(metrics.max_loss, RiskBound::Limited(dec!(32.80)));
        assert_eq!(metrics.max_profit, RiskBound::Limited(dec!(17.20)));
        assert_eq!(metrics.breakevens, vec![dec!(19682.80)]);
    }

    #[test]
    fn test_bull_call_spread_profit_identity() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::BullCallSpread, &snapshot, 1);

        // max profit == (sell strike - buy strike) - |net debit|
        let debit = metrics.total_premium.abs();
        assert_eq!(
            metrics.max_profit,
            RiskBound::Limited(dec!(50) - debit)
        );
        assert!(metrics.max_profit.limit().unwrap() >= Decimal::ZERO);
    }

    #[test]
    fn test_bear_put_spread_fixture_numbers() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::BearPutSpread, &snapshot, 1);

        // Buy 19650P @ 168.25, sell 19600P @ 138.90
        assert_eq!(metrics.total_premium, dec!(-29.35));
        assert_eq!(metrics.max_profit, RiskBound::Limited(dec!(20.65)));
        assert_eq!(metrics.breakevens, vec![dec!(19620.65)]);
    }

    #[test]
    fn test_iron_condor_derived_from_legs() {
        let snapshot = StaticChainProvider::fixture();
        let metrics = analyzer().compute_metrics(StrategyKind::IronCondor, &snapshot, 1);

        // Credit = (85.60 + 138.90) - (58.90 + 98.50) = 67.10
        assert_eq!(metrics.total_premium, dec!(67.10));
        assert_eq!(metrics.max_profit, RiskBound::Limited(dec!(67.10)));
        // Wing width 50 less the credit; the fixture quotes are not
        // arbitrage-free, so the computed worst case is a small gain.
        assert_eq!(metrics.max_loss, RiskBound::Limited(dec!(-17.10)));
        assert_eq!(metrics.breakevens, vec![dec!(19532.90), dec!(19767.10)]);
    }

    #[test]
    fn test_quantity_scales_money_not_breakevens() {
        let snapshot = StaticChainProvider::fixture();
        let single = analyzer().compute_metrics(StrategyKind::LongStraddle, &snapshot, 1);
        let lots = analyzer().compute_metrics(StrategyKind::LongStraddle, &snapshot, 25);

        assert_eq!(lots.total_premium, single.total_premium * dec!(25));
        assert_eq!(
            lots.max_loss,
            RiskBound::Limited(single.max_loss.limit().unwrap() * dec!(25))
        );
        assert_eq!(lots.max_profit, RiskBound::Unlimited);
        assert_eq!(lots.breakevens, single.breakevens);
    }

    #[test]
    fn test_missing_quotes_degrade_without_panicking() {
        let mut snapshot = StaticChainProvider::fixture();
        snapshot.calls.clear();
        snapshot.puts.clear();

        let metrics = analyzer().compute_metrics(StrategyKind::LongStraddle, &snapshot, 1);

        assert_eq!(metrics.total_premium, Decimal::ZERO);
        assert_eq!(metrics.max_loss, RiskBound::Limited(Decimal::ZERO));
        assert_eq!(metrics.breakevens, vec![dec!(19650), dec!(19650)]);
    }

    #[test]
    fn test_unknown_strategy_id_yields_none() {
        let snapshot = StaticChainProvider::fixture();
        assert!(analyzer().analyze_by_id("foo-bar", &snapshot, 1).is_none());
    }

    #[test]
    fn test_compute_metrics_is_idempotent() {
        let snapshot = StaticChainProvider::fixture();
        let a = analyzer().compute_metrics(StrategyKind::IronCondor, &snapshot, 25);
        let b = analyzer().compute_metrics(StrategyKind::IronCondor, &snapshot, 25);

        assert_eq!(a, b);
    }

    #[test]
    fn test_analysis_carries_catalog_name() {
        let snapshot = StaticChainProvider::fixture();
        let analysis = analyzer().analyze(StrategyKind::BullCallSpread, &snapshot, 1);

        assert_eq!(analysis.name, "Bull Call Spread");
        assert_eq!(analysis.legs.len(), 2);
    }
}
