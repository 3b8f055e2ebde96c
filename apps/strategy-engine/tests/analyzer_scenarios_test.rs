//! End-to-end scenarios for the strategy analyzer.
//!
//! Exercises the public library API the way the dashboard uses it: resolve
//! strikes against the live spot, price the legs, derive metrics, and
//! persist an executed strategy as a position.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use strategy_engine::chain::{OptionChainPort, OptionType, StaticChainProvider};
use strategy_engine::positions::{InMemoryPositionRepository, PositionRecord, PositionRepositoryPort, PositionStatus};
use strategy_engine::strategy::{
    FixedProbability, RiskBound, StrategyAnalyzer, StrategyKind, StrikeSelector, TimeDecay,
    definition, resolve_legs, resolve_strike,
};

fn analyzer() -> StrategyAnalyzer {
    StrategyAnalyzer::new(50, Arc::new(FixedProbability(dec!(65))))
}

// =============================================================================
// Scenario A: strike resolution at the fixture spot
// =============================================================================

#[tokio::test]
async fn scenario_a_strike_resolution_at_fixture_spot() {
    let snapshot = StaticChainProvider::new().snapshot().await;
    assert_eq!(snapshot.spot_price, dec!(19674.25));

    assert_eq!(resolve_strike(StrikeSelector::Atm, snapshot.spot_price, 50), 19650);
    assert_eq!(resolve_strike(StrikeSelector::OtmCall, snapshot.spot_price, 50), 19700);
    assert_eq!(resolve_strike(StrikeSelector::OtmPut, snapshot.spot_price, 50), 19600);
}

// =============================================================================
// Scenario B: long straddle economics
// =============================================================================

#[tokio::test]
async fn scenario_b_long_straddle_metrics() {
    let snapshot = StaticChainProvider::new().snapshot().await;
    let analysis = analyzer().analyze(StrategyKind::LongStraddle, &snapshot, 1);

    assert_eq!(analysis.metrics.total_premium, dec!(-286.65));
    assert_eq!(analysis.metrics.max_loss, RiskBound::Limited(dec!(286.65)));
    assert_eq!(analysis.metrics.max_profit, RiskBound::Unlimited);
    assert_eq!(
        analysis.metrics.breakevens,
        vec![dec!(19936.65), dec!(19363.35)]
    );
    assert_eq!(analysis.metrics.time_decay, TimeDecay::Negative);
}

// =============================================================================
// Scenario C: missing quotes degrade, never abort
// =============================================================================

#[tokio::test]
async fn scenario_c_missing_quotes_complete_without_panic() {
    let mut snapshot = StaticChainProvider::new().snapshot().await;
    snapshot.puts.clear();

    let legs = resolve_legs(definition(StrategyKind::LongStraddle), &snapshot, 50);
    assert_eq!(legs[1].option_type, OptionType::Put);
    assert_eq!(legs[1].price, Decimal::ZERO);

    // The full metrics pass still completes for every catalog family.
    for def in strategy_engine::strategy::catalog() {
        let analysis = analyzer().analyze(def.kind, &snapshot, 1);
        assert_eq!(analysis.legs.len(), def.legs.len());
    }
}

// =============================================================================
// Scenario D: unknown strategy id yields an absent result
// =============================================================================

#[tokio::test]
async fn scenario_d_unknown_strategy_is_absent() {
    let snapshot = StaticChainProvider::new().snapshot().await;
    assert!(analyzer().analyze_by_id("foo-bar", &snapshot, 1).is_none());
}

// =============================================================================
// Execution flow: analysis -> position record -> repository
// =============================================================================

#[tokio::test]
async fn executed_strategy_round_trips_through_repository() {
    let snapshot = StaticChainProvider::new().snapshot().await;
    let analysis = analyzer().analyze(StrategyKind::IronCondor, &snapshot, 25);

    let repo = InMemoryPositionRepository::new();
    let position = PositionRecord::open(&analysis, 25);
    repo.save(&position).await.unwrap();

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].strategy_id, "iron-condor");
    assert_eq!(listed[0].legs.len(), 4);
    assert_eq!(listed[0].status, PositionStatus::Active);

    // The stored record is the flat JSON shape client-side storage expects.
    let json = serde_json::to_value(&listed[0]).unwrap();
    for key in [
        "id",
        "strategy_id",
        "legs",
        "quantity",
        "entry_premium",
        "max_profit",
        "max_loss",
        "breakevens",
        "status",
    ] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }

    let closed = repo.close(&position.id).await.unwrap();
    assert_eq!(closed.status, PositionStatus::Closed);
}

// =============================================================================
// Analyzer purity: repeated calls, shared snapshot
// =============================================================================

#[tokio::test]
async fn analysis_is_deterministic_across_calls() {
    let snapshot = StaticChainProvider::new().snapshot().await;
    let analyzer = analyzer();

    for def in strategy_engine::strategy::catalog() {
        let first = analyzer.compute_metrics(def.kind, &snapshot, 25);
        let second = analyzer.compute_metrics(def.kind, &snapshot, 25);
        assert_eq!(first, second, "metrics drifted for {}", def.kind);
    }
}
