//! Position record types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::strategy::{ResolvedLeg, RiskBound, StrategyAnalysis};

/// Position lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// Open position.
    Active,
    /// Closed position.
    Closed,
}

/// A persisted strategy position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Position id.
    pub id: String,
    /// Strategy id from the catalog.
    pub strategy_id: String,
    /// Legs at entry.
    pub legs: Vec<ResolvedLeg>,
    /// Lot quantity.
    pub quantity: u32,
    /// Net premium at entry (signed; negative = debit).
    pub entry_premium: Decimal,
    /// Max profit at entry.
    pub max_profit: RiskBound,
    /// Max loss at entry.
    pub max_loss: RiskBound,
    /// Breakeven levels at entry.
    pub breakevens: Vec<Decimal>,
    /// Lifecycle status.
    pub status: PositionStatus,
    /// Entry timestamp.
    pub entry_time: DateTime<Utc>,
}

impl PositionRecord {
    /// Open a position from an analysis result.
    #[must_use]
    pub fn open(analysis: &StrategyAnalysis, quantity: u32) -> Self {
        Self {
            id: format!("POS_{}", Uuid::new_v4().simple()),
            strategy_id: analysis.kind.id().to_string(),
            legs: analysis.legs.clone(),
            quantity,
            entry_premium: analysis.metrics.total_premium,
            max_profit: analysis.metrics.max_profit,
            max_loss: analysis.metrics.max_loss,
            breakevens: analysis.metrics.breakevens.clone(),
            status: PositionStatus::Active,
            entry_time: Utc::now(),
        }
    }

    /// Mark the position closed.
    pub fn close(&mut self) {
        self.status = PositionStatus::Closed;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::chain::StaticChainProvider;
    use crate::strategy::{FixedProbability, StrategyAnalyzer, StrategyKind};

    use super::*;

    fn analysis() -> StrategyAnalysis {
        let analyzer = StrategyAnalyzer::new(50, Arc::new(FixedProbability(dec!(65))));
        analyzer.analyze(StrategyKind::LongStraddle, &StaticChainProvider::fixture(), 25)
    }

    #[test]
    fn test_open_copies_analysis_fields() {
        let analysis = analysis();
        let position = PositionRecord::open(&analysis, 25);

        assert!(position.id.starts_with("POS_"));
        assert_eq!(position.strategy_id, "long-straddle");
        assert_eq!(position.quantity, 25);
        assert_eq!(position.entry_premium, analysis.metrics.total_premium);
        assert_eq!(position.status, PositionStatus::Active);
    }

    #[test]
    fn test_close_flips_status() {
        let mut position = PositionRecord::open(&analysis(), 25);
        position.close();
        assert_eq!(position.status, PositionStatus::Closed);
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let position = PositionRecord::open(&analysis(), 25);

        let json = serde_json::to_string(&position).unwrap();
        let back: PositionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, position.id);
        assert_eq!(back.entry_premium, position.entry_premium);
        assert_eq!(back.breakevens, position.breakevens);
    }
}
