//! Price, P&L, and volume alerts.
//!
//! Alert definitions match the dashboard's set-alerts form. Evaluation is
//! synchronous and pure given the inputs: price alerts compare the current
//! (and, for crossing conditions, previous) spot against the threshold.
//! P&L and volume alerts are definitions only until those inputs reach the
//! engine; they are stored and listed but never auto-trigger.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

/// What the alert watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Underlying price level.
    Price,
    /// Position P&L percentage.
    Pnl,
    /// Traded volume.
    Volume,
}

/// Trigger condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCondition {
    /// Value above the threshold.
    Above,
    /// Value below the threshold.
    Below,
    /// Value moved from below to at-or-above the threshold.
    CrossesAbove,
    /// Value moved from above to at-or-below the threshold.
    CrossesBelow,
    /// Profit at or above the threshold (P&L alerts).
    ProfitAbove,
    /// Loss at or above the threshold (P&L alerts).
    LossAbove,
}

/// One alert definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Alert id.
    pub id: String,
    /// Watched symbol.
    pub symbol: String,
    /// What is watched.
    pub kind: AlertKind,
    /// Trigger condition.
    pub condition: AlertCondition,
    /// Threshold value.
    pub threshold: Decimal,
    /// Whether the alert has fired.
    pub triggered: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// Create an untriggered alert.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        kind: AlertKind,
        condition: AlertCondition,
        threshold: Decimal,
    ) -> Self {
        Self {
            id: format!("ALRT_{}", Uuid::new_v4().simple()),
            symbol: symbol.into(),
            kind,
            condition,
            threshold,
            triggered: false,
            created_at: Utc::now(),
        }
    }

    /// Whether a price move from `previous` to `current` satisfies the
    /// condition. Only meaningful for price alerts.
    #[must_use]
    pub fn price_satisfied(&self, previous: Decimal, current: Decimal) -> bool {
        match self.condition {
            AlertCondition::Above => current > self.threshold,
            AlertCondition::Below => current < self.threshold,
            AlertCondition::CrossesAbove => previous < self.threshold && current >= self.threshold,
            AlertCondition::CrossesBelow => previous > self.threshold && current <= self.threshold,
            AlertCondition::ProfitAbove | AlertCondition::LossAbove => false,
        }
    }
}

/// In-memory alert store with price evaluation.
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: RwLock<Vec<Alert>>,
}

impl AlertStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an alert and return it.
    pub fn create(&self, alert: Alert) -> Alert {
        let mut alerts = self.alerts.write().unwrap();
        alerts.push(alert.clone());
        tracing::info!(id = %alert.id, symbol = %alert.symbol, "alert created");
        alert
    }

    /// All alerts, in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<Alert> {
        self.alerts.read().unwrap().clone()
    }

    /// Remove an alert. Returns whether it existed.
    pub fn delete(&self, id: &str) -> bool {
        let mut alerts = self.alerts.write().unwrap();
        let before = alerts.len();
        alerts.retain(|a| a.id != id);
        alerts.len() != before
    }

    /// Evaluate price alerts against a spot move.
    ///
    /// Newly satisfied, previously untriggered price alerts flip to
    /// triggered and are returned so the caller can raise notifications.
    pub fn evaluate_spot(&self, previous: Decimal, current: Decimal) -> Vec<Alert> {
        let mut alerts = self.alerts.write().unwrap();
        let mut fired = Vec::new();

        for alert in alerts.iter_mut() {
            if alert.kind != AlertKind::Price || alert.triggered {
                continue;
            }
            if alert.price_satisfied(previous, current) {
                alert.triggered = true;
                fired.push(alert.clone());
            }
        }

        if !fired.is_empty() {
            tracing::info!(count = fired.len(), %current, "price alerts triggered");
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_above_and_below_conditions() {
        let above = Alert::new("NIFTY", AlertKind::Price, AlertCondition::Above, dec!(19800));
        let below = Alert::new("NIFTY", AlertKind::Price, AlertCondition::Below, dec!(19500));

        assert!(above.price_satisfied(dec!(19700), dec!(19805)));
        assert!(!above.price_satisfied(dec!(19700), dec!(19800)));
        assert!(below.price_satisfied(dec!(19600), dec!(19499)));
        assert!(!below.price_satisfied(dec!(19600), dec!(19500)));
    }

    #[test]
    fn test_crossing_conditions_need_a_move_through() {
        let crosses = Alert::new(
            "NIFTY",
            AlertKind::Price,
            AlertCondition::CrossesAbove,
            dec!(19700),
        );

        assert!(crosses.price_satisfied(dec!(19690), dec!(19700)));
        assert!(crosses.price_satisfied(dec!(19690), dec!(19710)));
        // Already above; no crossing.
        assert!(!crosses.price_satisfied(dec!(19705), dec!(19710)));
    }

    #[test]
    fn test_evaluate_spot_triggers_once() {
        let store = AlertStore::new();
        store.create(Alert::new(
            "NIFTY",
            AlertKind::Price,
            AlertCondition::Above,
            dec!(19700),
        ));

        let fired = store.evaluate_spot(dec!(19650), dec!(19750));
        assert_eq!(fired.len(), 1);
        assert!(fired[0].triggered);

        // Second evaluation must not re-fire.
        let fired_again = store.evaluate_spot(dec!(19750), dec!(19760));
        assert!(fired_again.is_empty());
    }

    #[test]
    fn test_pnl_alerts_do_not_fire_on_spot() {
        let store = AlertStore::new();
        store.create(Alert::new(
            "NIFTY",
            AlertKind::Pnl,
            AlertCondition::ProfitAbove,
            dec!(20),
        ));

        assert!(store.evaluate_spot(dec!(0), dec!(100_000)).is_empty());
    }

    #[test]
    fn test_delete() {
        let store = AlertStore::new();
        let alert = store.create(Alert::new(
            "NIFTY",
            AlertKind::Price,
            AlertCondition::Above,
            dec!(19800),
        ));

        assert!(store.delete(&alert.id));
        assert!(!store.delete(&alert.id));
        assert!(store.list().is_empty());
    }
}
