//! Leg resolution: binding templates to concrete strikes and prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chain::{OptionChainSnapshot, OptionType};

use super::catalog::{LegAction, StrategyDefinition};
use super::strikes::resolve_strike;

/// A leg template bound to a concrete strike and traded price.
///
/// Derived, recomputed whenever spot or the chain snapshot changes;
/// never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLeg {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Concrete strike on the grid.
    pub strike: i64,
    /// Last traded price at that strike, zero when the quote is missing.
    pub price: Decimal,
}

impl ResolvedLeg {
    /// Signed premium contribution: credit for sells, debit for buys.
    #[must_use]
    pub fn signed_premium(&self) -> Decimal {
        match self.action {
            LegAction::Buy => -self.price,
            LegAction::Sell => self.price,
        }
    }
}

/// Bind every leg template of `definition` against the snapshot.
///
/// A strike missing from the quoted side resolves to price zero; the miss is
/// logged and the calculation continues (degraded, not failed).
#[must_use]
pub fn resolve_legs(
    definition: &StrategyDefinition,
    snapshot: &OptionChainSnapshot,
    strike_interval: i64,
) -> Vec<ResolvedLeg> {
    definition
        .legs
        .iter()
        .map(|template| {
            let strike = resolve_strike(template.strike_selector, snapshot.spot_price, strike_interval);
            let price = match snapshot.quote(template.option_type, strike) {
                Some(quote) => quote.last_traded_price,
                None => {
                    tracing::warn!(
                        strategy = %definition.kind,
                        option_type = %template.option_type,
                        strike,
                        "missing quote at resolved strike, defaulting price to zero"
                    );
                    Decimal::ZERO
                }
            };
            ResolvedLeg {
                action: template.action,
                option_type: template.option_type,
                strike,
                price,
            }
        })
        .collect()
}
