//! Option chain snapshot types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "CALL"),
            Self::Put => write!(f, "PUT"),
        }
    }
}

/// One quoted contract at a strike.
///
/// Immutable snapshot row; supplied externally per refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Strike price level.
    pub strike: i64,
    /// Last traded price.
    pub last_traded_price: Decimal,
    /// Implied volatility (percentage).
    pub implied_volatility: Decimal,
    /// Delta.
    pub delta: Decimal,
    /// Gamma.
    pub gamma: Decimal,
    /// Theta.
    pub theta: Decimal,
    /// Vega.
    pub vega: Decimal,
}

/// A point-in-time option chain: spot price plus call and put quotes
/// ordered by strike.
///
/// Strikes sit on a fixed grid (multiples of the strike interval). A strike
/// present on one side need not be present on the other; a lookup miss is a
/// degraded-but-defined outcome for the analyzer (price zero), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionChainSnapshot {
    /// Underlying spot price.
    pub spot_price: Decimal,
    /// Call quotes, ordered by strike.
    pub calls: Vec<OptionQuote>,
    /// Put quotes, ordered by strike.
    pub puts: Vec<OptionQuote>,
}

impl OptionChainSnapshot {
    /// Look up the quote for `(option_type, strike)`.
    #[must_use]
    pub fn quote(&self, option_type: OptionType, strike: i64) -> Option<&OptionQuote> {
        let side = match option_type {
            OptionType::Call => &self.calls,
            OptionType::Put => &self.puts,
        };
        side.iter().find(|q| q.strike == strike)
    }

    /// Last traded price for `(option_type, strike)`, or zero when the
    /// strike is not quoted on that side.
    ///
    /// The zero default is the documented degraded behavior for missing
    /// quotes; callers that care log the miss.
    #[must_use]
    pub fn price_or_zero(&self, option_type: OptionType, strike: i64) -> Decimal {
        self.quote(option_type, strike)
            .map_or(Decimal::ZERO, |q| q.last_traded_price)
    }
}
