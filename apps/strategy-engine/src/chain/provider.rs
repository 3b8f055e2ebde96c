//! Option chain provider port and the static fixture provider.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::snapshot::{OptionChainSnapshot, OptionQuote};

/// Port for supplying option chain snapshots on demand.
///
/// The analyzer treats the chain as a black box, read-only input. A live
/// implementation would poll a market data feed; the engine ships with
/// [`StaticChainProvider`] only.
#[async_trait]
pub trait OptionChainPort: Send + Sync {
    /// Current chain snapshot for the configured underlying.
    async fn snapshot(&self) -> OptionChainSnapshot;
}

/// Chain provider backed by the platform's fixture data.
///
/// Spot 19674.25 with six quoted strikes per side on a 50-point grid,
/// matching the dashboard's mock refresh cycle.
#[derive(Debug, Clone, Default)]
pub struct StaticChainProvider;

impl StaticChainProvider {
    /// Create the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The fixture snapshot, rebuilt fresh per call.
    #[must_use]
    pub fn fixture() -> OptionChainSnapshot {
        OptionChainSnapshot {
            spot_price: dec!(19674.25),
            calls: vec![
                row(19550, dec!(198.25), dec!(18.8), dec!(0.72), dec!(0.003), dec!(-14.2), dec!(46.8)),
                row(19600, dec!(156.75), dec!(18.5), dec!(0.65), dec!(0.003), dec!(-12.5), dec!(45.2)),
                row(19650, dec!(118.40), dec!(17.8), dec!(0.52), dec!(0.004), dec!(-15.2), dec!(48.1)),
                row(19700, dec!(85.60), dec!(17.2), dec!(0.38), dec!(0.003), dec!(-11.8), dec!(42.3)),
                row(19750, dec!(58.90), dec!(16.9), dec!(0.26), dec!(0.002), dec!(-8.9), dec!(38.7)),
                row(19800, dec!(38.75), dec!(16.5), dec!(0.18), dec!(0.002), dec!(-6.5), dec!(34.2)),
            ],
            puts: vec![
                row(19550, dec!(98.50), dec!(18.3), dec!(-0.28), dec!(0.003), dec!(-9.8), dec!(42.1)),
                row(19600, dec!(138.90), dec!(18.2), dec!(-0.35), dec!(0.003), dec!(-11.2), dec!(44.1)),
                row(19650, dec!(168.25), dec!(17.9), dec!(-0.48), dec!(0.004), dec!(-14.8), dec!(47.8)),
                row(19700, dec!(201.75), dec!(17.5), dec!(-0.62), dec!(0.003), dec!(-16.5), dec!(45.9)),
                row(19750, dec!(238.40), dec!(17.1), dec!(-0.74), dec!(0.002), dec!(-18.2), dec!(43.2)),
                row(19800, dec!(278.90), dec!(16.8), dec!(-0.82), dec!(0.002), dec!(-20.1), dec!(40.5)),
            ],
        }
    }
}

/// Quote row constructor for the fixture table.
fn row(
    strike: i64,
    ltp: Decimal,
    iv: Decimal,
    delta: Decimal,
    gamma: Decimal,
    theta: Decimal,
    vega: Decimal,
) -> OptionQuote {
    OptionQuote {
        strike,
        last_traded_price: ltp,
        implied_volatility: iv,
        delta,
        gamma,
        theta,
        vega,
    }
}

#[async_trait]
impl OptionChainPort for StaticChainProvider {
    async fn snapshot(&self) -> OptionChainSnapshot {
        Self::fixture()
    }
}
