//! The fixed strategy catalog.
//!
//! Six prebuilt multi-leg strategies, each described by an ordered list of
//! leg templates. The set is closed: [`StrategyKind`] is the discriminant
//! for every per-strategy rule in the engine, so adding a family means the
//! compiler walks every match that needs a new arm.

use serde::{Deserialize, Serialize};

use crate::chain::OptionType;

/// Strategy family discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Buy call + buy put at the same ATM strike.
    LongStraddle,
    /// Sell call + sell put at the same ATM strike.
    ShortStraddle,
    /// Buy OTM call + buy OTM put.
    LongStrangle,
    /// Sell OTM call/put, buy far OTM call/put wings.
    IronCondor,
    /// Buy ATM call, sell OTM call.
    BullCallSpread,
    /// Buy ATM put, sell OTM put.
    BearPutSpread,
}

impl StrategyKind {
    /// Stable string id, as used by the dashboard frontend.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::LongStraddle => "long-straddle",
            Self::ShortStraddle => "short-straddle",
            Self::LongStrangle => "long-strangle",
            Self::IronCondor => "iron-condor",
            Self::BullCallSpread => "bull-call-spread",
            Self::BearPutSpread => "bear-put-spread",
        }
    }

    /// Parse a strategy id.
    ///
    /// Returns `None` for ids outside the catalog; callers must branch on
    /// this before computing metrics.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "long-straddle" => Some(Self::LongStraddle),
            "short-straddle" => Some(Self::ShortStraddle),
            "long-strangle" => Some(Self::LongStrangle),
            "iron-condor" => Some(Self::IronCondor),
            "bull-call-spread" => Some(Self::BullCallSpread),
            "bear-put-spread" => Some(Self::BearPutSpread),
            _ => None,
        }
    }

    /// True for families that pay premium up front (long option legs only).
    #[must_use]
    pub const fn is_long_premium(&self) -> bool {
        matches!(self, Self::LongStraddle | Self::LongStrangle)
    }

    /// True for the straddle families.
    #[must_use]
    pub const fn is_straddle(&self) -> bool {
        matches!(self, Self::LongStraddle | Self::ShortStraddle)
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Directional bias of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketBias {
    /// Profits from movement or range, not direction.
    Neutral,
    /// Profits from an up move.
    Bullish,
    /// Profits from a down move.
    Bearish,
}

/// Buy or sell a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LegAction {
    /// Buy (pay premium).
    Buy,
    /// Sell (receive premium).
    Sell,
}

/// Strike placement relative to spot, resolved against the strike grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrikeSelector {
    /// Nearest strike to spot.
    Atm,
    /// One interval above ATM.
    OtmCall,
    /// One interval below ATM.
    OtmPut,
    /// Two intervals above ATM.
    FarOtmCall,
    /// Two intervals below ATM.
    FarOtmPut,
}

impl StrikeSelector {
    /// Parse a selector tag.
    ///
    /// An unrecognized tag falls back to ATM. This is the documented default
    /// for selector input, not a failure.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "OTM_CALL" => Self::OtmCall,
            "OTM_PUT" => Self::OtmPut,
            "FAR_OTM_CALL" => Self::FarOtmCall,
            "FAR_OTM_PUT" => Self::FarOtmPut,
            _ => Self::Atm,
        }
    }
}

/// One leg of a strategy template: what to trade and where to strike it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegTemplate {
    /// Buy or sell.
    pub action: LegAction,
    /// Call or put.
    pub option_type: OptionType,
    /// Strike placement.
    pub strike_selector: StrikeSelector,
}

/// A catalog entry: kind, display metadata, and leg templates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StrategyDefinition {
    /// Strategy family.
    pub kind: StrategyKind,
    /// Display name.
    pub name: &'static str,
    /// Directional bias.
    pub bias: MarketBias,
    /// One-line description for the strategy picker.
    pub description: &'static str,
    /// Ordered leg templates.
    pub legs: &'static [LegTemplate],
}

const fn leg(action: LegAction, option_type: OptionType, strike_selector: StrikeSelector) -> LegTemplate {
    LegTemplate {
        action,
        option_type,
        strike_selector,
    }
}

static LONG_STRADDLE_LEGS: [LegTemplate; 2] = [
    leg(LegAction::Buy, OptionType::Call, StrikeSelector::Atm),
    leg(LegAction::Buy, OptionType::Put, StrikeSelector::Atm),
];

static SHORT_STRADDLE_LEGS: [LegTemplate; 2] = [
    leg(LegAction::Sell, OptionType::Call, StrikeSelector::Atm),
    leg(LegAction::Sell, OptionType::Put, StrikeSelector::Atm),
];

static LONG_STRANGLE_LEGS: [LegTemplate; 2] = [
    leg(LegAction::Buy, OptionType::Call, StrikeSelector::OtmCall),
    leg(LegAction::Buy, OptionType::Put, StrikeSelector::OtmPut),
];

static IRON_CONDOR_LEGS: [LegTemplate; 4] = [
    leg(LegAction::Sell, OptionType::Call, StrikeSelector::OtmCall),
    leg(LegAction::Buy, OptionType::Call, StrikeSelector::FarOtmCall),
    leg(LegAction::Sell, OptionType::Put, StrikeSelector::OtmPut),
    leg(LegAction::Buy, OptionType::Put, StrikeSelector::FarOtmPut),
];

static BULL_CALL_SPREAD_LEGS: [LegTemplate; 2] = [
    leg(LegAction::Buy, OptionType::Call, StrikeSelector::Atm),
    leg(LegAction::Sell, OptionType::Call, StrikeSelector::OtmCall),
];

static BEAR_PUT_SPREAD_LEGS: [LegTemplate; 2] = [
    leg(LegAction::Buy, OptionType::Put, StrikeSelector::Atm),
    leg(LegAction::Sell, OptionType::Put, StrikeSelector::OtmPut),
];

static CATALOG: [StrategyDefinition; 6] = [
    StrategyDefinition {
        kind: StrategyKind::LongStraddle,
        name: "Long Straddle",
        bias: MarketBias::Neutral,
        description: "Buy Call + Buy Put at same strike. Profits from high volatility.",
        legs: &LONG_STRADDLE_LEGS,
    },
    StrategyDefinition {
        kind: StrategyKind::ShortStraddle,
        name: "Short Straddle",
        bias: MarketBias::Neutral,
        description: "Sell Call + Sell Put at same strike. Profits from low volatility.",
        legs: &SHORT_STRADDLE_LEGS,
    },
    StrategyDefinition {
        kind: StrategyKind::LongStrangle,
        name: "Long Strangle",
        bias: MarketBias::Neutral,
        description: "Buy OTM Call + Buy OTM Put. Cheaper than straddle.",
        legs: &LONG_STRANGLE_LEGS,
    },
    StrategyDefinition {
        kind: StrategyKind::IronCondor,
        name: "Iron Condor",
        bias: MarketBias::Neutral,
        description: "Sell OTM Call/Put + Buy far OTM wings. Range-bound strategy.",
        legs: &IRON_CONDOR_LEGS,
    },
    StrategyDefinition {
        kind: StrategyKind::BullCallSpread,
        name: "Bull Call Spread",
        bias: MarketBias::Bullish,
        description: "Buy ATM Call + Sell OTM Call. Limited risk/reward.",
        legs: &BULL_CALL_SPREAD_LEGS,
    },
    StrategyDefinition {
        kind: StrategyKind::BearPutSpread,
        name: "Bear Put Spread",
        bias: MarketBias::Bearish,
        description: "Buy ATM Put + Sell OTM Put. Limited risk/reward.",
        legs: &BEAR_PUT_SPREAD_LEGS,
    },
];

/// The full strategy catalog, in display order.
#[must_use]
pub fn catalog() -> &'static [StrategyDefinition] {
    &CATALOG
}

/// Look up a catalog entry by strategy kind.
#[must_use]
pub fn definition(kind: StrategyKind) -> &'static StrategyDefinition {
    match kind {
        StrategyKind::LongStraddle => &CATALOG[0],
        StrategyKind::ShortStraddle => &CATALOG[1],
        StrategyKind::LongStrangle => &CATALOG[2],
        StrategyKind::IronCondor => &CATALOG[3],
        StrategyKind::BullCallSpread => &CATALOG[4],
        StrategyKind::BearPutSpread => &CATALOG[5],
    }
}

/// Look up a catalog entry by string id.
#[must_use]
pub fn definition_by_id(id: &str) -> Option<&'static StrategyDefinition> {
    StrategyKind::from_id(id).map(definition)
}
