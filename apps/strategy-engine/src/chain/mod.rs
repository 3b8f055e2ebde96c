//! Option chain snapshots.
//!
//! The analyzer consumes an [`OptionChainSnapshot`] as a read-only input:
//! a spot price plus call and put quote lists ordered by strike. Snapshots
//! are supplied by an [`OptionChainPort`] implementation; the engine ships
//! with a static provider carrying the platform's fixture chain so it runs
//! self-contained without a market data feed.

mod provider;
mod snapshot;

pub use provider::{OptionChainPort, StaticChainProvider};
pub use snapshot::{OptionChainSnapshot, OptionQuote, OptionType};
