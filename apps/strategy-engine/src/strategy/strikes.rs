//! Strike resolution against the fixed strike grid.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::catalog::StrikeSelector;

/// Resolve a strike selector to a concrete strike on the grid.
///
/// ATM is spot rounded to the nearest multiple of `strike_interval`
/// (half-away-from-zero at midpoints); the OTM selectors step one or two
/// intervals away from ATM. Pure function, no side effects.
#[must_use]
pub fn resolve_strike(selector: StrikeSelector, spot_price: Decimal, strike_interval: i64) -> i64 {
    let atm = atm_strike(spot_price, strike_interval);
    match selector {
        StrikeSelector::Atm => atm,
        StrikeSelector::OtmCall => atm + strike_interval,
        StrikeSelector::OtmPut => atm - strike_interval,
        StrikeSelector::FarOtmCall => atm + 2 * strike_interval,
        StrikeSelector::FarOtmPut => atm - 2 * strike_interval,
    }
}

/// Nearest grid strike to spot.
#[must_use]
pub fn atm_strike(spot_price: Decimal, strike_interval: i64) -> i64 {
    let steps = (spot_price / Decimal::from(strike_interval))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default();
    steps * strike_interval
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::*;

    #[test_case(StrikeSelector::Atm, 19650; "atm rounds to nearest fifty")]
    #[test_case(StrikeSelector::OtmCall, 19700; "otm call one interval up")]
    #[test_case(StrikeSelector::OtmPut, 19600; "otm put one interval down")]
    #[test_case(StrikeSelector::FarOtmCall, 19750; "far otm call two intervals up")]
    #[test_case(StrikeSelector::FarOtmPut, 19550; "far otm put two intervals down")]
    fn test_resolution_at_fixture_spot(selector: StrikeSelector, expected: i64) {
        assert_eq!(resolve_strike(selector, dec!(19674.25), 50), expected);
    }

    #[test]
    fn test_atm_midpoint_rounds_up() {
        // 19675 is exactly between 19650 and 19700
        assert_eq!(atm_strike(dec!(19675), 50), 19700);
    }

    #[test]
    fn test_atm_below_midpoint_rounds_down() {
        assert_eq!(atm_strike(dec!(19674.99), 50), 19650);
    }

    proptest! {
        #[test]
        fn prop_atm_is_on_grid_and_within_half_interval(
            spot in 1_000.0_f64..100_000.0,
            interval in prop_oneof![Just(25_i64), Just(50), Just(100)],
        ) {
            let spot = Decimal::try_from(spot).unwrap();
            let atm = atm_strike(spot, interval);

            prop_assert_eq!(atm % interval, 0);

            let distance = (spot - Decimal::from(atm)).abs();
            let half = Decimal::from(interval) / dec!(2);
            prop_assert!(distance <= half);
        }

        #[test]
        fn prop_otm_selectors_offset_from_atm(
            spot in 1_000.0_f64..100_000.0,
            interval in prop_oneof![Just(25_i64), Just(50), Just(100)],
        ) {
            let spot = Decimal::try_from(spot).unwrap();
            let atm = resolve_strike(StrikeSelector::Atm, spot, interval);

            prop_assert_eq!(resolve_strike(StrikeSelector::OtmCall, spot, interval) - atm, interval);
            prop_assert_eq!(resolve_strike(StrikeSelector::OtmPut, spot, interval) - atm, -interval);
            prop_assert_eq!(resolve_strike(StrikeSelector::FarOtmCall, spot, interval) - atm, 2 * interval);
            prop_assert_eq!(resolve_strike(StrikeSelector::FarOtmPut, spot, interval) - atm, -2 * interval);
        }
    }
}
