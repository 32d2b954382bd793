//! Calculation logic for the pension projection engine.
//!
//! This module contains the career timeline simulator, the two benefit
//! calculators (contribution-based NPS and defined-benefit UPS), and the
//! orchestrator that validates inputs, drives the simulator, and assembles
//! the composed projection result.

mod nps;
mod projection;
mod timeline;
mod ups;

pub use nps::calculate_nps_benefits;
pub use projection::calculate_projection;
pub use timeline::{TimelineOutcome, simulate_timeline};
pub use ups::calculate_ups_benefits;

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to whole currency units, midpoints away from
/// zero.
pub(crate) fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_unit_midpoint_goes_up() {
        assert_eq!(round_unit(dec("9826.2")), dec("9826"));
        assert_eq!(round_unit(dec("9826.5")), dec("9827"));
        assert_eq!(round_unit(dec("9826.8")), dec("9827"));
        assert_eq!(round_unit(dec("18000")), dec("18000"));
    }
}
