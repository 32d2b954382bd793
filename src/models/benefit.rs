//! Benefit result models: the terminal figures computed from a finished
//! timeline for each retirement scheme, and the composed projection result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PayRevisionEvent, TimelineEntry};

/// Terminal figures for the contribution-based (NPS) scheme.
///
/// Derived purely from the final corpus value; never mutated after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsBenefit {
    /// The accumulated corpus at retirement, rounded to whole units.
    pub corpus: Decimal,
    /// The share of the corpus withdrawn at exit.
    pub lump_sum: Decimal,
    /// The share of the corpus that funds the annuity.
    pub annuity_corpus: Decimal,
    /// The monthly pension the annuity pays out.
    pub monthly_pension: Decimal,
    /// The yearly annuity rate used, for display.
    pub annuity_rate: Decimal,
}

/// One point of the post-retirement pension growth projection.
///
/// Pairs the allowance-grown UPS pension with the constant NPS pension for
/// side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionGrowthPoint {
    /// Calendar year of this point.
    pub year: i32,
    /// Calendar month of this point (1-based; January or July).
    pub month: u32,
    /// The projected UPS monthly pension at this point.
    pub pension: Decimal,
    /// The constant NPS monthly pension, for comparison.
    pub comparison: Decimal,
}

/// Terminal figures for the defined-benefit (UPS) scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsBenefit {
    /// Trailing average emoluments over the final months of service,
    /// rounded to whole units.
    pub avg_emoluments: Decimal,
    /// The monthly pension at retirement; zero when ineligible.
    pub monthly_pension: Decimal,
    /// The retirement gratuity, capped at the policy ceiling.
    pub gratuity: Decimal,
    /// The half-yearly pension projection over the post-exit horizon.
    pub pension_growth: Vec<PensionGrowthPoint>,
    /// Mean of the projected pensions, rounded — the figure the 20-year
    /// total-value comparison uses.
    pub avg_pension_20yr: Decimal,
}

/// The composed result of a full projection.
///
/// Assembled once by the orchestrator after both scheme calculators have
/// run; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// The simulated month-by-month career timeline.
    pub timeline: Vec<TimelineEntry>,
    /// The contribution-scheme benefit figures.
    pub nps: NpsBenefit,
    /// The defined-benefit-scheme figures.
    pub ups: UpsBenefit,
    /// Whole years of simulated service, rounded to the nearest year.
    pub service_years: u32,
    /// Completed half-year periods of simulated service.
    pub completed_half_years: u32,
    /// Basic pay drawn in the final simulated month.
    pub retirement_basic: Decimal,
    /// Allowance percentage in the final simulated month.
    pub final_allowance_percent: Decimal,
    /// `nps_total_value − ups_total_value`.
    pub difference_value: Decimal,
    /// True when simulated service meets the minimum for a UPS pension.
    pub ups_eligible: bool,
    /// The pay-scale revisions applied during simulation, in order.
    pub pay_revisions: Vec<PayRevisionEvent>,
    /// NPS value over the post-exit horizon:
    /// `lump_sum + monthly_pension × 12 × horizon_years`.
    pub nps_total_value: Decimal,
    /// UPS value over the post-exit horizon:
    /// `gratuity + avg_pension_20yr × 12 × horizon_years`.
    pub ups_total_value: Decimal,
}
