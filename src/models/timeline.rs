//! Timeline models: the per-month pay snapshots a simulation produces and
//! the pay-scale revision event log.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One simulated month of the career timeline.
///
/// Entries are appended in strict (year, month) order, exactly one per
/// calendar month between the simulation start and the retirement date
/// inclusive, and are never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Calendar year of this entry.
    pub year: i32,
    /// Calendar month of this entry (1-based, January = 1).
    pub month: u32,
    /// Pay level held this month.
    pub level: u32,
    /// Step index within the level (1..=40).
    pub step: u32,
    /// Basic pay drawn this month.
    pub basic_pay: Decimal,
    /// Dearness-allowance percentage applied this month.
    pub allowance_percent: Decimal,
    /// Allowance amount: basic × allowance fraction, rounded to whole units.
    pub allowance_amount: Decimal,
    /// Gross pay: basic plus allowance amount.
    pub gross_pay: Decimal,
    /// Contribution credited to the corpus this month.
    pub contribution: Decimal,
    /// Corpus after this month's contribution and growth, rounded to whole
    /// units.
    pub corpus: Decimal,
}

impl TimelineEntry {
    /// Returns the first day of this entry's month.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns basic pay grossed up by the allowance fraction,
    /// `basic × (1 + percent / 100)` — the emoluments base used for the
    /// defined-benefit pension and gratuity.
    pub fn total_emoluments(&self) -> Decimal {
        self.basic_pay * (Decimal::ONE + self.allowance_percent / Decimal::ONE_HUNDRED)
    }
}

/// A pay-scale revision applied during simulation.
///
/// Revisions are logged separately from the timeline: the entry for the
/// revision month already reflects the revised basic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRevisionEvent {
    /// The year the revision took effect (always in January).
    pub year: i32,
    /// Basic pay immediately before the revision.
    pub old_basic: Decimal,
    /// Basic pay immediately after the fitment factor was applied.
    pub new_basic: Decimal,
}
