//! Career profile and promotion models.
//!
//! This module defines the validated input records for a projection: the
//! employee's [`CareerProfile`], the [`PromotionDraft`] records a caller may
//! accumulate field by field, and the fully specified [`PromotionEvent`] the
//! simulator actually observes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calendar month in which the annual pay-step increment is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncrementMonth {
    /// Increment granted every January.
    January,
    /// Increment granted every July.
    July,
}

impl IncrementMonth {
    /// Returns the 1-based calendar month number (January = 1, July = 7).
    pub fn month_number(self) -> u32 {
        match self {
            IncrementMonth::January => 1,
            IncrementMonth::July => 7,
        }
    }

    /// Returns true when `month` (1-based) is this increment month.
    pub fn matches(self, month: u32) -> bool {
        self.month_number() == month
    }
}

/// The employee's position and service dates at the start of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    /// The pay level held at the simulation start (1..=18).
    pub level: u32,
    /// The basic pay drawn at the simulation start.
    pub basic_pay: Decimal,
    /// The dearness-allowance percentage at the simulation start.
    pub allowance_percent: Decimal,
    /// The month in which the annual increment is granted.
    pub increment_month: IncrementMonth,
    /// The date the simulation starts.
    pub start_date: NaiveDate,
    /// The retirement date; the simulation covers every month up to and
    /// including this one. Must be strictly after `start_date`.
    pub retirement_date: NaiveDate,
    /// An already accumulated contribution corpus, credited before the first
    /// simulated month.
    #[serde(default)]
    pub opening_corpus: Option<Decimal>,
}

/// A promotion being assembled by a caller, with any subset of its fields
/// filled in.
///
/// Drafts are what a form produces while the user is still typing; only a
/// draft with all three fields present becomes a [`PromotionEvent`] and
/// reaches the simulator.
///
/// # Example
///
/// ```
/// use pension_engine::models::PromotionDraft;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut draft = PromotionDraft::default();
/// assert!(draft.complete().is_none());
///
/// draft.effective_date = NaiveDate::from_ymd_opt(2030, 7, 1);
/// draft.level = Some(6);
/// draft.basic_pay = Some(Decimal::from(35400));
/// assert!(draft.complete().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionDraft {
    /// The date the promotion takes effect, if chosen yet.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
    /// The target pay level, if chosen yet.
    #[serde(default)]
    pub level: Option<u32>,
    /// The target basic pay, if chosen yet.
    #[serde(default)]
    pub basic_pay: Option<Decimal>,
}

impl PromotionDraft {
    /// Returns the fully specified promotion event, or `None` while any
    /// field is still missing.
    pub fn complete(&self) -> Option<PromotionEvent> {
        Some(PromotionEvent {
            effective_date: self.effective_date?,
            level: self.level?,
            basic_pay: self.basic_pay?,
        })
    }
}

/// A fully specified promotion: effective date, target level, target basic.
///
/// The target basic must exist in the pay matrix at the target level, and
/// must satisfy pay protection against the basic held immediately before the
/// promotion (enforced during simulation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PromotionEvent {
    /// The date the promotion takes effect; only its year and month matter.
    pub effective_date: NaiveDate,
    /// The target pay level.
    pub level: u32,
    /// The target basic pay.
    pub basic_pay: Decimal,
}
