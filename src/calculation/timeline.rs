//! The career timeline simulator.
//!
//! A single-threaded state machine advancing one calendar month per step,
//! from the simulation start date through the retirement date inclusive.
//! Each month applies, in fixed order: promotion, pay-scale revision, annual
//! increment, allowance revision, then pay derivation and corpus
//! accumulation. The order is significant: an increment in the same January
//! as a pay-scale revision overwrites the revised basic with the step's
//! table value.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{PayMatrix, PolicyConfig, STEPS_PER_LEVEL};
use crate::error::{EngineError, EngineResult};
use crate::models::{CareerProfile, PayRevisionEvent, PromotionEvent, TimelineEntry};

use super::round_unit;

/// The product of a completed simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOutcome {
    /// One entry per simulated month, in strict (year, month) order.
    pub entries: Vec<TimelineEntry>,
    /// The pay-scale revisions applied, in order.
    pub revisions: Vec<PayRevisionEvent>,
    /// The corpus accumulator at full precision. Entries snapshot the
    /// rounded value; benefit calculations start from this one.
    pub final_corpus: Decimal,
}

/// Simulates the career timeline month by month.
///
/// `promotions` must be sorted by effective date; when several promotions
/// share an effective month, the first one wins and the rest never fire.
/// Promotions dated outside the simulated range are ignored.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] when the retirement date is not strictly
///   after the start date, or the policy fails validation.
/// - [`EngineError::PayProtectionViolation`] when a promotion's basic falls
///   below the protected minimum. The simulation aborts atomically; no
///   partial timeline is returned.
/// - [`EngineError::Calculation`] when the pay matrix has no cell for the
///   level/step the simulation reaches.
pub fn simulate_timeline(
    profile: &CareerProfile,
    promotions: &[PromotionEvent],
    matrix: &PayMatrix,
    policy: &PolicyConfig,
) -> EngineResult<TimelineOutcome> {
    policy.validate()?;
    if profile.retirement_date <= profile.start_date {
        return Err(EngineError::InvalidInput {
            field: "retirement_date".to_string(),
            message: "must be after the simulation start date".to_string(),
        });
    }

    let mut year = profile.start_date.year();
    let mut month = profile.start_date.month();
    let end = (
        profile.retirement_date.year(),
        profile.retirement_date.month(),
    );

    let mut level = profile.level;
    let mut basic = profile.basic_pay;
    let mut step = step_or_fallback(matrix, level, basic);
    let mut allowance_percent = profile.allowance_percent;
    let mut corpus = profile.opening_corpus.unwrap_or(Decimal::ZERO);
    let mut next_revision_year = first_revision_year(profile.start_date, policy);

    let monthly_factor = policy.monthly_growth_factor();
    let mut entries = Vec::new();
    let mut revisions = Vec::new();

    while (year, month) <= end {
        // 1. Promotion due this month.
        if let Some(promotion) = promotions
            .iter()
            .find(|p| p.effective_date.year() == year && p.effective_date.month() == month)
        {
            let prior_basic = basic;
            let minimum = prior_basic * policy.pay_protection_factor;
            if promotion.basic_pay < minimum {
                return Err(EngineError::PayProtectionViolation {
                    effective_date: promotion.effective_date,
                    offered_basic: promotion.basic_pay,
                    minimum_basic: minimum.ceil(),
                });
            }
            level = promotion.level;
            basic = promotion.basic_pay;
            step = step_or_fallback(matrix, level, basic);
            debug!(year, month, level, basic = %basic, "applied promotion");
        }

        // 2. Decennial pay-scale revision, always in January.
        if month == 1 && year == next_revision_year {
            let old_basic = basic;
            basic = round_unit(basic * policy.fitment_factor);
            allowance_percent = Decimal::ZERO;
            revisions.push(PayRevisionEvent {
                year,
                old_basic,
                new_basic: basic,
            });
            next_revision_year += policy.revision_interval_years;
            debug!(year, old_basic = %old_basic, new_basic = %basic, "applied pay-scale revision");
        }

        // 3. Annual increment: one step up, capped at the top of the scale.
        if profile.increment_month.matches(month) && step < STEPS_PER_LEVEL {
            step += 1;
            basic = matrix.basic_at(level, step).ok_or_else(|| EngineError::Calculation {
                message: format!("no pay cell at level {level} step {step}"),
            })?;
        }

        // 4. Half-yearly allowance revision, independent of step 3.
        if month == 1 || month == 7 {
            allowance_percent += policy.allowance_step_percent;
        }

        // 5.-7. Derive the month's pay and grow the corpus. The contribution
        // is credited before this month's growth is applied.
        let allowance_amount = round_unit(basic * allowance_percent / Decimal::ONE_HUNDRED);
        let gross_pay = basic + allowance_amount;
        let contribution = gross_pay * policy.contribution_rate;
        corpus += contribution;
        corpus *= monthly_factor;

        entries.push(TimelineEntry {
            year,
            month,
            level,
            step,
            basic_pay: basic,
            allowance_percent,
            allowance_amount,
            gross_pay,
            contribution,
            corpus: round_unit(corpus),
        });

        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }

    Ok(TimelineOutcome {
        entries,
        revisions,
        final_corpus: corpus,
    })
}

/// Resolves a basic pay to its step index, falling back to step 1 when the
/// amount is not a cell of the level. A miss is logged: the next increment
/// snaps the pay onto the table track of the fallback step.
fn step_or_fallback(matrix: &PayMatrix, level: u32, basic: Decimal) -> u32 {
    match matrix.step_for_basic(level, basic) {
        Some(step) => step,
        None => {
            warn!(level, basic = %basic, "basic pay not found in pay matrix, defaulting to step 1");
            1
        }
    }
}

/// Computes the first pay-scale revision year at or after the start date:
/// the smallest `decade start + offset` whose January has not already passed.
fn first_revision_year(start: chrono::NaiveDate, policy: &PolicyConfig) -> i32 {
    let mut year = (start.year() / 10) * 10 + policy.revision_offset_years;
    while year < start.year() || (year == start.year() && start.month() > 1) {
        year += policy.revision_interval_years;
    }
    year
}
