//! The projection orchestrator.
//!
//! Validates the inputs, turns promotion drafts into ordered events, drives
//! the timeline simulator, invokes both benefit calculators, and assembles
//! the composed [`ProjectionResult`]. Calculation is all-or-nothing: any
//! failure surfaces as a typed error with no partial result.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::{PAY_LEVELS, PayMatrix, PolicyConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{CareerProfile, ProjectionResult, PromotionDraft, PromotionEvent};

use super::{calculate_nps_benefits, calculate_ups_benefits, simulate_timeline};

/// Runs a full projection: career simulation plus both benefit schemes.
///
/// `promotion_drafts` may arrive unordered and partially filled; only drafts
/// with all fields present and an effective date on or after the simulation
/// start are considered, sorted by effective date.
///
/// # Errors
///
/// - [`EngineError::InvalidInput`] when the profile or a complete promotion
///   draft is malformed, or the retirement date is not after the start date.
/// - [`EngineError::PayProtectionViolation`] propagated from the simulator.
/// - [`EngineError::Calculation`] for unexpected internal faults.
pub fn calculate_projection(
    profile: &CareerProfile,
    promotion_drafts: &[PromotionDraft],
    matrix: &PayMatrix,
    policy: &PolicyConfig,
) -> EngineResult<ProjectionResult> {
    policy.validate()?;
    validate_profile(profile, matrix)?;
    let promotions = collect_promotions(promotion_drafts, profile.start_date, matrix)?;

    let outcome = simulate_timeline(profile, &promotions, matrix, policy)?;

    let service_months = months_between(profile.start_date, profile.retirement_date);
    let completed_half_years = service_months / 6;
    let service_years = (service_months + 6) / 12;
    let ups_eligible = service_months >= policy.min_service_years * 12;
    debug!(service_months, ups_eligible, "timeline simulated");

    let nps = calculate_nps_benefits(outcome.final_corpus, policy);
    let ups = calculate_ups_benefits(
        &outcome.entries,
        completed_half_years,
        ups_eligible,
        nps.monthly_pension,
        policy,
    );

    let last = outcome.entries.last().ok_or_else(|| EngineError::Calculation {
        message: "simulation produced no timeline entries".to_string(),
    })?;
    let retirement_basic = last.basic_pay;
    let final_allowance_percent = last.allowance_percent;

    let horizon_months = Decimal::from(policy.post_exit_horizon_years * 12);
    let nps_total_value = nps.lump_sum + nps.monthly_pension * horizon_months;
    let ups_total_value = ups.gratuity + ups.avg_pension_20yr * horizon_months;

    Ok(ProjectionResult {
        timeline: outcome.entries,
        nps,
        ups,
        service_years,
        completed_half_years,
        retirement_basic,
        final_allowance_percent,
        difference_value: nps_total_value - ups_total_value,
        ups_eligible,
        pay_revisions: outcome.revisions,
        nps_total_value,
        ups_total_value,
    })
}

/// Checks the profile fields are well-formed against the matrix.
fn validate_profile(profile: &CareerProfile, matrix: &PayMatrix) -> EngineResult<()> {
    if profile.level < 1 || profile.level > PAY_LEVELS || !matrix.has_level(profile.level) {
        return Err(EngineError::InvalidInput {
            field: "level".to_string(),
            message: format!("level {} is not in the pay matrix", profile.level),
        });
    }
    if profile.basic_pay <= Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "basic_pay".to_string(),
            message: "must be positive".to_string(),
        });
    }
    if profile.allowance_percent < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "allowance_percent".to_string(),
            message: "must not be negative".to_string(),
        });
    }
    if let Some(corpus) = profile.opening_corpus {
        if corpus < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "opening_corpus".to_string(),
                message: "must not be negative".to_string(),
            });
        }
    }
    Ok(())
}

/// Turns drafts into validated, date-ordered promotion events.
///
/// Incomplete drafts are skipped; drafts dated before the simulation start
/// are excluded entirely; a complete draft whose target basic is not a cell
/// of the target level is an error.
fn collect_promotions(
    drafts: &[PromotionDraft],
    start: NaiveDate,
    matrix: &PayMatrix,
) -> EngineResult<Vec<PromotionEvent>> {
    let mut events = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let Some(event) = draft.complete() else {
            warn!(?draft, "skipping incomplete promotion draft");
            continue;
        };
        if event.effective_date < start {
            debug!(
                effective_date = %event.effective_date,
                "excluding promotion dated before the simulation start"
            );
            continue;
        }
        if matrix.step_for_basic(event.level, event.basic_pay).is_none() {
            return Err(EngineError::InvalidInput {
                field: "promotions".to_string(),
                message: format!(
                    "no pay cell with basic {} at level {} (effective {})",
                    event.basic_pay, event.level, event.effective_date
                ),
            });
        }
        events.push(event);
    }
    events.sort_by_key(|event| event.effective_date);
    Ok(events)
}

/// Whole calendar months from `start` to `end`.
fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    months.max(0) as u32
}
