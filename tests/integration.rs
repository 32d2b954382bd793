//! End-to-end scenario tests for the pension projection engine.
//!
//! These cover the full pipeline — validation, career simulation, both
//! benefit calculators, and result assembly — against complete careers:
//! - a 30-year career with decennial pay-scale revisions
//! - allowance cadence and corpus monotonicity across the whole timeline
//! - the exact 20-year total-value formulas
//! - rejected inputs (bad dates, under-protected promotions)
//! - promotion draft filtering

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use pension_engine::calculation::calculate_projection;
use pension_engine::config::{PayMatrix, PolicyConfig};
use pension_engine::error::EngineError;
use pension_engine::models::{CareerProfile, IncrementMonth, ProjectionResult, PromotionDraft};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The reference career: joined January 2024 at level 1 step 1, retiring
/// January 2054 after 30 years.
fn thirty_year_profile() -> CareerProfile {
    CareerProfile {
        level: 1,
        basic_pay: dec("18000"),
        allowance_percent: dec("50"),
        increment_month: IncrementMonth::January,
        start_date: date(2024, 1, 1),
        retirement_date: date(2054, 1, 1),
        opening_corpus: None,
    }
}

fn run(profile: &CareerProfile, drafts: &[PromotionDraft]) -> Result<ProjectionResult, EngineError> {
    let matrix = PayMatrix::generate();
    let policy = PolicyConfig::default();
    calculate_projection(profile, drafts, &matrix, &policy)
}

// =============================================================================
// Thirty-year reference career
// =============================================================================

#[test]
fn thirty_year_career_produces_a_complete_timeline() {
    let result = run(&thirty_year_profile(), &[]).unwrap();

    // One entry per month, January 2024 through January 2054 inclusive.
    assert_eq!(result.timeline.len(), 361);
    let first = result.timeline.first().unwrap();
    let last = result.timeline.last().unwrap();
    assert_eq!((first.year, first.month), (2024, 1));
    assert_eq!((last.year, last.month), (2054, 1));

    assert_eq!(result.service_years, 30);
    assert_eq!(result.completed_half_years, 60);
    assert!(result.ups_eligible);

    assert_eq!(result.retirement_basic, last.basic_pay);
    assert_eq!(result.final_allowance_percent, last.allowance_percent);
}

#[test]
fn thirty_year_career_sees_three_pay_revisions() {
    let result = run(&thirty_year_profile(), &[]).unwrap();

    let years: Vec<i32> = result.pay_revisions.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2026, 2036, 2046]);

    for revision in &result.pay_revisions {
        // The fitment factor doubles basic pay exactly.
        assert_eq!(revision.new_basic, revision.old_basic * dec("2"));

        // The revision January resets the allowance, and the half-yearly
        // bump then brings it to exactly 3.
        let january = result
            .timeline
            .iter()
            .find(|e| (e.year, e.month) == (revision.year, 1))
            .unwrap();
        assert_eq!(january.allowance_percent, dec("3"));
    }
}

#[test]
fn allowance_steps_up_every_january_and_july() {
    let result = run(&thirty_year_profile(), &[]).unwrap();
    let revision_years: Vec<i32> = result.pay_revisions.iter().map(|r| r.year).collect();

    for pair in result.timeline.windows(2) {
        let (prev, here) = (&pair[0], &pair[1]);
        match here.month {
            1 if revision_years.contains(&here.year) => {
                assert_eq!(here.allowance_percent, dec("3"));
            }
            1 | 7 => {
                assert_eq!(here.allowance_percent, prev.allowance_percent + dec("3"));
            }
            _ => assert_eq!(here.allowance_percent, prev.allowance_percent),
        }
    }
}

#[test]
fn corpus_never_decreases_across_the_timeline() {
    let result = run(&thirty_year_profile(), &[]).unwrap();
    for pair in result.timeline.windows(2) {
        assert!(
            pair[1].corpus >= pair[0].corpus,
            "corpus shrank between {}-{} and {}-{}",
            pair[0].year,
            pair[0].month,
            pair[1].year,
            pair[1].month
        );
    }
    // The NPS corpus is the rounded final accumulator.
    assert_eq!(result.nps.corpus, result.timeline.last().unwrap().corpus);
}

#[test]
fn total_values_match_the_exact_formulas() {
    let result = run(&thirty_year_profile(), &[]).unwrap();

    assert_eq!(
        result.nps_total_value,
        result.nps.lump_sum + result.nps.monthly_pension * dec("240")
    );
    assert_eq!(
        result.ups_total_value,
        result.ups.gratuity + result.ups.avg_pension_20yr * dec("240")
    );
    assert_eq!(
        result.difference_value,
        result.nps_total_value - result.ups_total_value
    );

    // Sixty half-years of a long career push the gratuity to its ceiling
    // or below it, never above.
    assert!(result.ups.gratuity <= dec("2000000"));
    // A 20-year projection has exactly 40 half-year points.
    assert_eq!(result.ups.pension_growth.len(), 40);
}

#[test]
fn nps_figures_are_consistent_with_the_corpus_split() {
    let result = run(&thirty_year_profile(), &[]).unwrap();

    assert_eq!(result.nps.lump_sum, (result.nps.corpus * dec("0.6")).round());
    assert_eq!(result.nps.annuity_corpus, (result.nps.corpus * dec("0.4")).round());
    // Lump sum and annuity corpus partition the corpus (up to rounding).
    let reassembled = result.nps.lump_sum + result.nps.annuity_corpus;
    assert!((reassembled - result.nps.corpus).abs() <= Decimal::ONE);
}

// =============================================================================
// Promotions
// =============================================================================

#[test]
fn promotions_reshape_the_career() {
    let drafts = vec![
        PromotionDraft {
            effective_date: Some(date(2030, 7, 1)),
            level: Some(2),
            basic_pay: Some(dec("23069")),
        },
        // Still being typed in: no basic yet.
        PromotionDraft {
            effective_date: Some(date(2040, 1, 1)),
            level: Some(3),
            basic_pay: None,
        },
        // Dated before the career starts: excluded entirely.
        PromotionDraft {
            effective_date: Some(date(2023, 6, 1)),
            level: Some(4),
            basic_pay: Some(dec("25500")),
        },
    ];

    let result = run(&thirty_year_profile(), &drafts).unwrap();

    let at = |y: i32, m: u32| {
        result
            .timeline
            .iter()
            .find(|e| (e.year, e.month) == (y, m))
            .unwrap()
    };
    assert_eq!(at(2030, 6).level, 1);
    assert_eq!(at(2030, 7).level, 2);
    assert_eq!(at(2030, 7).basic_pay, dec("23069"));
    // The incomplete and the pre-start drafts never fire.
    assert!(result.timeline.iter().all(|e| e.level <= 2));
}

#[test]
fn under_protected_promotion_yields_no_timeline() {
    let drafts = vec![PromotionDraft {
        effective_date: Some(date(2030, 3, 1)),
        level: Some(1),
        basic_pay: Some(dec("18000")),
    }];

    match run(&thirty_year_profile(), &drafts).unwrap_err() {
        EngineError::PayProtectionViolation {
            effective_date,
            offered_basic,
            minimum_basic,
        } => {
            assert_eq!(effective_date, date(2030, 3, 1));
            assert_eq!(offered_basic, dec("18000"));
            assert!(minimum_basic > offered_basic);
        }
        other => panic!("Expected PayProtectionViolation, got {:?}", other),
    }
}

// =============================================================================
// Rejected inputs
// =============================================================================

#[test]
fn retirement_before_start_is_a_validation_error() {
    let mut profile = thirty_year_profile();
    profile.retirement_date = date(2020, 1, 1);

    match run(&profile, &[]).unwrap_err() {
        EngineError::InvalidInput { field, .. } => assert_eq!(field, "retirement_date"),
        other => panic!("Expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn retirement_equal_to_start_is_a_validation_error() {
    let mut profile = thirty_year_profile();
    profile.retirement_date = profile.start_date;
    assert!(matches!(
        run(&profile, &[]).unwrap_err(),
        EngineError::InvalidInput { .. }
    ));
}

// =============================================================================
// Determinism and serialization
// =============================================================================

#[test]
fn identical_inputs_produce_identical_results() {
    let first = run(&thirty_year_profile(), &[]).unwrap();
    let second = run(&thirty_year_profile(), &[]).unwrap();
    assert_eq!(first, second);

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn projection_result_round_trips_through_json() {
    let result = run(&thirty_year_profile(), &[]).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let deserialized: ProjectionResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, deserialized);
}
