//! Contribution-scheme (NPS) benefit calculation.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::NpsBenefit;

use super::round_unit;

/// Reduces the final corpus into the contribution-scheme benefit figures.
///
/// The corpus is split into a lump-sum withdrawal and an annuity share; the
/// annuity share pays a monthly pension at the policy's yearly annuity rate.
/// Total for any non-negative corpus; no side effects.
///
/// # Example
///
/// ```
/// use pension_engine::calculation::calculate_nps_benefits;
/// use pension_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let benefit = calculate_nps_benefits(Decimal::from(1_000_000), &PolicyConfig::default());
/// assert_eq!(benefit.lump_sum, Decimal::from(600_000));
/// assert_eq!(benefit.annuity_corpus, Decimal::from(400_000));
/// assert_eq!(benefit.monthly_pension, Decimal::from(2_167));
/// ```
pub fn calculate_nps_benefits(corpus: Decimal, policy: &PolicyConfig) -> NpsBenefit {
    let corpus = round_unit(corpus);
    let lump_sum = round_unit(corpus * policy.lump_sum_fraction);
    let annuity_corpus = round_unit(corpus * (Decimal::ONE - policy.lump_sum_fraction));
    let monthly_pension = round_unit(annuity_corpus * policy.annuity_rate / Decimal::from(12));

    NpsBenefit {
        corpus,
        lump_sum,
        annuity_corpus,
        monthly_pension,
        annuity_rate: policy.annuity_rate,
    }
}
