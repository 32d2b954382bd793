//! Defined-benefit-scheme (UPS) benefit calculation.
//!
//! The pension is a fixed fraction of the trailing average emoluments, the
//! gratuity is accrued per completed half-year of service up to a ceiling,
//! and a half-yearly allowance-growth projection extends the pension over
//! the post-exit horizon for comparison against the flat NPS pension.

use rust_decimal::Decimal;

use crate::config::PolicyConfig;
use crate::models::{PensionGrowthPoint, TimelineEntry, UpsBenefit};

use super::round_unit;

/// Reduces the finished timeline into the defined-benefit-scheme figures.
///
/// `completed_half_years` is the count of completed half-year periods since
/// the simulation start; `eligible` gates the pension (an ineligible career
/// earns a zero pension but still accrues gratuity); `nps_monthly_pension`
/// only annotates the projection points for comparison and plays no part in
/// the UPS arithmetic itself.
///
/// An empty timeline yields a zeroed benefit with no projection points.
pub fn calculate_ups_benefits(
    timeline: &[TimelineEntry],
    completed_half_years: u32,
    eligible: bool,
    nps_monthly_pension: Decimal,
    policy: &PolicyConfig,
) -> UpsBenefit {
    let Some(last) = timeline.last() else {
        return UpsBenefit {
            avg_emoluments: Decimal::ZERO,
            monthly_pension: Decimal::ZERO,
            gratuity: Decimal::ZERO,
            pension_growth: Vec::new(),
            avg_pension_20yr: Decimal::ZERO,
        };
    };

    // Trailing average of basic grossed up by the allowance fraction, over
    // the final months of service (fewer when the career is shorter).
    let window = policy.averaging_window_months.max(1).min(timeline.len());
    let tail = &timeline[timeline.len() - window..];
    let avg_emoluments =
        tail.iter().map(TimelineEntry::total_emoluments).sum::<Decimal>() / Decimal::from(window as u64);

    let monthly_pension = if eligible {
        round_unit(avg_emoluments * policy.pension_fraction)
    } else {
        Decimal::ZERO
    };

    let gratuity_base = last.total_emoluments();
    let gratuity = round_unit(
        gratuity_base * policy.gratuity_rate * Decimal::from(completed_half_years),
    )
    .min(policy.gratuity_cap);

    // Project the pension across the post-exit horizon: two allowance bumps
    // per year starting from the fraction held at retirement.
    let mut growth_fraction = last.allowance_percent / Decimal::ONE_HUNDRED;
    let bump = policy.allowance_step_percent / Decimal::ONE_HUNDRED;
    let mut pension_growth =
        Vec::with_capacity(policy.post_exit_horizon_years as usize * 2);
    for offset in 0..policy.post_exit_horizon_years {
        let year = last.year + offset as i32;
        for month in [1u32, 7] {
            growth_fraction += bump;
            pension_growth.push(PensionGrowthPoint {
                year,
                month,
                pension: round_unit(monthly_pension * (Decimal::ONE + growth_fraction)),
                comparison: nps_monthly_pension,
            });
        }
    }

    let avg_pension_20yr = if pension_growth.is_empty() {
        Decimal::ZERO
    } else {
        round_unit(
            pension_growth.iter().map(|point| point.pension).sum::<Decimal>()
                / Decimal::from(pension_growth.len() as u64),
        )
    };

    UpsBenefit {
        avg_emoluments: round_unit(avg_emoluments),
        monthly_pension,
        gratuity,
        pension_growth,
        avg_pension_20yr,
    }
}
