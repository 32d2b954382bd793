//! Policy configuration for the pension projection engine.
//!
//! Every rate, factor, cap, and horizon the engine applies is a named field
//! here rather than a literal buried in a calculator. The defaults reproduce
//! the published scheme parameters; individual fields can be overridden via
//! YAML (see [`super::ConfigLoader`]).

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// The complete set of policy constants driving a projection.
///
/// Missing fields in a deserialized configuration fall back to the documented
/// defaults, so a YAML file only needs to name the values it overrides.
///
/// # Example
///
/// ```
/// use pension_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::default();
/// assert_eq!(policy.fitment_factor, Decimal::from(2));
/// assert_eq!(policy.gratuity_cap, Decimal::from(2_000_000));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// A promotion's basic pay must be at least this multiple of the basic
    /// pay held immediately before the promotion.
    pub pay_protection_factor: Decimal,
    /// Multiplier applied to basic pay at each decennial pay-scale revision.
    pub fitment_factor: Decimal,
    /// Years between pay-scale revisions. Must be at least 1.
    pub revision_interval_years: i32,
    /// A revision year is the start of a decade plus this offset.
    pub revision_offset_years: i32,
    /// Dearness-allowance increase applied every January and July, in
    /// percentage points (additive, not compounding).
    pub allowance_step_percent: Decimal,
    /// Combined employee and employer contribution rate on gross pay.
    pub contribution_rate: Decimal,
    /// Nominal yearly corpus growth rate, compounded monthly.
    pub annual_growth_rate: Decimal,
    /// Yearly annuity payout rate on the annuitized share of the corpus.
    pub annuity_rate: Decimal,
    /// Share of the corpus withdrawn as a lump sum at exit; the remainder
    /// funds the annuity.
    pub lump_sum_fraction: Decimal,
    /// UPS pension as a fraction of trailing average emoluments.
    pub pension_fraction: Decimal,
    /// Gratuity accrual per completed half-year of service, as a fraction of
    /// the last drawn emoluments.
    pub gratuity_rate: Decimal,
    /// Gratuity ceiling in whole currency units.
    pub gratuity_cap: Decimal,
    /// Minimum whole years of service for UPS pension eligibility.
    pub min_service_years: u32,
    /// Trailing window, in months, for the average-emoluments calculation.
    /// Must be at least 1.
    pub averaging_window_months: usize,
    /// Post-retirement horizon, in years, for the allowance-growth pension
    /// projection and the scheme total-value comparison.
    pub post_exit_horizon_years: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            pay_protection_factor: Decimal::new(103, 2),
            fitment_factor: Decimal::from(2),
            revision_interval_years: 10,
            revision_offset_years: 6,
            allowance_step_percent: Decimal::from(3),
            contribution_rate: Decimal::new(24, 2),
            annual_growth_rate: Decimal::new(8, 2),
            annuity_rate: Decimal::new(65, 3),
            lump_sum_fraction: Decimal::new(6, 1),
            pension_fraction: Decimal::new(5, 1),
            gratuity_rate: Decimal::new(1, 1),
            gratuity_cap: Decimal::from(2_000_000),
            min_service_years: 10,
            averaging_window_months: 10,
            post_exit_horizon_years: 20,
        }
    }
}

impl PolicyConfig {
    /// Returns the monthly corpus growth factor, `1 + annual_growth_rate / 12`.
    pub fn monthly_growth_factor(&self) -> Decimal {
        Decimal::ONE + self.annual_growth_rate / Decimal::from(12)
    }

    /// Checks that the configuration is internally usable.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when a field is outside its
    /// documented domain (non-positive intervals or windows, negative rates,
    /// a pay-protection factor below 1, or a lump-sum fraction outside [0, 1]).
    pub fn validate(&self) -> EngineResult<()> {
        if self.revision_interval_years < 1 {
            return Err(invalid("revision_interval_years", "must be at least 1"));
        }
        if self.averaging_window_months < 1 {
            return Err(invalid("averaging_window_months", "must be at least 1"));
        }
        if self.pay_protection_factor < Decimal::ONE {
            return Err(invalid("pay_protection_factor", "must be at least 1"));
        }
        if self.lump_sum_fraction < Decimal::ZERO || self.lump_sum_fraction > Decimal::ONE {
            return Err(invalid("lump_sum_fraction", "must be between 0 and 1"));
        }
        let rates = [
            ("fitment_factor", self.fitment_factor),
            ("allowance_step_percent", self.allowance_step_percent),
            ("contribution_rate", self.contribution_rate),
            ("annual_growth_rate", self.annual_growth_rate),
            ("annuity_rate", self.annuity_rate),
            ("pension_fraction", self.pension_fraction),
            ("gratuity_rate", self.gratuity_rate),
            ("gratuity_cap", self.gratuity_cap),
        ];
        for (field, value) in rates {
            if value < Decimal::ZERO {
                return Err(invalid(field, "must not be negative"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidInput {
        field: field.to_string(),
        message: message.to_string(),
    }
}
