//! The pay matrix: an immutable (level, step) → basic pay lookup table.
//!
//! The matrix has a fixed shape of 18 levels × 40 steps. It can be generated
//! from the documented 3%-per-step formula or supplied by an external loader;
//! either way it is read-only once constructed and safe to share by reference
//! across concurrent projections.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::PolicyConfig;
use crate::error::{EngineError, EngineResult};

/// Number of pay levels in the matrix.
pub const PAY_LEVELS: u32 = 18;

/// Number of pay steps (cells) per level.
pub const STEPS_PER_LEVEL: u32 = 40;

/// Entry pay for each level, in whole currency units. Step 1 of a level is
/// its entry pay; each further step is 3% over the previous, rounded.
const LEVEL_BASE_PAY: [u32; PAY_LEVELS as usize] = [
    18000, 19900, 21700, 25500, 29200, 35400, 44900, 47600, 53100, 56100, 67700, 78800, 118500,
    123100, 131100, 144200, 182200, 205400,
];

/// An immutable pay matrix mapping (level, step) to a basic pay amount.
///
/// # Example
///
/// ```
/// use pension_engine::config::PayMatrix;
/// use rust_decimal::Decimal;
///
/// let matrix = PayMatrix::generate();
/// assert_eq!(matrix.basic_at(1, 1), Some(Decimal::from(18000)));
/// assert_eq!(matrix.step_for_basic(1, Decimal::from(18540)), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayMatrix {
    levels: BTreeMap<u32, Vec<Decimal>>,
}

impl PayMatrix {
    /// Generates the matrix from the per-level entry pay and the 3%-per-step
    /// progression: `step[i + 1] = round(step[i] × 1.03)`.
    pub fn generate() -> Self {
        let step_ratio = Decimal::new(103, 2);
        let mut levels = BTreeMap::new();
        for (offset, base) in LEVEL_BASE_PAY.iter().enumerate() {
            let mut steps = Vec::with_capacity(STEPS_PER_LEVEL as usize);
            let mut value = Decimal::from(*base);
            for _ in 0..STEPS_PER_LEVEL {
                steps.push(value);
                value = (value * step_ratio)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            }
            levels.insert(offset as u32 + 1, steps);
        }
        Self { levels }
    }

    /// Finds the step whose basic pay equals `basic` exactly.
    ///
    /// Returns `None` when the level is unknown or no cell matches. Callers
    /// decide how to treat a miss; the simulator's documented policy is to
    /// fall back to step 1 for a profile's starting basic.
    pub fn step_for_basic(&self, level: u32, basic: Decimal) -> Option<u32> {
        let steps = self.levels.get(&level)?;
        steps.iter().position(|cell| *cell == basic).map(|i| i as u32 + 1)
    }

    /// Returns the basic pay at `step` within `level`.
    ///
    /// Steps past the top of the scale read as the final step (salary growth
    /// plateaus there); steps below 1 read as step 1. Returns `None` only for
    /// an unknown level.
    pub fn basic_at(&self, level: u32, step: u32) -> Option<Decimal> {
        let steps = self.levels.get(&level)?;
        let capped = step.clamp(1, steps.len() as u32);
        steps.get(capped as usize - 1).copied()
    }

    /// Returns the ordered pay cells of a level, or `None` for an unknown
    /// level.
    pub fn steps(&self, level: u32) -> Option<&[Decimal]> {
        self.levels.get(&level).map(Vec::as_slice)
    }

    /// Returns true when the matrix contains the given level.
    pub fn has_level(&self, level: u32) -> bool {
        self.levels.contains_key(&level)
    }

    /// Lists the pay cells at `level` that satisfy pay protection against
    /// `prior_basic`, i.e. cells ≥ `prior_basic × pay_protection_factor`.
    ///
    /// Returns `None` for an unknown level. This is the candidate set a
    /// caller may offer when composing a promotion.
    pub fn promotion_options(
        &self,
        level: u32,
        prior_basic: Decimal,
        policy: &PolicyConfig,
    ) -> Option<Vec<Decimal>> {
        let minimum = prior_basic * policy.pay_protection_factor;
        self.levels
            .get(&level)
            .map(|steps| steps.iter().copied().filter(|cell| *cell >= minimum).collect())
    }

    /// Checks that an externally supplied matrix has the fixed 18 × 40 shape
    /// with strictly ascending cells per level.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] describing the first violation.
    pub fn validate(&self) -> EngineResult<()> {
        for level in 1..=PAY_LEVELS {
            let Some(steps) = self.levels.get(&level) else {
                return Err(shape_error(format!("missing level {level}")));
            };
            if steps.len() != STEPS_PER_LEVEL as usize {
                return Err(shape_error(format!(
                    "level {level} has {} steps, expected {STEPS_PER_LEVEL}",
                    steps.len()
                )));
            }
            if steps.windows(2).any(|pair| pair[1] <= pair[0]) {
                return Err(shape_error(format!("level {level} steps are not ascending")));
            }
        }
        if self.levels.len() != PAY_LEVELS as usize {
            return Err(shape_error(format!(
                "{} levels present, expected {PAY_LEVELS}",
                self.levels.len()
            )));
        }
        Ok(())
    }
}

fn shape_error(message: String) -> EngineError {
    EngineError::InvalidInput {
        field: "pay_matrix".to_string(),
        message,
    }
}
