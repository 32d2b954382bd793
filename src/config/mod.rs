//! Configuration for the pension projection engine.
//!
//! This module provides the policy constants ([`PolicyConfig`]), the pay
//! matrix ([`PayMatrix`]), and YAML loading for both ([`ConfigLoader`]).

mod loader;
mod pay_matrix;
mod types;

pub use loader::ConfigLoader;
pub use pay_matrix::{PAY_LEVELS, PayMatrix, STEPS_PER_LEVEL};
pub use types::PolicyConfig;
