//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the policy
//! constants and, optionally, an externally supplied pay matrix from YAML
//! files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::{PayMatrix, PolicyConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── policy.yaml      # Policy constants (missing fields use defaults)
/// └── pay_matrix.yaml  # Optional: externally supplied pay matrix
/// ```
///
/// When `pay_matrix.yaml` is absent the matrix is generated from the
/// documented 3%-per-step formula; when present it must have the fixed
/// 18 × 40 shape.
///
/// # Example
///
/// ```no_run
/// use pension_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// assert!(loader.pay_matrix().has_level(1));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: PolicyConfig,
    pay_matrix: PayMatrix,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when `policy.yaml` is missing or
    /// unparsable, when a supplied `pay_matrix.yaml` is unparsable or has the
    /// wrong shape, or when the loaded policy fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy: PolicyConfig = Self::load_yaml(&path.join("policy.yaml"))?;
        policy.validate()?;

        let matrix_path = path.join("pay_matrix.yaml");
        let pay_matrix = if matrix_path.exists() {
            let matrix: PayMatrix = Self::load_yaml(&matrix_path)?;
            matrix.validate()?;
            matrix
        } else {
            PayMatrix::generate()
        };

        Ok(Self { policy, pay_matrix })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::InvalidInput {
            field: "config".to_string(),
            message: format!("configuration file not found: {path_str}"),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::InvalidInput {
            field: "config".to_string(),
            message: format!("failed to parse '{path_str}': {e}"),
        })
    }

    /// Returns the loaded policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Returns the loaded or generated pay matrix.
    pub fn pay_matrix(&self) -> &PayMatrix {
        &self.pay_matrix
    }
}
