//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{
    PagIbigParams, PhilHealthParams, SssTable, StatutoryConfig, WithholdingTaxTable, WorkSchedule,
};

/// Contributions configuration file structure.
#[derive(Debug, Deserialize)]
struct ContributionsConfig {
    sss: SssTable,
    philhealth: PhilHealthParams,
    pagibig: PagIbigParams,
}

/// Loads and provides access to the statutory configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// assembles them into a [`StatutoryConfig`].
///
/// # Directory Structure
///
/// ```text
/// config/statutory/
/// ├── schedule.yaml       # Work-schedule rules
/// ├── contributions.yaml  # SSS, PhilHealth and Pag-IBIG tables
/// └── tax.yaml            # Withholding-tax brackets
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory")?;
/// let config = loader.config();
/// assert_eq!(config.schedule.grace_minutes, 10);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/statutory")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let schedule = Self::load_yaml::<WorkSchedule>(&path.join("schedule.yaml"))?;
        let contributions =
            Self::load_yaml::<ContributionsConfig>(&path.join("contributions.yaml"))?;
        let tax = Self::load_yaml::<WithholdingTaxTable>(&path.join("tax.yaml"))?;

        Ok(Self {
            config: StatutoryConfig {
                schedule,
                sss: contributions.sss,
                philhealth: contributions.philhealth,
                pagibig: contributions.pagibig,
                tax,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> StatutoryConfig {
        self.config
    }
}
