//! Statutory configuration for the Payroll Calculation Engine.
//!
//! This module provides the strongly-typed work-schedule rules and
//! fiscal-year statutory tables (SSS, PhilHealth, Pag-IBIG, withholding tax)
//! the calculations run against, plus a loader for reading them from YAML
//! files. Built-in constructors carry the fiscal-2023 values, so no files
//! are required to use the engine.
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::StatutoryConfig;
//!
//! let config = StatutoryConfig::fiscal_2023();
//! assert_eq!(config.schedule.grace_minutes, 10);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    PagIbigParams, PhilHealthParams, SssBand, SssTable, StatutoryConfig, TaxBracket,
    WithholdingTaxTable, WorkSchedule,
};
