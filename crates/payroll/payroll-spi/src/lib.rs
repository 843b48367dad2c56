//! Payroll Service Provider Interface
//!
//! Contract of the historical aggregator: monthly payroll and KPI
//! aggregates over a trailing window, plus the period payroll, payslip and
//! KPI analytics views the forecasting pages sit next to.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::*;
pub use error::*;
pub use model::*;
