//! Row and view models returned by the aggregator.

mod history;
pub mod numeric;
mod payroll;
mod performance;
mod records;

pub use history::*;
pub use numeric::NumericValue;
pub use payroll::*;
pub use performance::*;
pub use records::*;
