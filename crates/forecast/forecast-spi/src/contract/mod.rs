//! Contract module containing trait definitions for forecast operations

mod jitter_source;
mod trend_fitter;

pub use jitter_source::JitterSource;
pub use trend_fitter::{TrendFitter, MIN_SAMPLES};
