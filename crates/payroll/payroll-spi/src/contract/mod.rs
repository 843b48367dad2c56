//! Trait contracts for the historical aggregator.

mod aggregate_source;

pub use aggregate_source::*;
