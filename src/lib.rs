#![warn(rust_2018_idioms)]

pub mod aggregate;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingest;

#[cfg(test)]
mod test_support;

pub use aggregate::{AggregationEngine, AggregationLimits};
pub use error::AnalyticsError;
pub use ingest::Snapshot;
