//! Common types and traits for reference-data aggregates

pub mod aggregate_id;

// Re-exports
pub use aggregate_id::AggregateId;
