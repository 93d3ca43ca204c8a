//! Shared helpers for the aggregation acceptance tests.

pub mod fixtures;
pub mod knapsack;
pub mod sampling;
