//! Muscle Harness: the aggregation rules the search engine drives.
//!
//! The harness turns a [`muscle_kernel::dataset::Dataset`] and a set of
//! [`rules_data::RulesProps`] into an [`rules::AggRules`] implementation of
//! the search contract, and runs seeded sessions over it.
//!
//! # Contents
//!
//! - [`rules_data`] -- configuration surface and resolved session data
//! - [`catalogue`] -- placement actions and their rollout weights
//! - [`state`] -- placed units, corridor segments, and counters
//! - [`rules`] -- validity, rollout policy, and costing
//! - [`cost`] -- individual cost terms
//! - [`runner`] / [`report`] / [`digest`] -- seeded sessions and their output

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod catalogue;
pub mod clash;
pub mod cost;
pub mod datasets;
pub mod digest;
pub mod error;
pub mod report;
pub mod rules;
pub mod rules_data;
pub mod runner;
pub mod state;
pub mod weights;
