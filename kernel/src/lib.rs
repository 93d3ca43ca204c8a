//! Muscle Kernel: the read-only data model consumed by the aggregation engine.
//!
//! # Contents
//!
//! - [`unit`] -- unit templates (apartments, cores, entrances) with their
//!   pre-computed scalar attributes
//! - [`dataset`] -- a catalogue of templates plus shared building parameters
//! - [`mix`] -- unit-mix categories and their reconciliation
//!
//! The kernel holds data only. It knows nothing about search, rules, or cost.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dataset;
pub mod error;
pub mod mix;
pub mod unit;
