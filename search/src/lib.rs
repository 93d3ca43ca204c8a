//! Muscle Search: a policy-agnostic Nested Monte-Carlo Search driver.
//!
//! The engine has no domain knowledge. It explores a problem only through
//! the [`contract::SearchRules`] / [`contract::SearchState`] traits, and it
//! takes its randomness from a caller-supplied RNG so that identical seeds
//! give bit-identical searches.
//!
//! # Key types
//!
//! - [`contract::SearchRules`] -- action enumeration, rollout policy, cost
//! - [`contract::SearchState`] -- clonable, append-only search state
//! - [`policy::SearchPolicy`] -- nesting level and rollout budget
//! - [`search::NestedSearch`] -- the recursive driver
//! - [`search::SearchOutcome`] -- best reward, solution, and rollout count

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod policy;
pub mod search;
