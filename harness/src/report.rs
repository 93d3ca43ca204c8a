//! Session report: the best solution found, its cost terms, and the
//! search budget that produced it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::CostBreakdown;
use crate::digest::solution_digest;
use crate::error::RunError;
use crate::state::AggState;

/// Unit counts of a solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCounts {
    pub apartments: usize,
    pub entrances: u32,
    pub fire_cores: u32,
    pub lift_cores: u32,
    pub stair_cores: u32,
}

/// Outcome of one aggregation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationReport {
    pub dataset: String,
    pub seed: u64,
    pub level: u32,
    pub rollouts_per_leaf: u32,
    /// Negated total cost.
    pub reward: f64,
    /// Rollouts performed.
    pub iterations: u64,
    pub target_length: f64,
    pub total_length: f64,
    pub required_shift: f64,
    /// Unit names, in placement order.
    pub sequence: Vec<String>,
    pub unit_lengths: Vec<f64>,
    pub corridor_lengths: Vec<f64>,
    pub counts: UnitCounts,
    pub cost: CostBreakdown,
    pub solution_digest: String,
}

/// Search context recorded alongside a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionInfo<'a> {
    pub dataset: &'a str,
    pub seed: u64,
    pub level: u32,
    pub rollouts_per_leaf: u32,
    pub reward: f64,
    pub iterations: u64,
}

impl AggregationReport {
    #[must_use]
    pub fn new(info: SessionInfo<'_>, solution: &AggState, cost: CostBreakdown) -> Self {
        Self {
            dataset: info.dataset.to_string(),
            seed: info.seed,
            level: info.level,
            rollouts_per_leaf: info.rollouts_per_leaf,
            reward: info.reward,
            iterations: info.iterations,
            target_length: solution.data().target_length,
            total_length: solution.total_length(),
            required_shift: solution.required_shift(),
            sequence: solution
                .sequence()
                .iter()
                .map(|a| a.name().to_string())
                .collect(),
            unit_lengths: solution.sequence().iter().map(|a| a.length()).collect(),
            corridor_lengths: solution.corridor_lengths().to_vec(),
            counts: UnitCounts {
                apartments: solution
                    .sequence()
                    .iter()
                    .filter(|a| a.unit.is_apartment())
                    .count(),
                entrances: solution.entrance_count(),
                fire_cores: solution.fire_core_count(),
                lift_cores: solution.lift_core_count(),
                stair_cores: solution.stair_core_count(),
            },
            cost,
            solution_digest: solution_digest(solution),
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Report`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, RunError> {
        serde_json::to_string_pretty(self).map_err(|e| RunError::Report {
            detail: e.to_string(),
        })
    }

    /// Write the report as JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Report`] if serialization or the write fails.
    pub fn write_json(&self, path: &Path) -> Result<(), RunError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|e| RunError::Report {
            detail: format!("cannot write {}: {e}", path.display()),
        })
    }
}
