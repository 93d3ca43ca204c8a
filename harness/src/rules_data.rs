//! Rules configuration: the properties a caller supplies, and the resolved
//! data every state and cost term reads.
//!
//! [`RulesProps`] mirrors the external configuration surface: every field
//! except `target_length` is optional. [`RulesData::resolve`] fills the gaps
//! from the dataset, reconciles the unit mix against the dataset's
//! categories, and precomputes the constants the validity checks lean on.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use muscle_kernel::dataset::Dataset;
use muscle_kernel::mix::{reconcile_mix, requested_mix, UnitCategoryMix};
use muscle_kernel::unit::Unit;

use crate::error::RulesConfigError;
use crate::weights::AggRulesWeights;

/// Maximum corridor run per segment type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxCorridorDists {
    /// First segment, before any core.
    pub start: f64,
    /// Segments between two cores.
    pub middle: f64,
    /// Last segment, after the last core.
    pub end: f64,
}

/// Caller-facing rules configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesProps {
    pub target_length: f64,
    pub target_unit_mix: Option<Vec<UnitCategoryMix>>,
    pub can_close_ends: Option<[bool; 2]>,
    pub target_entrance_count: Option<u32>,
    pub has_entry_at_start: Option<bool>,
    pub has_corner_at: Option<[bool; 2]>,
    pub dist_to_core: Option<[f64; 2]>,
    pub target_fire_core_count: Option<u32>,
    pub target_lift_core_count: Option<u32>,
    pub target_stair_core_count: Option<u32>,
    pub skip_cores: Option<bool>,
    pub max_corridor_dists: Option<MaxCorridorDists>,
    pub end_closing_distances: Option<[f64; 2]>,
    pub end_entrance_distances: Option<[f64; 2]>,
    pub lock_ends: Option<[bool; 2]>,
    pub weights: Option<AggRulesWeights>,
    pub is_double_loaded: Option<bool>,
}

impl RulesProps {
    /// Properties with every optional field left to its default.
    #[must_use]
    pub fn new(target_length: f64) -> Self {
        Self {
            target_length,
            ..Self::default()
        }
    }

    /// Parse properties from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RulesConfigError::Parse`] when the bytes are not a valid
    /// properties document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, RulesConfigError> {
        serde_json::from_slice(bytes).map_err(|e| RulesConfigError::Parse {
            detail: e.to_string(),
        })
    }
}

/// Distances measured from one end of the muscle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndDistances {
    /// Corridor stretch a neighbouring muscle already covers at this end.
    pub closing: f64,
    /// Distance to the nearest entrance beyond this end.
    pub entrance: f64,
}

/// Fully resolved rules configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RulesData {
    pub target_length: f64,
    /// Reconciled mix: one bucket per dataset category, in dataset order.
    pub target_unit_mix: Vec<UnitCategoryMix>,
    /// The mix as requested, before reconciliation. Apartments it does not
    /// name get no rollout weight.
    pub requested_unit_mix: Vec<UnitCategoryMix>,
    pub can_close_ends: [bool; 2],
    pub target_entrance_count: u32,
    pub has_entry_at_start: bool,
    pub has_corner_at: [bool; 2],
    pub dist_to_core: [f64; 2],
    pub target_fire_core_count: u32,
    pub target_lift_core_count: u32,
    pub target_stair_core_count: u32,
    pub skip_cores: bool,
    pub max_corridor_dists: MaxCorridorDists,
    pub end_closing_distances: [f64; 2],
    pub end_entrance_distances: [f64; 2],
    pub lock_ends: [bool; 2],
    pub weights: AggRulesWeights,
    pub is_double_loaded: bool,

    pub gap: f64,
    pub corridor_width: f64,
    pub max_travel_dist_bidirectional: f64,
    /// `gap` plus the shortest apartment.
    pub smallest_apartment_size: f64,
    /// `gap` plus the shortest apartment allowed next to an entrance;
    /// infinite when there is none.
    pub smallest_next_to_entrance_size: f64,
    /// `gap` plus the longest of the apartments and the lift core.
    pub largest_unit_size: f64,
    /// Smallest door-to-right-edge distance over the apartment actions.
    /// Filled in once the catalogue is built.
    pub min_door_position_from_end: f64,
    /// Names allowed directly after an entrance.
    pub next_to_entrance_names: BTreeSet<String>,
    /// Category an entrance is counted under in the unit mix.
    pub above_entrance_category: Option<String>,
}

impl RulesData {
    /// Resolve `props` against `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesConfigError`] if the dataset is malformed or a
    /// property is out of range.
    pub fn resolve(dataset: &Dataset, props: &RulesProps) -> Result<Self, RulesConfigError> {
        dataset.validate()?;
        if !props.target_length.is_finite() || props.target_length <= 0.0 {
            return Err(RulesConfigError::InvalidTargetLength {
                value: props.target_length,
            });
        }

        let cfg = &dataset.agg_config;
        let dataset_mix = dataset.default_mix();
        let requested_unit_mix = requested_mix(&dataset_mix, props.target_unit_mix.as_deref());
        let target_unit_mix = match &props.target_unit_mix {
            Some(requested) => reconcile_mix(&dataset_mix, Some(requested)),
            None => dataset_mix,
        };
        if let Some(bad) = requested_unit_mix
            .iter()
            .chain(&target_unit_mix)
            .find(|m| !m.ratio.is_finite() || m.ratio < 0.0)
        {
            return Err(RulesConfigError::InvalidProperty {
                field: "target_unit_mix",
                detail: format!("ratio for {:?} is {}", bad.label, bad.ratio),
            });
        }

        let max_corridor_dists = props.max_corridor_dists.unwrap_or(MaxCorridorDists {
            start: cfg.max_travel_dist_sprinklered,
            middle: 2.0 * cfg.max_travel_dist_bidirectional,
            end: cfg.max_travel_dist_sprinklered,
        });
        let dist_to_core = props.dist_to_core.unwrap_or([0.0, 0.0]);
        let end_closing_distances = props.end_closing_distances.unwrap_or([0.0, 0.0]);
        let end_entrance_distances = props
            .end_entrance_distances
            .unwrap_or([f64::INFINITY, f64::INFINITY]);
        check_non_negative("dist_to_core", &dist_to_core)?;
        check_non_negative("end_closing_distances", &end_closing_distances)?;
        check_non_negative(
            "max_corridor_dists",
            &[
                max_corridor_dists.start,
                max_corridor_dists.middle,
                max_corridor_dists.end,
            ],
        )?;
        if end_entrance_distances.iter().any(|d| d.is_nan() || *d < 0.0) {
            return Err(RulesConfigError::InvalidProperty {
                field: "end_entrance_distances",
                detail: format!("{end_entrance_distances:?}"),
            });
        }

        let weights = props.weights.unwrap_or_default();
        if let Some((field, value)) = weights.first_non_finite() {
            return Err(RulesConfigError::InvalidProperty {
                field,
                detail: format!("weight is {value}"),
            });
        }

        let apartment_lengths = || dataset.apartments.iter().map(|u| u.length);
        let smallest_apartment_size =
            cfg.gap + apartment_lengths().fold(f64::INFINITY, f64::min);
        let largest_unit_size = cfg.gap
            + apartment_lengths()
                .chain(std::iter::once(cfg.core_with_lifts.length))
                .fold(0.0, f64::max);
        let smallest_next_to_entrance_size = cfg.gap
            + dataset
                .next_to_entrance()
                .map(|u| u.length)
                .fold(f64::INFINITY, f64::min);

        let data = Self {
            target_length: props.target_length,
            target_unit_mix,
            requested_unit_mix,
            can_close_ends: props.can_close_ends.unwrap_or([true, true]),
            target_entrance_count: props.target_entrance_count.unwrap_or(0),
            has_entry_at_start: props.has_entry_at_start.unwrap_or(false),
            has_corner_at: props.has_corner_at.unwrap_or([false, false]),
            dist_to_core,
            target_fire_core_count: props.target_fire_core_count.unwrap_or(0),
            target_lift_core_count: props.target_lift_core_count.unwrap_or(0),
            target_stair_core_count: props.target_stair_core_count.unwrap_or(0),
            skip_cores: props.skip_cores.unwrap_or(true),
            max_corridor_dists,
            end_closing_distances,
            end_entrance_distances,
            lock_ends: props.lock_ends.unwrap_or([true, false]),
            weights,
            is_double_loaded: props.is_double_loaded.unwrap_or(true),
            gap: cfg.gap,
            corridor_width: cfg.corridor_width,
            max_travel_dist_bidirectional: cfg.max_travel_dist_bidirectional,
            smallest_apartment_size,
            smallest_next_to_entrance_size,
            largest_unit_size,
            min_door_position_from_end: 0.0,
            next_to_entrance_names: dataset.next_to_entrance().map(|u| u.name.clone()).collect(),
            above_entrance_category: dataset
                .above_entrance()
                .next()
                .and_then(Unit::apartment_data)
                .map(|a| a.category.clone()),
        };
        debug!(
            dataset = %dataset.name,
            target_length = data.target_length,
            skip_cores = data.skip_cores,
            categories = data.target_unit_mix.len(),
            "resolved rules data"
        );
        Ok(data)
    }

    /// Distances at the start (`0`) or end (`1`) of the muscle.
    #[must_use]
    pub fn end_distances(&self, end: usize) -> EndDistances {
        EndDistances {
            closing: self.end_closing_distances[end],
            entrance: self.end_entrance_distances[end],
        }
    }

    /// True when a closing apartment may terminate the corridor at `end`:
    /// closing is allowed there and no neighbour already covers it.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn can_close_at(&self, end: usize) -> bool {
        self.can_close_ends[end] && self.end_closing_distances[end] == 0.0
    }
}

fn check_non_negative(field: &'static str, values: &[f64]) -> Result<(), RulesConfigError> {
    if values.iter().all(|v| v.is_finite() && *v >= 0.0) {
        Ok(())
    } else {
        Err(RulesConfigError::InvalidProperty {
            field,
            detail: format!("expected finite non-negative values, got {values:?}"),
        })
    }
}
