//! Dataset: the catalogue of unit templates plus the building parameters
//! that every aggregation session on that dataset shares.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::mix::UnitCategoryMix;
use crate::unit::Unit;

/// Footprint of a core template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoreTemplate {
    pub length: f64,
    pub depth: f64,
}

/// Building parameters shared by every muscle of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggConfig {
    /// Axis gap inserted between two adjacent units.
    pub gap: f64,
    pub corridor_width: f64,
    /// Max travel distance between two cores, measured one way.
    pub max_travel_dist_bidirectional: f64,
    /// Max dead-end travel distance in a sprinklered building.
    pub max_travel_dist_sprinklered: f64,
    pub core_with_stairs: CoreTemplate,
    pub core_with_lifts: CoreTemplate,
    pub core_with_ff_lifts: CoreTemplate,
}

/// Unit templates and shared parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub name: String,
    pub agg_config: AggConfig,
    /// Every apartment template, in catalogue order.
    pub apartments: Vec<Unit>,
    /// Explicit default mix. When absent every category gets an equal share.
    #[serde(default)]
    pub default_mix: Option<Vec<UnitCategoryMix>>,
}

impl Dataset {
    /// Check the invariants the aggregation engine relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] found.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.apartments.is_empty() {
            return Err(DatasetError::NoApartments);
        }
        let mut names = BTreeSet::new();
        for unit in &self.apartments {
            if !unit.is_apartment() {
                return Err(DatasetError::NotAnApartment {
                    name: unit.name.clone(),
                });
            }
            if !names.insert(unit.name.as_str()) {
                return Err(DatasetError::DuplicateName {
                    name: unit.name.clone(),
                });
            }
            check_length(&unit.name, unit.length)?;
        }

        let cfg = &self.agg_config;
        check_length("core_with_stairs", cfg.core_with_stairs.length)?;
        check_length("core_with_lifts", cfg.core_with_lifts.length)?;
        check_length("core_with_ff_lifts", cfg.core_with_ff_lifts.length)?;
        if !cfg.gap.is_finite() || cfg.gap < 0.0 {
            return Err(DatasetError::InvalidParameter {
                field: "gap",
                value: cfg.gap,
            });
        }
        if !cfg.max_travel_dist_bidirectional.is_finite() || cfg.max_travel_dist_bidirectional <= 0.0 {
            return Err(DatasetError::InvalidParameter {
                field: "max_travel_dist_bidirectional",
                value: cfg.max_travel_dist_bidirectional,
            });
        }
        if !cfg.max_travel_dist_sprinklered.is_finite() || cfg.max_travel_dist_sprinklered <= 0.0 {
            return Err(DatasetError::InvalidParameter {
                field: "max_travel_dist_sprinklered",
                value: cfg.max_travel_dist_sprinklered,
            });
        }
        Ok(())
    }

    /// Apartments allowed directly after a building entrance.
    pub fn next_to_entrance(&self) -> impl Iterator<Item = &Unit> {
        self.apartments
            .iter()
            .filter(|u| u.apartment_data().is_some_and(|a| a.next_to_entrance))
    }

    /// Apartments allowed above a building entrance.
    pub fn above_entrance(&self) -> impl Iterator<Item = &Unit> {
        self.apartments
            .iter()
            .filter(|u| u.apartment_data().is_some_and(|a| a.above_entrance))
    }

    /// Category labels in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.apartments
            .iter()
            .filter_map(Unit::apartment_data)
            .filter(|a| seen.insert(a.category.clone()))
            .map(|a| a.category.clone())
            .collect()
    }

    /// The dataset's default unit mix, one bucket per category.
    ///
    /// An explicit `default_mix` wins for the ratios it names; categories it
    /// misses get 0. Without one, ratios are shared equally. Apartment names
    /// are always derived from the templates.
    #[must_use]
    pub fn default_mix(&self) -> Vec<UnitCategoryMix> {
        let categories = self.categories();
        #[allow(clippy::cast_precision_loss)]
        let equal_share = 1.0 / categories.len().max(1) as f64;
        categories
            .into_iter()
            .map(|label| {
                let apartment_names = self
                    .apartments
                    .iter()
                    .filter(|u| u.apartment_data().is_some_and(|a| a.category == label))
                    .map(|u| u.name.clone())
                    .collect();
                let ratio = match &self.default_mix {
                    Some(explicit) => explicit
                        .iter()
                        .find(|m| m.label == label)
                        .map_or(0.0, |m| m.ratio),
                    None => equal_share,
                };
                UnitCategoryMix {
                    label,
                    ratio,
                    apartment_names,
                }
            })
            .collect()
    }
}

fn check_length(name: &str, length: f64) -> Result<(), DatasetError> {
    if length.is_finite() && length > 0.0 {
        Ok(())
    } else {
        Err(DatasetError::InvalidLength {
            name: name.to_string(),
            length,
        })
    }
}
