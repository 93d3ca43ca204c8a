//! Unit-mix categories.

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// One unit-mix bucket: the share of apartments that should fall into
/// `label`, and the apartment templates that count towards it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCategoryMix {
    pub label: String,
    pub ratio: f64,
    #[serde(default)]
    pub apartment_names: Vec<String>,
}

/// Find the bucket that lists an apartment by name.
///
/// Returns `None` for cores, entrances, and apartments no bucket names.
#[must_use]
pub fn category_for<'a>(mix: &'a [UnitCategoryMix], unit: &Unit) -> Option<&'a UnitCategoryMix> {
    unit.apartment_data()?;
    mix.iter()
        .find(|m| m.apartment_names.iter().any(|n| *n == unit.name))
}

/// The mix a caller asked for, with empty name lists filled in.
///
/// Without a request this is `dataset_mix` itself. Otherwise every
/// requested bucket is kept as given, except that a bucket with no
/// `apartment_names` takes the names of the dataset category with the same
/// label. Apartments named by no bucket are not part of the request.
#[must_use]
pub fn requested_mix(
    dataset_mix: &[UnitCategoryMix],
    requested: Option<&[UnitCategoryMix]>,
) -> Vec<UnitCategoryMix> {
    let Some(requested) = requested else {
        return dataset_mix.to_vec();
    };
    requested
        .iter()
        .map(|bucket| {
            let mut bucket = bucket.clone();
            if bucket.apartment_names.is_empty() {
                if let Some(category) = dataset_mix.iter().find(|c| c.label == bucket.label) {
                    bucket.apartment_names.clone_from(&category.apartment_names);
                }
            }
            bucket
        })
        .collect()
}

/// Align a requested mix with the dataset's categories.
///
/// The result lists every category of `dataset_mix`, in dataset order, with
/// the ratio taken from `requested` when a bucket with the same label is
/// present and `0.0` otherwise. Requested labels the dataset does not know
/// are dropped.
#[must_use]
pub fn reconcile_mix(
    dataset_mix: &[UnitCategoryMix],
    requested: Option<&[UnitCategoryMix]>,
) -> Vec<UnitCategoryMix> {
    dataset_mix
        .iter()
        .map(|category| {
            let ratio = requested
                .and_then(|req| req.iter().find(|r| r.label == category.label))
                .map_or(0.0, |r| r.ratio);
            UnitCategoryMix {
                label: category.label.clone(),
                ratio,
                apartment_names: category.apartment_names.clone(),
            }
        })
        .collect()
}

/// Normalise raw counts into ratios. All-zero counts yield all-zero ratios.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ratios(counts: &[usize]) -> Vec<f64> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    let total = total as f64;
    counts.iter().map(|&c| c as f64 / total).collect()
}
