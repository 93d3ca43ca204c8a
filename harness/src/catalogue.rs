//! Action catalogue: which units a session may place, and how likely a
//! rollout is to draw each one.

use std::sync::Arc;

use muscle_kernel::dataset::Dataset;
use muscle_kernel::mix::category_for;
use muscle_kernel::unit::{CoreData, Unit, UnitKind, DEFAULT_DOOR_WIDTH};

use crate::action::{ActionRef, AggAction};
use crate::rules_data::RulesData;

pub const ENTRANCE_NAME: &str = "entrance";
pub const STAIR_CORE_NAME: &str = "core-stairs";
pub const FIRE_CORE_NAME: &str = "core-ff-lifts";
pub const LIFT_CORE_NAME: &str = "core-lifts";

/// Closing apartments are boosted so rollouts reach for them whenever they
/// are valid.
const CLOSING_WEIGHT_FACTOR: f64 = 100.0;

/// Build the session's actions in catalogue order: every apartment, then the
/// entrance (when the dataset has both above- and next-to-entrance
/// apartments), then the stair, fire-fighting, and lift cores.
#[must_use]
pub fn build_actions(data: &RulesData, dataset: &Dataset) -> Vec<ActionRef> {
    let units = extract_units(dataset);
    let typical_core = core_share(dataset.agg_config.core_with_stairs.length, data);
    let entrance_share = entrance_share(data, dataset);
    let apartment_factor = 1.0 - typical_core - entrance_share;

    units
        .into_iter()
        .map(|unit| {
            let rollout_weight = match &unit.kind {
                UnitKind::Apartment(_) => apartment_weight(&unit, data, apartment_factor),
                UnitKind::Core(_) => core_share(unit.length, data),
                UnitKind::Entrance => entrance_share,
            };
            Arc::new(AggAction {
                rollout_weight,
                door_position: door_position(&unit),
                door_width: door_width(&unit),
                gia: gross_area(&unit, data),
                unit: Arc::new(unit),
            })
        })
        .collect()
}

/// Smallest door-to-right-edge distance over the apartment actions.
#[must_use]
pub fn min_door_position_from_end(actions: &[ActionRef]) -> f64 {
    actions
        .iter()
        .filter(|a| a.unit.is_apartment())
        .map(|a| a.door_distance_from_right())
        .fold(f64::INFINITY, f64::min)
}

fn extract_units(dataset: &Dataset) -> Vec<Unit> {
    let cfg = &dataset.agg_config;
    let mut units = dataset.apartments.clone();

    if let (Some(above), Some(next)) = (
        dataset.above_entrance().next(),
        dataset.next_to_entrance().next(),
    ) {
        let length = above.length - next.length - cfg.gap;
        if length > 0.0 {
            units.push(Unit::entrance(ENTRANCE_NAME, length, above.depth));
        }
    }

    let cores = [
        (STAIR_CORE_NAME, cfg.core_with_stairs, CoreData::default()),
        (
            FIRE_CORE_NAME,
            cfg.core_with_ff_lifts,
            CoreData {
                has_fire_lift: true,
                has_non_fire_lift: false,
            },
        ),
        (
            LIFT_CORE_NAME,
            cfg.core_with_lifts,
            CoreData {
                has_fire_lift: false,
                has_non_fire_lift: true,
            },
        ),
    ];
    units.extend(
        cores
            .into_iter()
            .map(|(name, template, core)| Unit::core(name, template.length, template.depth, core)),
    );
    units
}

/// Share of the muscle a core of `length` typically serves.
fn core_share(length: f64, data: &RulesData) -> f64 {
    length / (2.0 * data.max_travel_dist_bidirectional)
}

fn entrance_share(data: &RulesData, dataset: &Dataset) -> f64 {
    dataset.above_entrance().next().map_or(0.0, |above| {
        f64::from(data.target_entrance_count) * above.length / data.target_length
    })
}

/// Apartments named by no requested bucket weigh 0 and never get placed.
#[allow(clippy::cast_precision_loss)]
fn apartment_weight(unit: &Unit, data: &RulesData, apartment_factor: f64) -> f64 {
    let Some(bucket) = category_for(&data.requested_unit_mix, unit) else {
        return 0.0;
    };
    let factor = if unit.closes_corridor() {
        CLOSING_WEIGHT_FACTOR * apartment_factor
    } else {
        apartment_factor
    };
    let share = bucket.ratio / bucket.apartment_names.len() as f64;
    share.max(1e-4) * factor
}

fn door_position(unit: &Unit) -> f64 {
    unit.apartment_data()
        .map_or(unit.length / 2.0, |a| a.door_position)
}

fn door_width(unit: &Unit) -> f64 {
    unit.apartment_data()
        .map_or(DEFAULT_DOOR_WIDTH, |a| a.door_width)
}

/// Gross area: the unit's corridor share plus its own footprint.
fn gross_area(unit: &Unit, data: &RulesData) -> f64 {
    let corridor_width = if data.is_double_loaded {
        data.corridor_width
    } else {
        data.corridor_width / 2.0
    };
    let corridor = unit.length * corridor_width;
    match &unit.kind {
        UnitKind::Apartment(apartment) => {
            let swallowed = if apartment.close_corridor {
                apartment.close_length.unwrap_or(0.0) * corridor_width
            } else {
                0.0
            };
            corridor + apartment.module_area - swallowed
        }
        UnitKind::Core(_) => corridor + unit.length * unit.depth,
        UnitKind::Entrance => corridor,
    }
}
