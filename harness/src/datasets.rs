//! Built-in reference dataset.
//!
//! A small residential catalogue: three categories, one next-to-entrance
//! and one above-entrance apartment, and a closing variant for each end.

use muscle_kernel::dataset::{AggConfig, CoreTemplate, Dataset};
use muscle_kernel::unit::{ApartmentData, CloseDirection, Unit};

const MODULE_DEPTH: f64 = 8.0;
const NIA_RATIO: f64 = 0.9;
const CLOSE_LENGTH: f64 = 1.6;

struct Template {
    name: &'static str,
    category: &'static str,
    length: f64,
    door_position: f64,
    close_direction: Option<CloseDirection>,
    next_to_entrance: bool,
    above_entrance: bool,
}

const TEMPLATES: [Template; 6] = [
    Template {
        name: "1B2P",
        category: "1B2P",
        length: 5.0,
        door_position: 1.2,
        close_direction: None,
        next_to_entrance: false,
        above_entrance: false,
    },
    Template {
        name: "1B2P-wide",
        category: "1B2P",
        length: 5.6,
        door_position: 1.4,
        close_direction: None,
        next_to_entrance: true,
        above_entrance: false,
    },
    Template {
        name: "2B4P",
        category: "2B4P",
        length: 7.2,
        door_position: 1.6,
        close_direction: None,
        next_to_entrance: false,
        above_entrance: false,
    },
    Template {
        name: "2B4P-close-end",
        category: "2B4P",
        length: 7.5,
        door_position: 1.6,
        close_direction: Some(CloseDirection::End),
        next_to_entrance: false,
        above_entrance: false,
    },
    Template {
        name: "3B5P",
        category: "3B5P",
        length: 9.1,
        door_position: 2.0,
        close_direction: None,
        next_to_entrance: false,
        above_entrance: true,
    },
    Template {
        name: "3B5P-close-start",
        category: "3B5P",
        length: 9.4,
        door_position: 2.0,
        close_direction: Some(CloseDirection::Start),
        next_to_entrance: false,
        above_entrance: false,
    },
];

/// The reference dataset used by tests, benches, and the default runner.
#[must_use]
pub fn reference_dataset() -> Dataset {
    let apartments = TEMPLATES
        .iter()
        .map(|t| {
            let module_area = t.length * MODULE_DEPTH;
            let closing = t.close_direction.is_some();
            Unit::apartment(
                t.name,
                t.length,
                MODULE_DEPTH,
                ApartmentData {
                    category: t.category.into(),
                    nia: module_area * NIA_RATIO,
                    close_direction: t.close_direction,
                    close_corridor: closing,
                    close_length: closing.then_some(CLOSE_LENGTH),
                    next_to_entrance: t.next_to_entrance,
                    above_entrance: t.above_entrance,
                    door_position: t.door_position,
                    door_width: 1.0,
                    module_area,
                },
            )
        })
        .collect();

    Dataset {
        name: "reference".into(),
        agg_config: AggConfig {
            gap: 0.2,
            corridor_width: 1.6,
            max_travel_dist_bidirectional: 15.0,
            max_travel_dist_sprinklered: 15.0,
            core_with_stairs: CoreTemplate {
                length: 5.0,
                depth: MODULE_DEPTH,
            },
            core_with_lifts: CoreTemplate {
                length: 6.0,
                depth: MODULE_DEPTH,
            },
            core_with_ff_lifts: CoreTemplate {
                length: 6.5,
                depth: MODULE_DEPTH,
            },
        },
        apartments,
        default_mix: None,
    }
}
