//! Aggregation state: the units placed so far and the counters derived
//! from them.

use std::sync::Arc;

use muscle_kernel::unit::UnitKind;
use muscle_search::contract::SearchState;

use crate::action::{ActionRef, AggAction};
use crate::clash::is_clear_at_start;
use crate::rules_data::RulesData;

/// A partial or complete placement along one muscle.
///
/// `corridor_lengths` always holds one segment more than there are cores
/// in `sequence`. Clones share actions and rules data but nothing mutable.
#[derive(Debug, Clone)]
pub struct AggState {
    sequence: Vec<ActionRef>,
    total_length: f64,
    corridor_lengths: Vec<f64>,
    required_shift: f64,
    entrance_count: u32,
    fire_core_count: u32,
    lift_core_count: u32,
    stair_core_count: u32,
    data: Arc<RulesData>,
}

impl AggState {
    #[must_use]
    pub fn new(data: Arc<RulesData>) -> Self {
        Self {
            sequence: Vec::new(),
            total_length: 0.0,
            corridor_lengths: vec![0.0],
            required_shift: 0.0,
            entrance_count: 0,
            fire_core_count: 0,
            lift_core_count: 0,
            stair_core_count: 0,
            data,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &[ActionRef] {
        &self.sequence
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    #[must_use]
    pub fn first_action(&self) -> Option<&AggAction> {
        self.sequence.first().map(Arc::as_ref)
    }

    #[must_use]
    pub fn last_action(&self) -> Option<&AggAction> {
        self.sequence.last().map(Arc::as_ref)
    }

    /// Sum of unit lengths plus one gap between each adjacent pair.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    #[must_use]
    pub fn corridor_lengths(&self) -> &[f64] {
        &self.corridor_lengths
    }

    /// Offset forced on the first unit to clear a neighbour's corridor.
    #[must_use]
    pub fn required_shift(&self) -> f64 {
        self.required_shift
    }

    #[must_use]
    pub fn entrance_count(&self) -> u32 {
        self.entrance_count
    }

    #[must_use]
    pub fn fire_core_count(&self) -> u32 {
        self.fire_core_count
    }

    #[must_use]
    pub fn lift_core_count(&self) -> u32 {
        self.lift_core_count
    }

    #[must_use]
    pub fn stair_core_count(&self) -> u32 {
        self.stair_core_count
    }

    /// Cores of any kind placed so far.
    #[must_use]
    pub fn core_count(&self) -> usize {
        self.sequence.iter().filter(|a| a.unit.is_core()).count()
    }

    #[must_use]
    pub fn data(&self) -> &RulesData {
        &self.data
    }

    fn update_corridor(&mut self, action: &AggAction) {
        if action.unit.is_core() {
            self.corridor_lengths.push(0.0);
            return;
        }
        let data = &*self.data;
        let length = action.length();
        let first = self.sequence.len() == 1;
        let last = self.corridor_lengths.len() - 1;
        if first && !data.has_corner_at[0] {
            // The corridor starts at the first door, or earlier when the
            // start entrance is close enough to need reaching.
            let reach = self.required_shift + length - data.end_entrance_distances[0];
            self.corridor_lengths[0] += action.door_distance_from_right().max(reach);
        } else if first {
            self.corridor_lengths[last] += length + data.dist_to_core[0];
        } else {
            self.corridor_lengths[last] += length;
        }
    }
}

impl SearchState for AggState {
    type Action = ActionRef;
    type Final = RulesData;

    fn update(&mut self, action: &ActionRef) {
        let first = self.sequence.is_empty();
        self.sequence.push(Arc::clone(action));

        if first {
            self.total_length = action.length();
            if !self.data.lock_ends[0] {
                let start = self.data.end_distances(0);
                if !is_clear_at_start(action, start, 0.0, false) {
                    self.required_shift = start.closing - action.door_distance_from_left();
                }
            }
        } else {
            self.total_length += self.data.gap + action.length();
        }

        self.update_corridor(action);

        match &action.unit.kind {
            UnitKind::Entrance => self.entrance_count += 1,
            UnitKind::Core(core) => {
                if core.has_fire_lift {
                    self.fire_core_count += 1;
                }
                if core.has_non_fire_lift {
                    self.lift_core_count += 1;
                }
                if core.is_stair_only() {
                    self.stair_core_count += 1;
                }
            }
            UnitKind::Apartment(_) => {}
        }
    }

    /// Trim the outer corridor segments once the final position of the
    /// sequence within the muscle is known.
    fn final_update(&mut self, data: &RulesData) {
        let (Some(first), Some(last)) = (self.sequence.first(), self.sequence.last()) else {
            return;
        };
        let shift = data.target_length - self.total_length;
        let shifted_right = !data.lock_ends[0] && data.lock_ends[1];

        if shifted_right
            && first.door_distance_from_right()
                < first.length() - data.end_entrance_distances[0] + shift
        {
            self.corridor_lengths[0] += shift - self.required_shift;
        }

        if !data.has_corner_at[1] {
            let start_of_door = last.door_distance_from_right() + last.door_width;
            let opposite = if shifted_right {
                data.end_entrance_distances[1]
            } else {
                data.end_entrance_distances[1] - (shift - self.required_shift)
            };
            let end = self.corridor_lengths.len() - 1;
            self.corridor_lengths[end] -= start_of_door.min(opposite);
        }
    }
}
