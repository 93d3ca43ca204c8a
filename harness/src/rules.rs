//! Aggregation rules: which unit may come next, how rollouts choose among
//! them, and what a finished sequence costs.

use std::sync::Arc;

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;
use tracing::{debug, trace};

use muscle_kernel::dataset::Dataset;
use muscle_kernel::unit::CloseDirection;
use muscle_search::contract::{SearchRules, SearchState};

use crate::action::{ActionRef, AggAction};
use crate::catalogue::{build_actions, min_door_position_from_end};
use crate::clash::{is_clear_at_end, is_clear_at_start};
use crate::cost::CostBreakdown;
use crate::error::{CostError, RulesConfigError};
use crate::rules_data::{RulesData, RulesProps};
use crate::state::AggState;

/// Which stretch of corridor the next unit extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorridorType {
    /// Before the first core.
    Start,
    /// Between two cores.
    Middle,
    /// The remaining length can be finished without another core.
    End,
}

/// Rules for placing units along one muscle.
#[derive(Debug, Clone)]
pub struct AggRules {
    data: Arc<RulesData>,
    actions: Vec<ActionRef>,
    next_to_entrance: Vec<ActionRef>,
    above_entrance: Vec<ActionRef>,
}

impl AggRules {
    /// Resolve `props` against `dataset` and build the action catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`RulesConfigError`] if the dataset or a property is invalid.
    pub fn new(dataset: &Dataset, props: &RulesProps) -> Result<Self, RulesConfigError> {
        let mut data = RulesData::resolve(dataset, props)?;
        let actions = build_actions(&data, dataset);
        data.min_door_position_from_end = min_door_position_from_end(&actions);

        let flagged = |pick: fn(&AggAction) -> bool| -> Vec<ActionRef> {
            actions.iter().filter(|a| pick(a)).cloned().collect()
        };
        let next_to_entrance =
            flagged(|a| a.unit.apartment_data().is_some_and(|d| d.next_to_entrance));
        let above_entrance =
            flagged(|a| a.unit.apartment_data().is_some_and(|d| d.above_entrance));

        debug!(
            actions = actions.len(),
            min_door_position_from_end = data.min_door_position_from_end,
            "built aggregation rules"
        );
        Ok(Self {
            data: Arc::new(data),
            actions,
            next_to_entrance,
            above_entrance,
        })
    }

    #[must_use]
    pub fn data(&self) -> &RulesData {
        &self.data
    }

    /// Shared handle to the resolved data, for building states directly.
    #[must_use]
    pub fn data_arc(&self) -> Arc<RulesData> {
        Arc::clone(&self.data)
    }

    /// Every action in catalogue order, valid or not.
    #[must_use]
    pub fn actions(&self) -> &[ActionRef] {
        &self.actions
    }

    /// Whether `action` may be appended to `state`.
    #[must_use]
    pub fn is_action_valid(&self, state: &AggState, action: &ActionRef) -> bool {
        self.check_action(state, action, false)
    }

    /// Per-term cost of a terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`CostError`] if the unit mix cannot be evaluated.
    pub fn cost_breakdown(&self, state: &AggState) -> Result<CostBreakdown, CostError> {
        CostBreakdown::evaluate(state, &self.data)
    }

    /// Classify the segment the next unit would extend, and its limit.
    #[must_use]
    pub fn corridor_type(&self, corridor_lengths: &[f64], remaining: f64) -> (CorridorType, f64) {
        let data = &*self.data;
        let limits = &data.max_corridor_dists;
        let allowable_end = limits.end - data.dist_to_core[1];
        let current = corridor_lengths.last().copied().unwrap_or(0.0);
        if remaining + current <= allowable_end + data.min_door_position_from_end {
            (CorridorType::End, allowable_end)
        } else if corridor_lengths.len() <= 1 {
            (CorridorType::Start, limits.start)
        } else {
            (CorridorType::Middle, limits.middle)
        }
    }

    fn check_action(
        &self,
        state: &AggState,
        action: &ActionRef,
        ignore_entrance_check: bool,
    ) -> bool {
        let data = &*self.data;
        if !self.is_valid_for_entrance(state, action, ignore_entrance_check) {
            return false;
        }

        let unit_length = data.gap + action.length();
        let placed = state.total_length() + state.required_shift();
        let definitely_last =
            placed + unit_length > data.target_length - data.smallest_apartment_size;

        if placed + unit_length > data.target_length {
            return false;
        }

        if state.is_empty() {
            let skip_existing_closing = !data.lock_ends[0];
            if !is_clear_at_start(action, data.end_distances(0), 0.0, skip_existing_closing) {
                trace!(unit = action.name(), "start clash");
                return false;
            }
        }

        if definitely_last {
            let shift = if data.lock_ends[1] {
                0.0
            } else {
                data.target_length - (state.total_length() + unit_length)
            };
            if !is_clear_at_end(action, data.end_distances(1), shift) {
                trace!(unit = action.name(), "end clash");
                return false;
            }
        }

        match action.unit.close_direction() {
            Some(CloseDirection::Start) if !state.is_empty() || !data.can_close_at(0) => {
                return false;
            }
            Some(CloseDirection::End) if !data.can_close_at(1) || !definitely_last => {
                return false;
            }
            _ => {}
        }

        if state.last_action().is_some_and(|prev| {
            prev.unit.closes_corridor() && prev.unit.close_direction() == Some(CloseDirection::End)
        }) {
            return false;
        }

        if data.skip_cores && action.unit.is_core() {
            return false;
        }

        if let Some(core) = action.unit.core_data() {
            if core.has_fire_lift && state.fire_core_count() + 1 > data.target_fire_core_count {
                return false;
            }
            if core.has_non_fire_lift && state.lift_core_count() + 1 > data.target_lift_core_count {
                return false;
            }
        }

        self.is_valid_for_corridor(state, action, placed, unit_length)
    }

    fn is_valid_for_entrance(
        &self,
        state: &AggState,
        action: &ActionRef,
        ignore_entrance_check: bool,
    ) -> bool {
        let data = &*self.data;

        if action.unit.is_entrance() {
            if state.entrance_count() + 1 > data.target_entrance_count {
                return false;
            }
            let mut with_entrance = state.clone();
            with_entrance.update(action);
            if with_entrance.total_length()
                + with_entrance.required_shift()
                + data.smallest_next_to_entrance_size
                > data.target_length
            {
                return false;
            }
            if !self
                .next_to_entrance
                .iter()
                .any(|next| self.check_action(&with_entrance, next, false))
            {
                return false;
            }
            if !self
                .above_entrance
                .iter()
                .any(|above| self.check_action(state, above, true))
            {
                return false;
            }
        }

        if state.is_empty()
            && data.has_entry_at_start
            && !ignore_entrance_check
            && !action.unit.is_entrance()
        {
            return false;
        }

        let after_entrance = state.last_action().is_some_and(|prev| prev.unit.is_entrance());
        if after_entrance && !data.next_to_entrance_names.contains(action.name()) {
            return false;
        }

        after_entrance || action.rollout_weight > 0.0
    }

    fn is_valid_for_corridor(
        &self,
        state: &AggState,
        action: &AggAction,
        placed: f64,
        unit_length: f64,
    ) -> bool {
        let data = &*self.data;
        if data.skip_cores {
            return true;
        }
        let corridor = state.corridor_lengths();
        let current = corridor.last().copied().unwrap_or(0.0);
        let (kind, max_distance) = self.corridor_type(corridor, data.target_length - placed);

        if action.unit.is_core() {
            return !state.last_action().is_some_and(|prev| prev.unit.is_core());
        }
        if state.is_empty() && kind == CorridorType::Start && !data.has_corner_at[0] {
            let reach = action
                .door_distance_from_right()
                .max(unit_length - data.end_entrance_distances[0]);
            return reach <= max_distance;
        }
        if kind == CorridorType::End && !data.has_corner_at[1] {
            return current + action.door_position <= max_distance;
        }
        current + unit_length <= max_distance
    }
}

impl SearchRules for AggRules {
    type Action = ActionRef;
    type State = AggState;
    type Error = CostError;

    fn initial_state(&self) -> AggState {
        AggState::new(Arc::clone(&self.data))
    }

    fn valid_actions(&self, state: &AggState) -> Vec<ActionRef> {
        self.actions
            .iter()
            .filter(|a| self.check_action(state, a, false))
            .cloned()
            .collect()
    }

    fn cost(&self, state: &AggState) -> Result<f64, CostError> {
        Ok(self.cost_breakdown(state)?.total())
    }

    /// Draw proportionally to rollout weight, uniformly when every weight
    /// is zero. A single candidate is returned without touching the RNG.
    fn pick_action_with_policy<G: Rng + ?Sized>(
        &self,
        valid: &[ActionRef],
        rng: &mut G,
    ) -> ActionRef {
        if let [only] = valid {
            return Arc::clone(only);
        }
        let index = match WeightedIndex::new(valid.iter().map(|a| a.rollout_weight)) {
            Ok(weighted) => weighted.sample(rng),
            Err(_) => rng.random_range(0..valid.len()),
        };
        Arc::clone(&valid[index])
    }

    fn final_action(&self, state: &mut AggState) {
        state.final_update(&self.data);
    }
}
