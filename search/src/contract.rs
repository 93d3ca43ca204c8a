//! Rules and state contracts for nested search.

use rand::Rng;

/// A search state: an append-only record of the actions applied so far.
///
/// # Contract
///
/// - `clone` must produce a fully independent value. Updating a clone is
///   never observable on the original.
/// - `update` mutates in place and keeps every derived counter consistent
///   with the applied actions.
/// - `final_update` is applied once per terminal state, after the last
///   action and before costing.
pub trait SearchState: Clone {
    /// The action type this state accepts.
    type Action;
    /// Data needed for the end-of-sequence correction.
    type Final: ?Sized;

    /// Apply one action.
    fn update(&mut self, action: &Self::Action);

    /// Apply corrections only knowable once the sequence is complete.
    fn final_update(&mut self, _data: &Self::Final) {}
}

/// Rules driving a nested search: action enumeration, policy, and cost.
///
/// The search engine sees a problem only through this trait.
///
/// # Contract
///
/// - `valid_actions` is a pure function of the state and the rules'
///   configuration; querying an unmodified state twice returns the same
///   actions in the same order.
/// - `cost` is deterministic and only meaningful after `final_action`.
/// - `pick_action_with_policy` consumes the RNG stream deterministically,
///   drawing at most once per choice.
pub trait SearchRules {
    type Action: Clone;
    type State: SearchState<Action = Self::Action>;
    /// Fatal configuration error surfaced while costing.
    type Error: std::error::Error;

    /// Root state of a search.
    fn initial_state(&self) -> Self::State;

    /// Every action that may legally be applied to `state`, in catalogue order.
    fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Cost of a terminal state. Lower is better; reward is its negation.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` when the rules' configuration cannot be
    /// reconciled with the state. This aborts the search.
    fn cost(&self, state: &Self::State) -> Result<f64, Self::Error>;

    fn clone_state(&self, state: &Self::State) -> Self::State {
        state.clone()
    }

    fn update_state(&self, state: &mut Self::State, action: &Self::Action) {
        state.update(action);
    }

    /// Extra cost charged to an action while it is being compared at a
    /// nested level. Defaults to zero.
    fn action_cost(&self, _action: &Self::Action) -> f64 {
        0.0
    }

    /// Choose the next rollout action. Defaults to a uniform draw.
    ///
    /// # Panics
    ///
    /// Panics if `valid` is empty; the engine never calls it that way.
    fn pick_action_with_policy<G: Rng + ?Sized>(
        &self,
        valid: &[Self::Action],
        rng: &mut G,
    ) -> Self::Action {
        valid[rng.random_range(0..valid.len())].clone()
    }

    /// Hook run once on a terminal state before it is costed.
    fn final_action(&self, _state: &mut Self::State) {}
}
