//! Nested Monte-Carlo search.
//!
//! Level 0 is a rollout: a policy-driven walk from a state to a terminal
//! state. Level `n` tries every valid action, scores each with a level
//! `n - 1` search, commits the best one, and repeats until no valid action
//! remains (Cazenave, "Nested Monte-Carlo Search", IJCAI 2009).

use rand::Rng;
use tracing::{debug, trace};

use crate::contract::SearchRules;
use crate::error::SearchError;
use crate::policy::SearchPolicy;

/// Result of a nested search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<S> {
    /// Negated cost of `solution`.
    pub reward: f64,
    /// Best terminal state seen.
    pub solution: S,
    /// Number of rollouts performed.
    pub iterations: u64,
}

/// A nested search bound to one set of rules.
///
/// The root state is taken from the rules once at construction and reused
/// by every call to [`NestedSearch::run`] that does not supply its own start.
pub struct NestedSearch<'r, R: SearchRules> {
    rules: &'r R,
    root: R::State,
    rollouts_per_leaf: u32,
}

impl<'r, R: SearchRules> NestedSearch<'r, R> {
    /// One rollout per leaf.
    #[must_use]
    pub fn new(rules: &'r R) -> Self {
        Self {
            rules,
            root: rules.initial_state(),
            rollouts_per_leaf: 1,
        }
    }

    /// Build a search honouring `policy`'s rollout budget.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn with_policy(rules: &'r R, policy: &SearchPolicy) -> Result<Self, SearchError<R::Error>> {
        policy.validate::<R::Error>()?;
        Ok(Self {
            rollouts_per_leaf: policy.rollouts_per_leaf,
            ..Self::new(rules)
        })
    }

    /// The rules this search explores.
    #[must_use]
    pub fn rules(&self) -> &'r R {
        self.rules
    }

    /// Run a nested search of the given `level` from `state` (or the root).
    ///
    /// The starting state is never mutated. Reaching a state with no valid
    /// actions is a normal terminal condition: that state is finalised,
    /// costed, and reported.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Rules`] if costing any terminal state fails.
    pub fn run<G: Rng + ?Sized>(
        &self,
        state: Option<&R::State>,
        level: u32,
        rng: &mut G,
    ) -> Result<SearchOutcome<R::State>, SearchError<R::Error>> {
        let start = self.rules.clone_state(state.unwrap_or(&self.root));
        let outcome = self.nested(start, level, rng).map_err(SearchError::Rules)?;
        debug!(
            level,
            reward = outcome.reward,
            iterations = outcome.iterations,
            "nested search finished"
        );
        Ok(outcome)
    }

    fn nested<G: Rng + ?Sized>(
        &self,
        mut current: R::State,
        level: u32,
        rng: &mut G,
    ) -> Result<SearchOutcome<R::State>, R::Error> {
        let rules = self.rules;

        if level == 0 {
            let mut best: Option<SearchOutcome<R::State>> = None;
            for _ in 1..self.rollouts_per_leaf {
                let outcome = self.rollout(rules.clone_state(&current), rng)?;
                if best.as_ref().is_none_or(|b| outcome.reward > b.reward) {
                    best = Some(outcome);
                }
            }
            let last = self.rollout(current, rng)?;
            let mut best = match best {
                Some(b) if b.reward >= last.reward => b,
                _ => last,
            };
            best.iterations = u64::from(self.rollouts_per_leaf);
            return Ok(best);
        }

        let mut valid = rules.valid_actions(&current);
        if valid.is_empty() {
            rules.final_action(&mut current);
            let reward = -rules.cost(&current)?;
            return Ok(SearchOutcome {
                reward,
                solution: current,
                iterations: 0,
            });
        }

        let mut best_reward = f64::NEG_INFINITY;
        let mut best_solution = rules.clone_state(&self.root);
        let mut iterations = 0u64;

        while !valid.is_empty() {
            let mut best_inner_reward = f64::NEG_INFINITY;
            let mut best_inner_solution = None;
            let mut best_index = 0;

            for (index, action) in valid.iter().enumerate() {
                let mut inner = rules.clone_state(&current);
                rules.update_state(&mut inner, action);
                let outcome = self.nested(inner, level - 1, rng)?;
                let adjusted = outcome.reward - rules.action_cost(action);
                if adjusted > best_inner_reward {
                    best_inner_reward = adjusted;
                    best_index = index;
                    best_inner_solution = Some(outcome.solution);
                }
                iterations += outcome.iterations;
            }

            if best_inner_reward > best_reward {
                best_reward = best_inner_reward;
                if let Some(solution) = best_inner_solution {
                    best_solution = solution;
                }
            }

            trace!(level, index = best_index, reward = best_inner_reward, "committed action");
            rules.update_state(&mut current, &valid[best_index]);
            valid = rules.valid_actions(&current);
        }

        Ok(SearchOutcome {
            reward: best_reward,
            solution: best_solution,
            iterations,
        })
    }

    fn rollout<G: Rng + ?Sized>(
        &self,
        mut solution: R::State,
        rng: &mut G,
    ) -> Result<SearchOutcome<R::State>, R::Error> {
        let rules = self.rules;
        let mut valid = rules.valid_actions(&solution);
        while !valid.is_empty() {
            let action = rules.pick_action_with_policy(&valid, rng);
            rules.update_state(&mut solution, &action);
            valid = rules.valid_actions(&solution);
        }
        rules.final_action(&mut solution);
        let reward = -rules.cost(&solution)?;
        Ok(SearchOutcome {
            reward,
            solution,
            iterations: 1,
        })
    }
}

/// Validate `policy` and run a nested search from the rules' initial state.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any exploration if the
/// policy is rejected, or [`SearchError::Rules`] if costing fails.
pub fn search<R: SearchRules, G: Rng + ?Sized>(
    rules: &R,
    policy: &SearchPolicy,
    rng: &mut G,
) -> Result<SearchOutcome<R::State>, SearchError<R::Error>> {
    NestedSearch::with_policy(rules, policy)?.run(None, policy.level, rng)
}
