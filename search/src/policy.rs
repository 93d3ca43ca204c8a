//! Search policy: nesting level and rollout budget.

use crate::error::SearchError;

/// Highest nesting level accepted by [`SearchPolicy::validate`].
///
/// Work grows as `B^level`; level 2 is the usual operating point.
pub const MAX_NESTING_LEVEL: u32 = 5;

/// Budget for one nested search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Nesting level. Level 0 is a single rollout.
    pub level: u32,
    /// Rollouts performed at each level-0 leaf; the best is kept.
    pub rollouts_per_leaf: u32,
}

impl SearchPolicy {
    #[must_use]
    pub fn with_level(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Pre-flight validation.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] when the level exceeds
    /// [`MAX_NESTING_LEVEL`] or no rollouts are allowed per leaf.
    pub fn validate<E>(&self) -> Result<(), SearchError<E>> {
        if self.level > MAX_NESTING_LEVEL {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "level {} exceeds the maximum nesting level {MAX_NESTING_LEVEL}",
                    self.level
                ),
            });
        }
        if self.rollouts_per_leaf == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "rollouts_per_leaf must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            level: 2,
            rollouts_per_leaf: 1,
        }
    }
}
