//! Placement actions: a unit template plus the values derived from it once
//! per session.

use std::sync::Arc;

use muscle_kernel::unit::Unit;

/// A unit that can be appended to the muscle.
///
/// Actions are built once by the catalogue and shared by every state
/// through `Arc`, so cloning a state never copies unit data.
#[derive(Debug, Clone, PartialEq)]
pub struct AggAction {
    pub unit: Arc<Unit>,
    /// Relative likelihood of being drawn during a rollout.
    pub rollout_weight: f64,
    /// Offset from the unit's axis-start to its door centre.
    pub door_position: f64,
    pub door_width: f64,
    /// Gross internal area including this unit's share of corridor.
    pub gia: f64,
}

/// Shared handle the search engine passes around.
pub type ActionRef = Arc<AggAction>;

impl AggAction {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.unit.length
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.unit.name
    }

    /// Distance from the far edge of the door to the unit's axis-end.
    #[must_use]
    pub fn door_distance_from_right(&self) -> f64 {
        self.unit.length - self.door_position - self.door_width / 2.0
    }

    /// Distance from the axis-start to the near edge of the door.
    #[must_use]
    pub fn door_distance_from_left(&self) -> f64 {
        self.door_position - self.door_width / 2.0
    }
}
