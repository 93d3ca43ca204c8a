//! Door and corridor clashes at the muscle ends.
//!
//! Neighbouring muscles may already run a corridor up to an end of this one
//! (the closing distance) and may place an entrance some distance beyond it.
//! A unit at that end clashes when its door falls inside the neighbour's
//! corridor, or when it closes the corridor too close to that entrance.

use crate::action::AggAction;
use crate::rules_data::EndDistances;

/// Whether `action` can sit first on the muscle.
///
/// `diff` is how far the unit is pushed away from the start. With
/// `skip_existing_closing` the neighbour's corridor is ignored and only the
/// closing-apartment rule applies.
#[must_use]
pub fn is_clear_at_start(
    action: &AggAction,
    end: EndDistances,
    diff: f64,
    skip_existing_closing: bool,
) -> bool {
    let closes = action.unit.closes_corridor();
    if end.closing > 0.0 && !skip_existing_closing {
        if action.door_distance_from_left() + diff < end.closing {
            return false;
        }
        if closes {
            return false;
        }
    }
    !(closes && close_length(action) + diff > end.entrance)
}

/// Whether `action` can sit last on the muscle, pushed `shift` away from
/// the end.
#[must_use]
pub fn is_clear_at_end(action: &AggAction, end: EndDistances, shift: f64) -> bool {
    let closes = action.unit.closes_corridor();
    if end.closing > 0.0 {
        if action.door_distance_from_right() + shift < end.closing {
            return false;
        }
        if closes {
            return false;
        }
    }
    !(closes && close_length(action) + shift > end.entrance)
}

fn close_length(action: &AggAction) -> f64 {
    action
        .unit
        .apartment_data()
        .and_then(|a| a.close_length)
        .unwrap_or(0.0)
}
