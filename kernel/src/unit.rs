//! Unit templates placed along a muscle.
//!
//! Units arrive pre-digested: every geometric quantity the search needs
//! (door offset, door width, module area, net area) has already been
//! extracted by whoever built the dataset. Nothing here looks at geometry.

use serde::{Deserialize, Serialize};

/// Door width used when a unit does not carry its own entrance door.
pub const DEFAULT_DOOR_WIDTH: f64 = 1.3;

/// Which end of the muscle a closing apartment terminates.
///
/// Serialized as the signed axis direction (`1` / `-1`) the dataset uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum CloseDirection {
    /// Closes the corridor at the start of the muscle (`+1`).
    Start,
    /// Closes the corridor at the end of the muscle (`-1`).
    End,
}

impl TryFrom<i8> for CloseDirection {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value.signum() {
            1 => Ok(Self::Start),
            -1 => Ok(Self::End),
            _ => Err(format!("close direction must be +1 or -1, got {value}")),
        }
    }
}

impl From<CloseDirection> for i8 {
    fn from(value: CloseDirection) -> Self {
        match value {
            CloseDirection::Start => 1,
            CloseDirection::End => -1,
        }
    }
}

/// Apartment-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApartmentData {
    /// Unit-mix bucket label (e.g. `"1B2P"`).
    pub category: String,
    /// Net internal area.
    pub nia: f64,
    /// Set when the apartment can terminate the corridor at one end.
    pub close_direction: Option<CloseDirection>,
    /// True for corridor-terminating variants.
    pub close_corridor: bool,
    /// Corridor length swallowed by a closing apartment.
    pub close_length: Option<f64>,
    /// May sit directly after a building entrance.
    pub next_to_entrance: bool,
    /// May sit above a building entrance.
    pub above_entrance: bool,
    /// Offset from the unit's axis-start to the entrance door centre.
    pub door_position: f64,
    /// Entrance door width.
    pub door_width: f64,
    /// Sum of the apartment's module footprints.
    pub module_area: f64,
}

impl Default for ApartmentData {
    fn default() -> Self {
        Self {
            category: String::new(),
            nia: 0.0,
            close_direction: None,
            close_corridor: false,
            close_length: None,
            next_to_entrance: false,
            above_entrance: false,
            door_position: 0.0,
            door_width: DEFAULT_DOOR_WIDTH,
            module_area: 0.0,
        }
    }
}

/// Core-specific attributes. A core with neither lift flag is a stair core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreData {
    pub has_fire_lift: bool,
    pub has_non_fire_lift: bool,
}

impl CoreData {
    #[must_use]
    pub fn is_stair_only(&self) -> bool {
        !self.has_fire_lift && !self.has_non_fire_lift
    }
}

/// Discriminated unit variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnitKind {
    Apartment(ApartmentData),
    Core(CoreData),
    Entrance,
}

/// A unit template: one building block that can be placed on the muscle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Template name, unique within a dataset.
    pub name: String,
    /// Extent along the muscle axis.
    pub length: f64,
    /// Extent perpendicular to the axis.
    pub depth: f64,
    #[serde(flatten)]
    pub kind: UnitKind,
}

impl Unit {
    /// Build an apartment template.
    #[must_use]
    pub fn apartment(name: impl Into<String>, length: f64, depth: f64, data: ApartmentData) -> Self {
        Self {
            name: name.into(),
            length,
            depth,
            kind: UnitKind::Apartment(data),
        }
    }

    /// Build a core template.
    #[must_use]
    pub fn core(name: impl Into<String>, length: f64, depth: f64, data: CoreData) -> Self {
        Self {
            name: name.into(),
            length,
            depth,
            kind: UnitKind::Core(data),
        }
    }

    /// Build a building-entrance template.
    #[must_use]
    pub fn entrance(name: impl Into<String>, length: f64, depth: f64) -> Self {
        Self {
            name: name.into(),
            length,
            depth,
            kind: UnitKind::Entrance,
        }
    }

    #[must_use]
    pub fn is_apartment(&self) -> bool {
        matches!(self.kind, UnitKind::Apartment(_))
    }

    #[must_use]
    pub fn is_core(&self) -> bool {
        matches!(self.kind, UnitKind::Core(_))
    }

    #[must_use]
    pub fn is_entrance(&self) -> bool {
        matches!(self.kind, UnitKind::Entrance)
    }

    #[must_use]
    pub fn apartment_data(&self) -> Option<&ApartmentData> {
        match &self.kind {
            UnitKind::Apartment(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn core_data(&self) -> Option<&CoreData> {
        match &self.kind {
            UnitKind::Core(data) => Some(data),
            _ => None,
        }
    }

    /// Close direction of an apartment; `None` for everything else.
    #[must_use]
    pub fn close_direction(&self) -> Option<CloseDirection> {
        self.apartment_data().and_then(|a| a.close_direction)
    }

    /// True for apartments that terminate the corridor.
    #[must_use]
    pub fn closes_corridor(&self) -> bool {
        self.apartment_data().is_some_and(|a| a.close_corridor)
    }

    /// Net internal area; zero for cores and entrances.
    #[must_use]
    pub fn nia(&self) -> f64 {
        self.apartment_data().map_or(0.0, |a| a.nia)
    }
}
