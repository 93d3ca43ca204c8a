//! Typed dataset validation errors.

/// A dataset that cannot drive an aggregation session.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// The dataset lists no apartment templates.
    NoApartments,
    /// A template in the apartment list is not an apartment.
    NotAnApartment { name: String },
    /// Two templates share a name.
    DuplicateName { name: String },
    /// A unit or core template has a non-positive or non-finite length.
    InvalidLength { name: String, length: f64 },
    /// An aggregation parameter is out of range.
    InvalidParameter { field: &'static str, value: f64 },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoApartments => write!(f, "dataset has no apartment templates"),
            Self::NotAnApartment { name } => {
                write!(f, "template {name:?} is listed as an apartment but is not one")
            }
            Self::DuplicateName { name } => write!(f, "duplicate template name {name:?}"),
            Self::InvalidLength { name, length } => {
                write!(f, "template {name:?} has invalid length {length}")
            }
            Self::InvalidParameter { field, value } => {
                write!(f, "aggregation parameter {field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for DatasetError {}
