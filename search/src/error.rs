//! Typed search errors.
//!
//! Running out of valid actions is never an error: the terminal state is
//! costed and reported like any other. `SearchError` covers only pre-flight
//! policy failures and fatal configuration errors raised by the rules.

/// Failure of a nested search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError<E> {
    /// The search policy failed pre-flight validation. No state was explored.
    InvalidPolicy { detail: String },
    /// The rules reported a fatal configuration error while costing.
    Rules(E),
}

impl<E: std::fmt::Display> std::fmt::Display for SearchError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
            Self::Rules(err) => write!(f, "search aborted by rules: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for SearchError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPolicy { .. } => None,
            Self::Rules(err) => Some(err),
        }
    }
}
