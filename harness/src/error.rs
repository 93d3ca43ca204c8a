//! Typed failures for the aggregation harness.

use muscle_kernel::error::DatasetError;
use muscle_search::error::SearchError;

/// A rules configuration that cannot be resolved against its dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum RulesConfigError {
    /// The dataset itself is malformed.
    Dataset(DatasetError),
    /// `target_length` must be finite and positive.
    InvalidTargetLength { value: f64 },
    /// A numeric property is out of range.
    InvalidProperty { field: &'static str, detail: String },
    /// The properties document could not be parsed.
    Parse { detail: String },
}

impl std::fmt::Display for RulesConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dataset(e) => write!(f, "invalid dataset: {e}"),
            Self::InvalidTargetLength { value } => {
                write!(f, "target_length must be finite and positive, got {value}")
            }
            Self::InvalidProperty { field, detail } => write!(f, "invalid {field}: {detail}"),
            Self::Parse { detail } => write!(f, "cannot parse rules properties: {detail}"),
        }
    }
}

impl std::error::Error for RulesConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Dataset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DatasetError> for RulesConfigError {
    fn from(e: DatasetError) -> Self {
        Self::Dataset(e)
    }
}

/// Costing failure. Aborts the search that hit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// A distribution and its targets have different lengths.
    DistributionLengthMismatch { actual: usize, target: usize },
}

impl std::fmt::Display for CostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DistributionLengthMismatch { actual, target } => write!(
                f,
                "distribution has {actual} buckets but {target} targets were configured"
            ),
        }
    }
}

impl std::error::Error for CostError {}

/// Error during an aggregation run.
#[derive(Debug)]
pub enum RunError {
    /// Rules could not be built.
    Config(RulesConfigError),
    /// The nested search failed.
    Search(SearchError<CostError>),
    /// Costing the reported solution failed.
    Cost(CostError),
    /// Writing the report failed.
    Report { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Cost(e) => write!(f, "cost error: {e}"),
            Self::Report { detail } => write!(f, "report error: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Cost(e) => Some(e),
            Self::Report { .. } => None,
        }
    }
}

impl From<RulesConfigError> for RunError {
    fn from(e: RulesConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError<CostError>> for RunError {
    fn from(e: SearchError<CostError>) -> Self {
        Self::Search(e)
    }
}

impl From<CostError> for RunError {
    fn from(e: CostError) -> Self {
        Self::Cost(e)
    }
}
