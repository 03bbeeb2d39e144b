//! Error type shared by the engines and the configuration layer.

/// Result alias for fallible search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while driving a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A terminal step was asked to advance
    AlreadyFinal,
    /// Board size outside the accepted range
    InvalidBoardSize(usize),
    /// Engine name that does not match any known engine
    UnknownEngine(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyFinal => write!(f, "search already finished"),
            Self::InvalidBoardSize(size) => write!(f, "invalid board size: {}", size),
            Self::UnknownEngine(name) => write!(f, "unknown engine: {}", name),
        }
    }
}

impl std::error::Error for SearchError {}
