use thiserror::Error;

/// Tree construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The builder was given input it can not build a tree from.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result alias for tree construction.
pub type Result<T> = std::result::Result<T, TreeError>;
