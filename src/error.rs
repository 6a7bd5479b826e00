use thiserror::Error;

/// Errors returned by fallible [`Tree`](crate::Tree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The value asked for is not stored in the tree.
    #[error("item not in tree")]
    KeyNotFound,
}

/// Shorthand for results carrying a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
