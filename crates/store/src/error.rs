//! Store client error type.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, FetchError>;

/// The store operation a request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Operation::List => "Failed to fetch books",
            Operation::Get => "Failed to fetch book",
            Operation::Create => "Failed to create book",
            Operation::Update => "Failed to update book",
            Operation::Delete => "Failed to delete book",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a store call failed. Only used for diagnostics; callers see [`FetchError`].
#[derive(Debug, Error)]
pub enum FetchCause {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),
}

/// The single failure kind surfaced by the store client.
#[derive(Debug, Error)]
#[error("{}", .operation.failure_message())]
pub struct FetchError {
    operation: Operation,
    #[source]
    cause: FetchCause,
}

impl FetchError {
    pub fn new(operation: Operation, cause: impl Into<FetchCause>) -> Self {
        Self {
            operation,
            cause: cause.into(),
        }
    }

    pub fn status(operation: Operation, status: StatusCode) -> Self {
        Self::new(operation, FetchCause::Status(status))
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }
}
