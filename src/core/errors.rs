use thiserror::Error;

use crate::global_constants;

/// Failure of a single search submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The API answered with a non-success status. No further detail is surfaced.
    #[error("{}", global_constants::SERVER_ERROR_MESSAGE)]
    Server,

    /// The request never produced a usable response.
    #[error("{0}")]
    Transport(String),
}
