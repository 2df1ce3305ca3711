//! Error type shared by the runner, the catalog and the checked entry points
//! of individual problems.

use thiserror::Error;

/// Errors surfaced by `hot100`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No problem in the catalog matches the given id or slug.
    #[error("unknown problem: {0}")]
    UnknownProblem(String),

    /// A solution variant disagreed with the reference variant.
    #[error(
        "problem {problem}: variant `{variant}` disagrees on {input}: expected {expected}, got {actual}"
    )]
    Inconsistent {
        problem: &'static str,
        variant: &'static str,
        input: String,
        expected: String,
        actual: String,
    },

    /// Input violates the preconditions of a checked entry point.
    #[error("problem {problem}: invalid input: {reason}")]
    InvalidInput {
        problem: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(problem: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            problem,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
