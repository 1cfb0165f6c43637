//! Library error type.

use thiserror::Error;

/// Errors raised by the generation entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TesterError {
    /// The language token does not name any registered generator. This is a caller bug, never retried.
    #[error("unknown language `{id}` (expected one of: {known})")]
    UnknownLanguage { id: String, known: String },
}

impl TesterError {
    pub(crate) fn unknown_language(id: &str) -> Self {
        TesterError::UnknownLanguage {
            id: id.to_string(),
            known: crate::language::known_tokens().join(", "),
        }
    }
}
