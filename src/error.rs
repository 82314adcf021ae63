use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordSearchError>;

/// The two ways a request against the engine can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A malformed argument: bad board size, empty token, zero minimum length, unreadable lexicon.
    InvalidInput,
    /// A lexicon-dependent query ran before any lexicon was loaded.
    NotReady,
}

#[derive(Debug, Error)]
pub enum WordSearchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("cannot read lexicon from {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no lexicon has been loaded")]
    NotReady,
}

impl WordSearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordSearchError::InvalidInput(_) | WordSearchError::UnreadableSource { .. } => {
                ErrorKind::InvalidInput
            }
            WordSearchError::NotReady => ErrorKind::NotReady,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        WordSearchError::InvalidInput(message.into())
    }
}
