//! Error taxonomy shared by the remote client, the data store and the
//! document pipeline.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    /// Network failure or a non-success HTTP status.
    #[error("fetch {what}: {message}")]
    Fetch { what: String, message: String },

    /// Malformed JSON, an unreadable date or a broken document header.
    #[error("parse {what}: {message}")]
    Parse { what: String, message: String },

    /// A referenced id is absent from the in-memory data.
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },
}

impl DeskError {
    pub fn fetch(what: impl Into<String>, err: impl std::fmt::Display) -> Self {
        DeskError::Fetch {
            what: what.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(what: impl Into<String>, err: impl std::fmt::Display) -> Self {
        DeskError::Parse {
            what: what.into(),
            message: err.to_string(),
        }
    }

    pub fn not_found(what: &'static str, id: impl std::fmt::Display) -> Self {
        DeskError::NotFound {
            what,
            id: id.to_string(),
        }
    }

    pub fn is_fetch(&self) -> bool {
        matches!(self, DeskError::Fetch { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, DeskError::Parse { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DeskError::NotFound { .. })
    }
}

pub type DeskResult<T> = std::result::Result<T, DeskError>;
