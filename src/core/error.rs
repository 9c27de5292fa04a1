//! Typed failures of the tracker core.
//!
//! Repository methods return `anyhow::Result`; these types travel inside and
//! can be recovered with `downcast_ref` when a caller needs to branch on them.

use std::fmt;

/// Which level of the marathon tree a lookup missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Marathon,
    Area,
    HouseNumber,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Marathon => f.write_str("marathon"),
            RecordKind::Area => f.write_str("area"),
            RecordKind::HouseNumber => f.write_str("house number"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },
}

impl StoreError {
    pub(crate) fn not_found(kind: RecordKind, id: &str) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("group {requested} may not act for active group {active}")]
    PermissionDenied { requested: String, active: String },

    #[error("no active group in this session")]
    NoActiveGroup,

    #[error(transparent)]
    NotFound(#[from] StoreError),

    /// The store itself failed while resolving the request.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
