//! Domain error types

use thiserror::Error;

/// Errors the capture gateway surfaces to its callers.
///
/// Deliberately narrow: remote-datastore and local-storage failures are
/// recovered internally (logged, local floor) and never appear here. The
/// only thing a guest can ever see fail is their own input.
#[derive(Debug, Error)]
pub enum LeadError {
    /// User input incomplete or invalid at submission
    #[error("{0}")]
    Validation(#[from] models_leads::MissingFields),
}

/// Errors from the operator-facing content document operations
#[derive(Debug, Error)]
pub enum ContentError {
    /// The save was based on a stale copy of the document
    #[error("content revision {given} is stale, current revision is {current}")]
    RevisionMismatch { given: u64, current: u64 },

    /// Internal error (wraps storage errors)
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
