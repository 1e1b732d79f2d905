// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use sernum_domain::SerialToken;

/// Errors surfaced by the external collaborators a reconciliation cycle
/// depends on.
///
/// The core itself is total; these errors originate in the duplicate-lookup
/// and persistence seams and pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    /// The duplicate-lookup collaborator could not answer.
    LookupFailed(String),
    /// The storage collaborator could not apply a delta.
    StoreFailed(String),
    /// The storage collaborator detected a concurrent writer on the order
    /// line, violating the single-writer contract.
    ConcurrentModification {
        /// The contested order line.
        order_line: i64,
    },
}

impl std::fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LookupFailed(msg) => write!(f, "Duplicate lookup failed: {msg}"),
            Self::StoreFailed(msg) => write!(f, "Allocation store failed: {msg}"),
            Self::ConcurrentModification { order_line } => {
                write!(
                    f,
                    "Order line {order_line} was modified by a concurrent writer"
                )
            }
        }
    }
}

impl std::error::Error for CollaboratorError {}

/// Errors that can occur while applying a serial-number entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// One or more requested serial numbers already exist elsewhere in the
    /// system. The whole batch is rejected; nothing was persisted.
    DuplicateSerials(Vec<SerialToken>),
    /// A collaborator failed.
    Collaborator(CollaboratorError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateSerials(duplicates) => {
                let listed: Vec<&str> =
                    duplicates.iter().map(SerialToken::value).collect();
                write!(
                    f,
                    "Serial numbers already in use: {}",
                    listed.join(", ")
                )
            }
            Self::Collaborator(err) => write!(f, "Collaborator error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<CollaboratorError> for CoreError {
    fn from(err: CollaboratorError) -> Self {
        Self::Collaborator(err)
    }
}
