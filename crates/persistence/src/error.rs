// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// An application ID already exists; the uniqueness guarantee refused
    /// the insert. Callers retry with a fresh candidate sequence.
    DuplicateApplicationId(String),
    /// The requested request was not found.
    NotFound(String),
    /// The aggregate changed between read and write; the caller should
    /// re-read and retry.
    VersionConflict {
        /// The request that was concurrently modified.
        application_id: String,
        /// The version the caller observed.
        expected: u64,
        /// The version actually stored.
        actual: u64,
    },
    /// Deletion refused: only pending requests may be deleted.
    DeletionNotPermitted {
        /// The request that was targeted.
        application_id: String,
        /// Its current status.
        status: String,
    },
    /// The store is unavailable.
    Unavailable(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateApplicationId(id) => {
                write!(f, "Application ID already exists: {id}")
            }
            Self::NotFound(id) => write!(f, "Request not found: {id}"),
            Self::VersionConflict {
                application_id,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Version conflict on {application_id}: expected {expected}, found {actual}"
                )
            }
            Self::DeletionNotPermitted {
                application_id,
                status,
            } => {
                write!(
                    f,
                    "Cannot delete {application_id}: status is '{status}', only pending requests may be deleted"
                )
            }
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}
