// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was refused.
        reason: String,
    },
    /// A status string could not be parsed.
    InvalidStatus(String),
    /// A role string could not be parsed.
    InvalidRole(String),
    /// An applicant type string could not be parsed.
    InvalidApplicantType(String),
    /// An application ID does not have the expected shape.
    MalformedApplicationId {
        /// The offending identifier.
        id: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Invalid status transition {from} -> {to}: {reason}")
            }
            Self::InvalidStatus(status) => write!(f, "Invalid status: {status}"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidApplicantType(applicant) => {
                write!(f, "Invalid applicant type: {applicant}")
            }
            Self::MalformedApplicationId { id, reason } => {
                write!(f, "Malformed application ID '{id}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
