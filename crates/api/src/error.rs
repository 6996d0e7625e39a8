// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use reimburse::CoreError;
use reimburse_domain::{ActorRole, DomainError};
use reimburse_persistence::PersistenceError;

use crate::submission::SubmissionError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role that attempted it.
        role: ActorRole,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized { action, role } => {
                write!(f, "Unauthorized: role '{role}' may not perform '{action}'")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract: each refusal reason is a separate, stable kind, so the
/// transport layer can map them to distinct responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The actor does not have permission for the attempted action.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The requested status is not a legal successor of the current status.
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// The aggregate changed between read and write; retry with a fresh read.
    ConcurrentModification {
        /// The request that was concurrently modified.
        application_id: String,
    },
    /// An application ID could not be parsed.
    MalformedIdentifier {
        /// The offending identifier.
        id: String,
        /// Why parsing failed.
        message: String,
    },
    /// A domain rule outside the transition table was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action, message } => {
                write!(f, "Unauthorized ({action}): {message}")
            }
            Self::InvalidTransition { from, to, message } => {
                write!(f, "Invalid transition {from} -> {to}: {message}")
            }
            Self::ConcurrentModification { application_id } => {
                write!(
                    f,
                    "Request {application_id} was modified concurrently; retry with a fresh read"
                )
            }
            Self::MalformedIdentifier { id, message } => {
                write!(f, "Malformed application ID '{id}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::Unauthorized {
                action: String::from("authenticate"),
                message: reason,
            },
            AuthError::Unauthorized { action, role } => Self::Unauthorized {
                action,
                message: format!("role '{role}' lacks the required rights"),
            },
        }
    }
}

/// Translates a core error into its API representation.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Unauthorized { role, from, to } => ApiError::Unauthorized {
            action: String::from("transition_request"),
            message: format!("role '{role}' may not move a request from {from} to {to}"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a domain error into its API representation.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidTransition {
            from,
            to,
            message: reason,
        },
        DomainError::MalformedApplicationId { id, reason } => ApiError::MalformedIdentifier {
            id,
            message: reason,
        },
        DomainError::InvalidStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("unknown status '{value}'"),
        },
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("unknown role '{value}'"),
        },
        DomainError::InvalidApplicantType(value) => ApiError::InvalidInput {
            field: String::from("applicant_type"),
            message: format!("unknown applicant type '{value}'"),
        },
    }
}

/// Translates a submission-loop error into its API representation.
///
/// Storage and workflow failures keep their own translations; mislabeling a
/// core refusal as a storage outage would send operators chasing the wrong
/// subsystem.
#[must_use]
pub fn translate_submission_error(err: SubmissionError) -> ApiError {
    match err {
        SubmissionError::Storage(storage) => translate_persistence_error(storage),
        SubmissionError::Workflow(core) => translate_core_error(core),
        exhausted @ SubmissionError::RetriesExhausted { .. } => ApiError::Internal {
            message: exhausted.to_string(),
        },
    }
}

/// Translates a persistence error into its API representation.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::NotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("ReimbursementRequest"),
            message: id,
        },
        PersistenceError::VersionConflict { application_id, .. } => {
            ApiError::ConcurrentModification { application_id }
        }
        PersistenceError::DeletionNotPermitted {
            application_id,
            status,
        } => ApiError::DomainRuleViolation {
            rule: String::from("delete_pending_only"),
            message: format!("{application_id} is '{status}'; only pending requests may be deleted"),
        },
        PersistenceError::DuplicateApplicationId(id) => ApiError::Internal {
            message: format!("allocation retries exhausted for {id}"),
        },
        PersistenceError::Unavailable(message) => ApiError::Internal { message },
    }
}
