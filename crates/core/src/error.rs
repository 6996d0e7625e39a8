// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reimburse_domain::{ActorRole, DomainError, RequestStatus};

/// Errors that can occur while applying commands to a request.
///
/// Authorization and transition-table legality are independent checks, and
/// their failures are distinct variants so callers can tell "you're not
/// allowed" apart from "that move doesn't exist".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The actor's role lacks rights for the attempted edge.
    ///
    /// Checked before table legality, so an unauthorized actor receives this
    /// uniform error even for edges that are also illegal in the table.
    Unauthorized {
        /// The role that attempted the transition.
        role: ActorRole,
        /// The status the request was in.
        from: RequestStatus,
        /// The status the actor requested.
        to: RequestStatus,
    },
    /// A domain rule was violated (including illegal transitions).
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { role, from, to } => {
                write!(f, "Role '{role}' may not transition {from} -> {to}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
