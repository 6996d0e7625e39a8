// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request status tracking and transition logic.
//!
//! This module defines the reimbursement request lifecycle and its valid
//! transitions. Status moves only along the approval chain
//! Coordinator -> HOD -> Principal -> Accounts, or to Rejected; the system
//! never advances status on its own.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Status states tracking a request through the approval chain.
///
/// Status is tracked per request. `Disbursed` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted, waiting for a coordinator to pick it up
    Pending,
    /// Under coordinator review
    UnderCoordinator,
    /// Under HOD review
    UnderHod,
    /// Under principal review
    UnderPrincipal,
    /// Approved, awaiting disbursement by accounts
    Approved,
    /// Amount paid out
    Disbursed,
    /// Refused at some review step
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderCoordinator => "under_coordinator",
            Self::UnderHod => "under_hod",
            Self::UnderPrincipal => "under_principal",
            Self::Approved => "approved",
            Self::Disbursed => "disbursed",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "under_coordinator" => Ok(Self::UnderCoordinator),
            "under_hod" => Ok(Self::UnderHod),
            "under_principal" => Ok(Self::UnderPrincipal),
            "approved" => Ok(Self::Approved),
            "disbursed" => Ok(Self::Disbursed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no outbound transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Disbursed | Self::Rejected)
    }

    /// Returns the set of statuses this status may transition to.
    #[must_use]
    pub const fn allowed_successors(&self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::UnderCoordinator, Self::Rejected],
            Self::UnderCoordinator => &[Self::UnderHod, Self::Rejected],
            Self::UnderHod => &[Self::UnderPrincipal, Self::Rejected],
            Self::UnderPrincipal => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Disbursed],
            Self::Disbursed | Self::Rejected => &[],
        }
    }

    /// Checks if a transition from this status to another is in the table.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::UnderCoordinator | Self::Rejected)
                | (Self::UnderCoordinator, Self::UnderHod | Self::Rejected)
                | (Self::UnderHod, Self::UnderPrincipal | Self::Rejected)
                | (Self::UnderPrincipal, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Disbursed)
        )
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        if self.can_transition_to(new_status) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by the approval chain".to_string(),
            })
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
