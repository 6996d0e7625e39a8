// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Actor roles and the role-authorization gate.
//!
//! Authorization is independent of transition-table legality: a role may be
//! refused an edge that is perfectly legal in the table, and vice versa.
//! Both checks must pass, authorization first.

use crate::error::DomainError;
use crate::status::RequestStatus;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Roles an actor can hold when interacting with the workflow.
///
/// Student, Faculty, Coordinator, and HOD are claimant roles (they may
/// submit requests). Coordinator, HOD, Principal, and Accounts additionally
/// hold review rights over specific edges of the approval chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// Student claimant; no transition rights.
    Student,
    /// Faculty claimant; no transition rights.
    Faculty,
    /// First reviewer in the chain; also a claimant.
    Coordinator,
    /// Second reviewer in the chain; also a claimant.
    Hod,
    /// Final approver.
    Principal,
    /// Disbursement office; may only pay out approved requests.
    Accounts,
}

impl ActorRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Faculty => "faculty",
            Self::Coordinator => "coordinator",
            Self::Hod => "hod",
            Self::Principal => "principal",
            Self::Accounts => "accounts",
        }
    }

    /// Returns true if this role may submit new reimbursement requests.
    #[must_use]
    pub const fn is_claimant(&self) -> bool {
        matches!(
            self,
            Self::Student | Self::Faculty | Self::Coordinator | Self::Hod
        )
    }

    /// Decides whether this role may invoke the `(from -> to)` edge.
    ///
    /// This is a total function over (role, from, to). It says nothing about
    /// whether the edge exists in the transition table; callers must check
    /// both, authorization first.
    #[must_use]
    pub const fn may_transition(&self, from: RequestStatus, to: RequestStatus) -> bool {
        match self {
            // Claimants have no transition rights; self-rejection is not a feature.
            Self::Student | Self::Faculty => false,
            Self::Coordinator => matches!(
                (from, to),
                (
                    RequestStatus::Pending,
                    RequestStatus::UnderCoordinator | RequestStatus::Rejected
                ) | (
                    RequestStatus::UnderCoordinator,
                    RequestStatus::UnderHod | RequestStatus::Rejected
                )
            ),
            Self::Hod => matches!(
                (from, to),
                (
                    RequestStatus::UnderHod,
                    RequestStatus::UnderPrincipal | RequestStatus::Rejected
                )
            ),
            Self::Principal => matches!(
                (from, to),
                (
                    RequestStatus::UnderPrincipal,
                    RequestStatus::Approved | RequestStatus::Rejected
                )
            ),
            Self::Accounts => matches!(
                (from, to),
                (RequestStatus::Approved, RequestStatus::Disbursed)
            ),
        }
    }
}

impl FromStr for ActorRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "faculty" => Ok(Self::Faculty),
            "coordinator" => Ok(Self::Coordinator),
            "hod" => Ok(Self::Hod),
            "principal" => Ok(Self::Principal),
            "accounts" => Ok(Self::Accounts),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
