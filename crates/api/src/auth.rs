// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authenticated actors and submission authorization.
//!
//! Authentication itself (sessions, tokens) is an external collaborator;
//! this module only represents its result. Transition authorization is
//! enforced inside the core's apply path; the boundary layer checks only
//! what the core cannot see, namely who may submit at all and whether a
//! department-scoped reviewer is acting inside their own department.

use reimburse_audit::Actor;
use reimburse_domain::{ActorRole, ReimbursementRequest};

use crate::error::AuthError;

/// An authenticated actor with an associated role.
///
/// This represents a portal user who has been authenticated upstream and
/// acts under exactly one role per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role the actor holds.
    pub role: ActorRole,
    /// The department the actor belongs to, for roles whose authority is
    /// department-scoped. `None` for institution-wide roles.
    pub department: Option<String>,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    /// * `department` - The actor's department, where the role has one
    #[must_use]
    pub const fn new(id: String, role: ActorRole, department: Option<String>) -> Self {
        Self {
            id,
            role,
            department,
        }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions
    /// to the authenticated user.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.role.as_str().to_string())
    }
}

/// Authorization service for boundary-level access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor may submit a new reimbursement request.
    ///
    /// Only claimant roles (Student, Faculty, Coordinator, HOD) may submit.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's role is not a claimant role.
    pub fn authorize_submit(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        if actor.role.is_claimant() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("submit_request"),
                role: actor.role,
            })
        }
    }

    /// Checks if an actor's department scope covers a request.
    ///
    /// Coordinator authority is scoped to the coordinator's own department;
    /// a coordinator from another department (or with no department at all)
    /// gets the same uniform refusal as any other unauthorized actor. The
    /// remaining reviewer roles act institution-wide.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor is a coordinator whose department does
    /// not match the request's department.
    pub fn authorize_transition_scope(
        actor: &AuthenticatedActor,
        request: &ReimbursementRequest,
    ) -> Result<(), AuthError> {
        if actor.role != ActorRole::Coordinator {
            return Ok(());
        }
        let in_scope = actor
            .department
            .as_deref()
            .is_some_and(|department| department.eq_ignore_ascii_case(&request.department));
        if in_scope {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("transition_request"),
                role: actor.role,
            })
        }
    }

    /// Checks if an actor may delete a request.
    ///
    /// Deletion is a claimant operation (withdrawing one's own pending
    /// claim); the pending-only gate itself lives in the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's role is not a claimant role.
    pub fn authorize_delete(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        if actor.role.is_claimant() {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: String::from("delete_request"),
                role: actor.role,
            })
        }
    }
}
