// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

//! Audit types for the reimbursement workflow.
//!
//! Every successful state change produces exactly one immutable audit event
//! scoped to an application ID. Events carry enough before/after status
//! information to reconstruct why a request reached its terminal state from
//! the trail alone.

use reimburse_domain::RequestStatus;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change:
/// a claimant, a reviewer, or the accounts office.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role the actor held when acting (e.g., "coordinator").
    pub role: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role held when acting
    #[must_use]
    pub const fn new(id: String, role: String) -> Self {
        Self { id, role }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, form submission ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`SubmitRequest`", "`TransitionStatus`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The status a request held on one side of a transition.
///
/// `None` on the before side marks creation: the request did not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// The status, or `None` before the request existed.
    pub status: Option<RequestStatus>,
}

impl StatusSnapshot {
    /// Snapshot of an existing request's status.
    #[must_use]
    pub const fn of(status: RequestStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Snapshot of a request that does not exist yet.
    #[must_use]
    pub const fn absent() -> Self {
        Self { status: None }
    }
}

/// An immutable audit event recording one state transition.
///
/// Captures who performed the action (actor), why (cause), what was done
/// (action), and the status on both sides of the transition, scoped to one
/// application ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The status before the transition.
    pub before: StatusSnapshot,
    /// The status after the transition.
    pub after: StatusSnapshot,
    /// The application ID this event is scoped to.
    pub application_id: String,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`. Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The status before the transition
    /// * `after` - The status after the transition
    /// * `application_id` - The request this event belongs to
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StatusSnapshot,
        after: StatusSnapshot,
        application_id: String,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            application_id,
        }
    }
}
