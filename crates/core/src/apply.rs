// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{CreationResult, TransitionResult};
use reimburse_audit::{Action, Actor, AuditEvent, Cause, StatusSnapshot};
use reimburse_domain::{ActorRole, ReimbursementRequest, RequestStatus, ReviewComment};
use time::OffsetDateTime;

/// Creates a new request from a submission command.
///
/// The application ID must already have been allocated (see the allocator
/// module); status is forced to `Pending` regardless of caller input.
///
/// # Arguments
///
/// * `application_id` - The freshly allocated identifier
/// * `command` - The `SubmitRequest` command
/// * `actor` - The claimant performing this action
/// * `cause` - The cause or reason for this action
/// * `now` - The creation timestamp
///
/// # Returns
///
/// * `Ok(CreationResult)` containing the new aggregate and audit event
///
/// # Errors
///
/// Currently infallible for well-formed submission commands; the `Result`
/// shape matches `apply_transition` so callers handle both uniformly.
///
/// # Panics
///
/// Panics if called with a non-submission command; that is a programming
/// error in the caller, not a recoverable condition.
pub fn create_request(
    application_id: String,
    command: Command,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<CreationResult, CoreError> {
    match command {
        Command::SubmitRequest {
            applicant_type,
            reimbursement_type,
            department,
            academic_year,
            amount,
            documents,
        } => {
            let request = ReimbursementRequest::new(
                application_id.clone(),
                applicant_type,
                reimbursement_type,
                department,
                academic_year,
                amount,
                documents,
                now,
            );

            let action = Action::new(
                String::from("SubmitRequest"),
                Some(format!(
                    "Submitted {} claim for {}",
                    request.reimbursement_type, request.department
                )),
            );
            let audit_event = AuditEvent::new(
                actor,
                cause,
                action,
                StatusSnapshot::absent(),
                StatusSnapshot::of(RequestStatus::Pending),
                application_id,
            );

            tracing::debug!(
                application_id = %request.application_id,
                "request created in pending state"
            );

            Ok(CreationResult {
                request,
                audit_event,
            })
        }
        Command::Transition { .. } => {
            // Transition commands must go through apply_transition()
            unreachable!("create_request called with a transition command")
        }
    }
}

/// Applies a transition command to a request, producing the updated
/// aggregate and its audit event.
///
/// Checks run in a fixed order: the role-authorization gate first, then the
/// transition table. An unauthorized actor therefore receives a uniform
/// `Unauthorized` error even on an edge that is also illegal in the table,
/// which keeps callers from probing which states exist.
///
/// # Arguments
///
/// * `request` - The current aggregate (left unmodified on failure)
/// * `command` - The `Transition` command
/// * `role` - The role of the actor attempting the transition
/// * `actor` - The actor, for audit attribution
/// * `cause` - The cause or reason for this action
/// * `now` - The transition timestamp
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the updated aggregate and audit event
/// * `Err(CoreError)` if the actor is unauthorized or the edge is illegal
///
/// # Errors
///
/// Returns an error if:
/// - The role may not invoke this edge (`CoreError::Unauthorized`)
/// - The edge is not in the transition table (`CoreError::DomainViolation`)
///
/// # Panics
///
/// Panics if called with a non-transition command; that is a programming
/// error in the caller, not a recoverable condition.
pub fn apply_transition(
    request: &ReimbursementRequest,
    command: Command,
    role: ActorRole,
    actor: Actor,
    cause: Cause,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Transition {
            desired_status,
            comment,
        } => {
            // Authorization first, legality second. Both must pass.
            if !role.may_transition(request.status, desired_status) {
                return Err(CoreError::Unauthorized {
                    role,
                    from: request.status,
                    to: desired_status,
                });
            }
            request.status.validate_transition(desired_status)?;

            let review_comment = comment
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .map(|text| ReviewComment::new(role, text, now));

            let new_request = request.advanced(desired_status, review_comment, now);

            let action = Action::new(
                String::from("TransitionStatus"),
                Some(format!(
                    "Moved {} from {} to {}",
                    request.application_id, request.status, desired_status
                )),
            );
            let audit_event = AuditEvent::new(
                actor,
                cause,
                action,
                StatusSnapshot::of(request.status),
                StatusSnapshot::of(desired_status),
                request.application_id.clone(),
            );

            tracing::debug!(
                application_id = %request.application_id,
                from = %request.status,
                to = %desired_status,
                %role,
                "status transition applied"
            );

            Ok(TransitionResult {
                new_request,
                audit_event,
            })
        }
        Command::SubmitRequest { .. } => {
            // Submission commands must go through create_request()
            unreachable!("apply_transition called with a submission command")
        }
    }
}
