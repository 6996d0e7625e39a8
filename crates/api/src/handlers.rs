// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;
use time::OffsetDateTime;

use reimburse::{Command, apply_transition};
use reimburse_audit::Cause;
use reimburse_domain::{
    ApplicantType, ReimbursementType, RequestStatus, parse_application_id,
};
use reimburse_persistence::RequestStore;

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
    translate_submission_error,
};
use crate::request_response::{
    ParsedApplicationIdResponse, RequestInfo, SubmitRequestForm, SubmitRequestResponse,
    TransitionRequestForm, TransitionRequestResponse, format_updated_at,
};
use crate::submission::submit_with_retry;

/// Submits a new reimbursement request.
///
/// This function:
/// - verifies the actor holds a claimant role
/// - normalizes the free-text applicant type and category
/// - allocates an application ID and persists the request, retrying on
///   ID conflicts
/// - records the audit event
///
/// # Arguments
///
/// * `store` - The storage collaborator
/// * `form` - The submission form
/// * `actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(SubmitRequestResponse)` on success
/// * `Err(ApiError)` if unauthorized or the store fails
///
/// # Errors
///
/// Returns an error if:
/// - The actor's role may not submit requests
/// - The store fails for a reason other than a retryable ID conflict
pub fn submit_request(
    store: &dyn RequestStore,
    form: SubmitRequestForm,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<SubmitRequestResponse, ApiError> {
    AuthorizationService::authorize_submit(actor)?;

    let command = Command::SubmitRequest {
        applicant_type: ApplicantType::from_text(&form.applicant_type),
        reimbursement_type: ReimbursementType::normalize(&form.reimbursement_type),
        department: form.department,
        academic_year: form.academic_year,
        amount: form.amount,
        documents: form.documents.into_iter().map(Into::into).collect(),
    };

    let outcome = submit_with_retry(
        store,
        &command,
        &actor.to_audit_actor(),
        &cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_submission_error)?;

    store
        .append_audit(outcome.creation.audit_event.clone())
        .map_err(translate_persistence_error)?;

    let request = outcome.creation.request;
    Ok(SubmitRequestResponse {
        application_id: request.application_id.clone(),
        status: request.status.as_str().to_string(),
        degraded_allocation: outcome.degraded_allocation,
        message: format!("Request {} submitted", request.application_id),
    })
}

/// Moves a request along the approval chain.
///
/// The aggregate is read, the transition applied (authorization first, then
/// table legality), and the result written back together with its audit
/// event under an optimistic version check. A version conflict means a
/// concurrent reviewer won the race; the caller should re-read and retry.
///
/// # Arguments
///
/// * `store` - The storage collaborator
/// * `form` - The transition form
/// * `actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionRequestResponse)` on success
/// * `Err(ApiError)` with a distinct kind for each refusal reason
///
/// # Errors
///
/// Returns an error if:
/// - The desired status string is unknown (`InvalidInput`)
/// - The request does not exist (`ResourceNotFound`)
/// - The actor is not authorized for this edge, or is a coordinator
///   outside the request's department (`Unauthorized`)
/// - The edge is not in the transition table (`InvalidTransition`)
/// - The aggregate changed concurrently (`ConcurrentModification`)
pub fn transition_request(
    store: &dyn RequestStore,
    form: TransitionRequestForm,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<TransitionRequestResponse, ApiError> {
    let desired = RequestStatus::from_str(&form.desired_status).map_err(translate_domain_error)?;

    let current = store
        .get(&form.application_id)
        .map_err(translate_persistence_error)?;
    AuthorizationService::authorize_transition_scope(actor, &current)?;
    let observed_version = current.version;

    let command = Command::Transition {
        desired_status: desired,
        comment: form.comment,
    };
    let result = apply_transition(
        &current,
        command,
        actor.role,
        actor.to_audit_actor(),
        cause,
        OffsetDateTime::now_utc(),
    )
    .map_err(translate_core_error)?;

    store
        .update_with_audit(
            result.new_request.clone(),
            observed_version,
            result.audit_event,
        )
        .map_err(translate_persistence_error)?;

    Ok(TransitionRequestResponse {
        application_id: result.new_request.application_id.clone(),
        status: result.new_request.status.as_str().to_string(),
        updated_at: format_updated_at(&result.new_request),
    })
}

/// Fetches a single request by application ID.
///
/// # Errors
///
/// Returns `ResourceNotFound` if no such request exists.
pub fn get_request(store: &dyn RequestStore, application_id: &str) -> Result<RequestInfo, ApiError> {
    store
        .get(application_id)
        .map(|request| RequestInfo::from(&request))
        .map_err(translate_persistence_error)
}

/// Lists requests currently in the given status.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown status string, or an internal
/// error if the store fails.
pub fn list_requests_by_status(
    store: &dyn RequestStore,
    status: &str,
) -> Result<Vec<RequestInfo>, ApiError> {
    let status = RequestStatus::from_str(status).map_err(translate_domain_error)?;
    store
        .list_by_status(status)
        .map(|requests| requests.iter().map(RequestInfo::from).collect())
        .map_err(translate_persistence_error)
}

/// Lists requests for a department.
///
/// # Errors
///
/// Returns an internal error if the store fails.
pub fn list_requests_by_department(
    store: &dyn RequestStore,
    department: &str,
) -> Result<Vec<RequestInfo>, ApiError> {
    store
        .list_by_department(department)
        .map(|requests| requests.iter().map(RequestInfo::from).collect())
        .map_err(translate_persistence_error)
}

/// Deletes a request, permitted only while it is still pending.
///
/// Withdrawal of a claim that has entered the review chain is not a
/// feature; reviewers reject instead.
///
/// # Errors
///
/// Returns an error if:
/// - The actor's role may not delete requests (`Unauthorized`)
/// - The request does not exist (`ResourceNotFound`)
/// - The request is no longer pending (`DomainRuleViolation`)
pub fn delete_request(
    store: &dyn RequestStore,
    application_id: &str,
    actor: &AuthenticatedActor,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_delete(actor)?;
    store
        .delete_pending(application_id)
        .map_err(translate_persistence_error)
}

/// Decodes an application ID into display labels.
///
/// # Errors
///
/// Returns `MalformedIdentifier` if the ID does not have the expected
/// 5-segment shape.
pub fn parse_application_id_info(id: &str) -> Result<ParsedApplicationIdResponse, ApiError> {
    let parsed = parse_application_id(id).map_err(translate_domain_error)?;
    Ok(ParsedApplicationIdResponse {
        applicant_type: parsed.applicant_type,
        category: parsed.category,
        year: parsed.year,
        department: parsed.department,
        sequence: parsed.sequence,
    })
}
