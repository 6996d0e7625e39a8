// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticatedActor;
use crate::handlers::{submit_request, transition_request};
use crate::request_response::{
    SubmitRequestForm, SubmitRequestResponse, TransitionRequestForm, TransitionRequestResponse,
};
use crate::error::ApiError;
use reimburse_audit::Cause;
use reimburse_domain::ActorRole;
use reimburse_persistence::{InMemoryStore, RequestStore};

pub fn actor(role: ActorRole) -> AuthenticatedActor {
    actor_in_department(role, "Information Technology")
}

pub fn actor_in_department(role: ActorRole, department: &str) -> AuthenticatedActor {
    AuthenticatedActor::new(
        format!("{role}-1"),
        role,
        Some(department.to_string()),
    )
}

pub fn cause() -> Cause {
    Cause::new(String::from("form-1"), String::from("Portal submission"))
}

pub fn nptel_form() -> SubmitRequestForm {
    SubmitRequestForm {
        applicant_type: String::from("student"),
        reimbursement_type: String::from("NPTEL"),
        department: String::from("Information Technology"),
        academic_year: String::from("2025-2026"),
        amount: 4500,
        documents: Vec::new(),
    }
}

pub fn submit_nptel(store: &InMemoryStore) -> SubmitRequestResponse {
    submit_request(store, nptel_form(), &actor(ActorRole::Student), cause())
        .expect("submission should succeed")
}

pub fn move_as(
    store: &dyn RequestStore,
    acting: &AuthenticatedActor,
    application_id: &str,
    desired: &str,
    comment: Option<&str>,
) -> Result<TransitionRequestResponse, ApiError> {
    transition_request(
        store,
        TransitionRequestForm {
            application_id: application_id.to_string(),
            desired_status: desired.to_string(),
            comment: comment.map(String::from),
        },
        acting,
        cause(),
    )
}

pub fn move_to(
    store: &dyn RequestStore,
    application_id: &str,
    desired: &str,
    role: ActorRole,
    comment: Option<&str>,
) -> Result<TransitionRequestResponse, ApiError> {
    move_as(store, &actor(role), application_id, desired, comment)
}

/// Walks a freshly submitted request to the given point in the chain.
pub fn drive_to(store: &InMemoryStore, application_id: &str, target: &str) {
    let chain: [(&str, ActorRole); 5] = [
        ("under_coordinator", ActorRole::Coordinator),
        ("under_hod", ActorRole::Coordinator),
        ("under_principal", ActorRole::Hod),
        ("approved", ActorRole::Principal),
        ("disbursed", ActorRole::Accounts),
    ];
    for (status, role) in chain {
        move_to(store, application_id, status, role, None)
            .unwrap_or_else(|e| panic!("driving to {status} failed: {e}"));
        if status == target {
            return;
        }
    }
    panic!("unknown target status: {target}");
}
