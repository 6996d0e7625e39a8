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

//! API boundary layer for the reimbursement workflow.
//!
//! Translates requests from the transport layer (owned by an external
//! collaborator) into core commands, runs the submission retry loop, and
//! maps every refusal to a distinct, stable error kind so callers can tell
//! "you're not allowed" from "that move doesn't exist" from "try again".

mod auth;
mod error;
mod handlers;
mod request_response;
mod submission;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService};
pub use error::{
    ApiError, AuthError, translate_core_error, translate_domain_error,
    translate_persistence_error, translate_submission_error,
};
pub use handlers::{
    delete_request, get_request, list_requests_by_department, list_requests_by_status,
    parse_application_id_info, submit_request, transition_request,
};
pub use request_response::{
    DocumentInfo, ParsedApplicationIdResponse, RequestInfo, ReviewCommentInfo, SubmitRequestForm,
    SubmitRequestResponse, TransitionRequestForm, TransitionRequestResponse,
};
pub use submission::SubmissionError;
