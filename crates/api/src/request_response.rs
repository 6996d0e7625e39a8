// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response DTOs for the API boundary.
//!
//! These types define the API contract; the transport layer serializes them
//! as it sees fit. Free-text fields are normalized at the boundary, never in
//! the domain.

use reimburse_domain::{DocumentRef, ReimbursementRequest, ReviewComment};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

/// A document reference as submitted or returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// The original file name.
    pub file_name: String,
    /// Where the stored document can be fetched.
    pub url: String,
}

impl From<DocumentInfo> for DocumentRef {
    fn from(info: DocumentInfo) -> Self {
        Self {
            file_name: info.file_name,
            url: info.url,
        }
    }
}

impl From<&DocumentRef> for DocumentInfo {
    fn from(doc: &DocumentRef) -> Self {
        Self {
            file_name: doc.file_name.clone(),
            url: doc.url.clone(),
        }
    }
}

/// A new claim, as it arrives from the submission form.
///
/// `applicant_type` and `reimbursement_type` are free text here; the
/// boundary normalizes them leniently (unknown applicant types default to
/// student, unknown categories to other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequestForm {
    /// Who is claiming, as free text.
    pub applicant_type: String,
    /// What the claim is for, as free text.
    pub reimbursement_type: String,
    /// Department display name.
    pub department: String,
    /// Academic year, e.g. "2025" or "2025-2026".
    pub academic_year: String,
    /// Claimed amount.
    pub amount: u64,
    /// Supporting documents.
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// The result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequestResponse {
    /// The allocated application ID.
    pub application_id: String,
    /// The initial status (always "pending").
    pub status: String,
    /// True when the ID came from the degraded timestamp path; the caller
    /// may want to surface this to operations.
    pub degraded_allocation: bool,
    /// A success message.
    pub message: String,
}

/// A transition attempt against an existing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequestForm {
    /// The request to move.
    pub application_id: String,
    /// The desired status, e.g. "under_hod".
    pub desired_status: String,
    /// Optional review comment; appended to the trail when non-empty.
    #[serde(default)]
    pub comment: Option<String>,
}

/// The result of a successful transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequestResponse {
    /// The request that moved.
    pub application_id: String,
    /// The status after the transition.
    pub status: String,
    /// The refreshed update timestamp, RFC 3339.
    pub updated_at: String,
}

/// One review-trail entry, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewCommentInfo {
    /// The role of the reviewer who wrote the comment.
    pub author: String,
    /// The comment text.
    pub text: String,
    /// When the comment was recorded, RFC 3339.
    pub at: String,
}

/// A full request view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// The application ID.
    pub application_id: String,
    /// The applicant type, normalized.
    pub applicant_type: String,
    /// The category display label.
    pub reimbursement_type: String,
    /// Department display name.
    pub department: String,
    /// Academic year as submitted.
    pub academic_year: String,
    /// Claimed amount.
    pub amount: u64,
    /// Current status.
    pub status: String,
    /// The append-only review trail, oldest first.
    pub review_trail: Vec<ReviewCommentInfo>,
    /// Supporting documents.
    pub documents: Vec<DocumentInfo>,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
    /// Last update timestamp, RFC 3339.
    pub updated_at: String,
}

/// The decoded segments of an application ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedApplicationIdResponse {
    /// Display label of the applicant type.
    pub applicant_type: String,
    /// Display label of the category.
    pub category: String,
    /// The 4-digit year segment.
    pub year: String,
    /// Display name of the department, or the raw code when unknown.
    pub department: String,
    /// The sequence number.
    pub sequence: u32,
}

fn format_timestamp(timestamp: time::OffsetDateTime) -> String {
    timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| timestamp.to_string())
}

fn comment_info(comment: &ReviewComment) -> ReviewCommentInfo {
    ReviewCommentInfo {
        author: comment.author.as_str().to_string(),
        text: comment.text.clone(),
        at: format_timestamp(comment.at),
    }
}

impl From<&ReimbursementRequest> for RequestInfo {
    fn from(request: &ReimbursementRequest) -> Self {
        Self {
            application_id: request.application_id.clone(),
            applicant_type: request.applicant_type.as_str().to_string(),
            reimbursement_type: request.reimbursement_type.label().to_string(),
            department: request.department.clone(),
            academic_year: request.academic_year.clone(),
            amount: request.amount,
            status: request.status.as_str().to_string(),
            review_trail: request.review_trail.iter().map(comment_info).collect(),
            documents: request.documents.iter().map(DocumentInfo::from).collect(),
            created_at: format_timestamp(request.created_at),
            updated_at: format_timestamp(request.updated_at),
        }
    }
}

pub(crate) fn format_updated_at(request: &ReimbursementRequest) -> String {
    format_timestamp(request.updated_at)
}
