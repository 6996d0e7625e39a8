// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The reimbursement request aggregate.

use crate::status::RequestStatus;
use crate::types::{ApplicantType, DocumentRef, ReimbursementType, ReviewComment};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A reimbursement claim moving through the approval chain.
///
/// The aggregate is the single source of truth a successful transition
/// mutates. Status never changes except through the transition table, the
/// review trail is append-only, and the application ID is assigned exactly
/// once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementRequest {
    /// Globally unique, human-readable identifier. Immutable once assigned.
    pub application_id: String,
    /// Who submitted the claim.
    pub applicant_type: ApplicantType,
    /// What the claim is for.
    pub reimbursement_type: ReimbursementType,
    /// Department display name (codes are derived only for the ID).
    pub department: String,
    /// Academic year as submitted, e.g. "2025" or "2025-2026".
    pub academic_year: String,
    /// Claimed amount. Caller-supplied; the workflow never mutates it.
    pub amount: u64,
    /// Current position in the approval chain.
    pub status: RequestStatus,
    /// Append-only review trail. Rejection reasons live here and are
    /// never erased or overwritten.
    pub review_trail: Vec<ReviewComment>,
    /// Attachment references. Opaque to the workflow.
    pub documents: Vec<DocumentRef>,
    /// When the request was created.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Refreshed on every successful transition.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Optimistic-concurrency token, bumped on every successful transition.
    pub version: u64,
}

impl ReimbursementRequest {
    /// Creates a new request in the `Pending` state.
    ///
    /// The application ID must already have been allocated; it is never
    /// regenerated afterwards.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        application_id: String,
        applicant_type: ApplicantType,
        reimbursement_type: ReimbursementType,
        department: String,
        academic_year: String,
        amount: u64,
        documents: Vec<DocumentRef>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            application_id,
            applicant_type,
            reimbursement_type,
            department,
            academic_year,
            amount,
            status: RequestStatus::Pending,
            review_trail: Vec::new(),
            documents,
            created_at,
            updated_at: created_at,
            version: 1,
        }
    }

    /// Returns a copy of this request advanced to a new status.
    ///
    /// The comment, if any, is appended to the review trail; existing
    /// entries are never touched. `updated_at` is refreshed and the version
    /// token bumped. The receiver is left unmodified; callers that fail
    /// validation simply drop the copy.
    #[must_use]
    pub fn advanced(
        &self,
        new_status: RequestStatus,
        comment: Option<ReviewComment>,
        now: OffsetDateTime,
    ) -> Self {
        let mut next = self.clone();
        next.status = new_status;
        if let Some(comment) = comment {
            next.review_trail.push(comment);
        }
        next.updated_at = now;
        next.version = self.version.saturating_add(1);
        next
    }
}
