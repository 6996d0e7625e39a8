// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reimburse_domain::{ApplicantType, DocumentRef, ReimbursementType, RequestStatus};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Submit a new reimbursement claim.
    SubmitRequest {
        /// Who is claiming, already normalized.
        applicant_type: ApplicantType,
        /// What the claim is for, already normalized.
        reimbursement_type: ReimbursementType,
        /// Department display name.
        department: String,
        /// Academic year as submitted.
        academic_year: String,
        /// Claimed amount.
        amount: u64,
        /// Supporting document references.
        documents: Vec<DocumentRef>,
    },
    /// Move an existing request along the approval chain.
    Transition {
        /// The status the actor wants the request moved to.
        desired_status: RequestStatus,
        /// Optional review comment; appended to the trail when non-empty.
        comment: Option<String>,
    },
}
