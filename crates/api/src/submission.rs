// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The submission loop: allocate, insert, retry on conflict.
//!
//! Computing max-plus-one over a point-in-time bucket read is racy: two
//! concurrent submissions can derive the same candidate sequence. The store
//! closes the race by refusing duplicate IDs atomically; this loop re-reads
//! the bucket and retries with the next candidate when that happens. Each
//! conflict means a competing submission committed in the same bucket, so
//! the number of retries a submitter can need is bounded by the number of
//! competitors.

use reimburse::{
    AllocationInput, Command, CoreError, CreationResult, allocate_application_id, create_request,
};
use reimburse_audit::{Actor, Cause};
use reimburse_persistence::{PersistenceError, RequestStore};
use thiserror::Error;
use time::OffsetDateTime;

/// Upper bound on allocation attempts before giving up.
const MAX_ALLOCATION_ATTEMPTS: usize = 32;

/// Errors from the submission loop.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The store refused an operation for a reason other than an ID
    /// conflict.
    #[error("storage error during submission: {0}")]
    Storage(#[from] PersistenceError),
    /// The workflow core refused the submission command.
    #[error("workflow error during submission: {0}")]
    Workflow(#[from] CoreError),
    /// Every candidate ID collided. With honest clients this indicates a
    /// store that keeps reporting conflicts, not genuine contention.
    #[error("allocation retries exhausted after {attempts} attempts in bucket {bucket}")]
    RetriesExhausted {
        /// How many candidates were tried.
        attempts: usize,
        /// The bucket prefix being allocated in.
        bucket: String,
    },
}

/// The outcome of a successful submission.
#[derive(Debug)]
pub struct SubmissionOutcome {
    /// The persisted creation result (aggregate plus audit event).
    pub creation: CreationResult,
    /// True when the ID came from the degraded timestamp path.
    pub degraded_allocation: bool,
}

/// Allocates an ID and persists a new request, retrying on ID conflicts.
///
/// The submission command must be a `Command::SubmitRequest`; its claim
/// attributes drive the bucket prefix.
///
/// # Errors
///
/// Returns an error if the store fails for any reason other than an ID
/// conflict, if the core refuses the command, or if every retry collides.
pub fn submit_with_retry(
    store: &dyn RequestStore,
    command: &Command,
    actor: &Actor,
    cause: &Cause,
    now: OffsetDateTime,
) -> Result<SubmissionOutcome, SubmissionError> {
    let input = allocation_input(command);

    for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
        let allocated =
            allocate_application_id(&input, |prefix| store.find_ids_with_prefix(prefix));

        let creation = create_request(
            allocated.id.clone(),
            command.clone(),
            actor.clone(),
            cause.clone(),
            now,
        )?;

        match store.insert(creation.request.clone()) {
            Ok(()) => {
                return Ok(SubmissionOutcome {
                    creation,
                    degraded_allocation: allocated.degraded,
                });
            }
            Err(PersistenceError::DuplicateApplicationId(id)) => {
                // A competing submission won this sequence; re-read and retry.
                tracing::debug!(
                    application_id = %id,
                    attempt,
                    "candidate ID collided, retrying allocation"
                );
            }
            Err(other) => return Err(SubmissionError::Storage(other)),
        }
    }

    Err(SubmissionError::RetriesExhausted {
        attempts: MAX_ALLOCATION_ATTEMPTS,
        bucket: input.bucket_prefix(),
    })
}

fn allocation_input(command: &Command) -> AllocationInput<'_> {
    match command {
        Command::SubmitRequest {
            applicant_type,
            reimbursement_type,
            academic_year,
            department,
            ..
        } => AllocationInput {
            applicant_type: *applicant_type,
            reimbursement_type: *reimbursement_type,
            academic_year,
            department,
        },
        Command::Transition { .. } => {
            unreachable!("submission loop called with a transition command")
        }
    }
}
