// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application-ID allocation.
//!
//! The allocator derives a bucket prefix from claim attributes and asks the
//! storage collaborator for the IDs already in that bucket. Computing
//! max-plus-one over a point-in-time read is racy on its own; uniqueness is
//! enforced at the storage boundary (atomic insert with a uniqueness
//! guarantee on the ID), and submitters retry with a fresh candidate on
//! conflict.

use reimburse_domain::{
    ApplicantType, ReimbursementType, bucket_prefix, format_application_id, next_sequence_from_ids,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// The claim attributes that participate in identifier formation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationInput<'a> {
    /// Who is claiming; contributes the single-letter prefix.
    pub applicant_type: ApplicantType,
    /// What the claim is for; contributes the 3-letter category code.
    pub reimbursement_type: ReimbursementType,
    /// Academic year text; contributes the 4-digit year segment.
    pub academic_year: &'a str,
    /// Department display name; contributes the department code.
    pub department: &'a str,
}

impl AllocationInput<'_> {
    /// Returns the bucket prefix `{Prefix}-{Category}-{Year}-{Dept}-`
    /// these attributes allocate under.
    #[must_use]
    pub fn bucket_prefix(&self) -> String {
        bucket_prefix(
            self.applicant_type,
            self.reimbursement_type,
            self.academic_year,
            self.department,
        )
    }
}

/// A freshly allocated application ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedId {
    /// The candidate identifier.
    pub id: String,
    /// True when the bucket lookup failed and the sequence came from the
    /// degraded timestamp path, which weakens the uniqueness guarantee.
    pub degraded: bool,
}

/// Allocates a candidate application ID for a claim.
///
/// `lookup` fetches the existing IDs under the bucket prefix; the next
/// sequence is max-plus-one over that set, 3-digit zero-padded.
///
/// If the lookup fails, allocation must not take claim creation down with
/// it: the sequence falls back to the last 4 digits of the current Unix
/// timestamp (padded to at least 3 digits) and the result is flagged
/// degraded. The degraded path accepts a small collision risk and is logged
/// as a warning so it is never silently swallowed.
pub fn allocate_application_id<F, E>(input: &AllocationInput<'_>, lookup: F) -> AllocatedId
where
    F: FnOnce(&str) -> Result<Vec<String>, E>,
    E: std::fmt::Display,
{
    let prefix = input.bucket_prefix();
    match lookup(&prefix) {
        Ok(existing) => {
            let sequence = next_sequence_from_ids(&existing, &prefix);
            AllocatedId {
                id: format_application_id(&prefix, sequence),
                degraded: false,
            }
        }
        Err(err) => {
            tracing::warn!(
                bucket = %prefix,
                error = %err,
                "bucket lookup failed; allocating degraded timestamp-based sequence"
            );
            AllocatedId {
                id: format_application_id(&prefix, timestamp_sequence()),
                degraded: true,
            }
        }
    }
}

/// Last 4 digits of the current Unix timestamp, as a fallback sequence.
fn timestamp_sequence() -> u32 {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs());
    u32::try_from(secs % 10_000).unwrap_or(0)
}
