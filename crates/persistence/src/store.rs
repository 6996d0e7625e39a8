// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use reimburse_audit::AuditEvent;
use reimburse_domain::{ReimbursementRequest, RequestStatus};

/// The storage contract the workflow core requires.
///
/// Implementations must make `insert` atomic with respect to the uniqueness
/// of `application_id`, and `update` atomic with respect to the version
/// check. Both are scoped to a single aggregate (or a single bucket, for the
/// prefix scan); no cross-aggregate coordination is required.
pub trait RequestStore: Send + Sync {
    /// Returns all application IDs starting with `prefix`, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable. The allocator treats
    /// this as a degraded-path trigger, not a fatal condition.
    fn find_ids_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PersistenceError>;

    /// Inserts a new request, refusing duplicates of its application ID.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateApplicationId` if the ID is already taken; the
    /// submitter retries allocation with a fresh candidate.
    fn insert(&self, request: ReimbursementRequest) -> Result<(), PersistenceError>;

    /// Fetches a request by application ID (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no such request exists.
    fn get(&self, application_id: &str) -> Result<ReimbursementRequest, PersistenceError>;

    /// Replaces a request, provided the stored version still matches the
    /// version the caller observed when it read the aggregate.
    ///
    /// # Errors
    ///
    /// Returns `VersionConflict` if the aggregate changed in between;
    /// callers re-read and retry. Returns `NotFound` if the request does
    /// not exist.
    fn update(
        &self,
        request: ReimbursementRequest,
        expected_version: u64,
    ) -> Result<(), PersistenceError>;

    /// Replaces a request under the version check and appends the audit
    /// event recording the change, as a single operation.
    ///
    /// Implementations must commit both writes or neither; a transition must
    /// never land without its audit event.
    ///
    /// # Errors
    ///
    /// Returns `VersionConflict` if the aggregate changed in between, in
    /// which case the event is not appended either. Returns `NotFound` if
    /// the request does not exist.
    fn update_with_audit(
        &self,
        request: ReimbursementRequest,
        expected_version: u64,
        event: AuditEvent,
    ) -> Result<(), PersistenceError>;

    /// Deletes a request, permitted only while it is still pending.
    ///
    /// # Errors
    ///
    /// Returns `DeletionNotPermitted` once the request has entered the
    /// review chain, and `NotFound` if it does not exist.
    fn delete_pending(&self, application_id: &str) -> Result<(), PersistenceError>;

    /// Lists requests currently in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<ReimbursementRequest>, PersistenceError>;

    /// Lists requests for a department, matched on the display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn list_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<ReimbursementRequest>, PersistenceError>;

    /// Appends an audit event to the trail. Events are never updated or
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn append_audit(&self, event: AuditEvent) -> Result<(), PersistenceError>;

    /// Returns the audit events for a request, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn audit_for(&self, application_id: &str) -> Result<Vec<AuditEvent>, PersistenceError>;
}
