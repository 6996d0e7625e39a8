// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::store::RequestStore;
use reimburse_audit::AuditEvent;
use reimburse_domain::{ReimbursementRequest, RequestStatus};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    /// Requests keyed by lower-cased application ID. The stored aggregate
    /// keeps the ID's original casing.
    requests: HashMap<String, ReimbursementRequest>,
    /// Append-only audit trail across all requests, in arrival order.
    audit: Vec<AuditEvent>,
}

/// Thread-safe in-memory implementation of [`RequestStore`].
///
/// A single mutex serializes all operations, which makes `insert` atomic
/// with respect to ID uniqueness and `update` atomic with respect to the
/// version check, the two guarantees the workflow relies on under concurrent
/// submission and review.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, PersistenceError> {
        self.inner
            .lock()
            .map_err(|_| PersistenceError::Unavailable(String::from("store mutex poisoned")))
    }
}

impl RequestStore for InMemoryStore {
    fn find_ids_with_prefix(&self, prefix: &str) -> Result<Vec<String>, PersistenceError> {
        let inner = self.lock()?;
        let needle = prefix.to_lowercase();
        Ok(inner
            .requests
            .values()
            .map(|request| request.application_id.clone())
            .filter(|id| id.to_lowercase().starts_with(&needle))
            .collect())
    }

    fn insert(&self, request: ReimbursementRequest) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let key = request.application_id.to_lowercase();
        if inner.requests.contains_key(&key) {
            return Err(PersistenceError::DuplicateApplicationId(
                request.application_id,
            ));
        }
        tracing::debug!(application_id = %request.application_id, "request stored");
        inner.requests.insert(key, request);
        Ok(())
    }

    fn get(&self, application_id: &str) -> Result<ReimbursementRequest, PersistenceError> {
        let inner = self.lock()?;
        inner
            .requests
            .get(&application_id.to_lowercase())
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound(application_id.to_string()))
    }

    fn update(
        &self,
        request: ReimbursementRequest,
        expected_version: u64,
    ) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let key = request.application_id.to_lowercase();
        let stored = inner
            .requests
            .get(&key)
            .ok_or_else(|| PersistenceError::NotFound(request.application_id.clone()))?;
        if stored.version != expected_version {
            return Err(PersistenceError::VersionConflict {
                application_id: request.application_id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        inner.requests.insert(key, request);
        Ok(())
    }

    fn update_with_audit(
        &self,
        request: ReimbursementRequest,
        expected_version: u64,
        event: AuditEvent,
    ) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let key = request.application_id.to_lowercase();
        let stored = inner
            .requests
            .get(&key)
            .ok_or_else(|| PersistenceError::NotFound(request.application_id.clone()))?;
        if stored.version != expected_version {
            return Err(PersistenceError::VersionConflict {
                application_id: request.application_id,
                expected: expected_version,
                actual: stored.version,
            });
        }
        // Both writes happen under the one lock; a refused version check
        // leaves the trail untouched.
        inner.requests.insert(key, request);
        inner.audit.push(event);
        Ok(())
    }

    fn delete_pending(&self, application_id: &str) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        let key = application_id.to_lowercase();
        let stored = inner
            .requests
            .get(&key)
            .ok_or_else(|| PersistenceError::NotFound(application_id.to_string()))?;
        if stored.status != RequestStatus::Pending {
            return Err(PersistenceError::DeletionNotPermitted {
                application_id: application_id.to_string(),
                status: stored.status.as_str().to_string(),
            });
        }
        inner.requests.remove(&key);
        Ok(())
    }

    fn list_by_status(
        &self,
        status: RequestStatus,
    ) -> Result<Vec<ReimbursementRequest>, PersistenceError> {
        let inner = self.lock()?;
        let mut matches: Vec<ReimbursementRequest> = inner
            .requests
            .values()
            .filter(|request| request.status == status)
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.application_id.cmp(&b.application_id));
        Ok(matches)
    }

    fn list_by_department(
        &self,
        department: &str,
    ) -> Result<Vec<ReimbursementRequest>, PersistenceError> {
        let inner = self.lock()?;
        let mut matches: Vec<ReimbursementRequest> = inner
            .requests
            .values()
            .filter(|request| request.department.eq_ignore_ascii_case(department))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.application_id.cmp(&b.application_id));
        Ok(matches)
    }

    fn append_audit(&self, event: AuditEvent) -> Result<(), PersistenceError> {
        let mut inner = self.lock()?;
        inner.audit.push(event);
        Ok(())
    }

    fn audit_for(&self, application_id: &str) -> Result<Vec<AuditEvent>, PersistenceError> {
        let inner = self.lock()?;
        Ok(inner
            .audit
            .iter()
            .filter(|event| event.application_id.eq_ignore_ascii_case(application_id))
            .cloned()
            .collect())
    }
}
