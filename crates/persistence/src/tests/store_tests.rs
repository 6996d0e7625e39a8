// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemoryStore, PersistenceError, RequestStore};
use reimburse_audit::{Action, Actor, AuditEvent, Cause, StatusSnapshot};
use reimburse_domain::{
    ApplicantType, ReimbursementRequest, ReimbursementType, RequestStatus,
};
use time::OffsetDateTime;

fn request_with_id(application_id: &str) -> ReimbursementRequest {
    ReimbursementRequest::new(
        application_id.to_string(),
        ApplicantType::Student,
        ReimbursementType::Nptel,
        String::from("Information Technology"),
        String::from("2025-2026"),
        4500,
        Vec::new(),
        OffsetDateTime::UNIX_EPOCH,
    )
}

fn sample_event(application_id: &str) -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("coord-1"), String::from("coordinator")),
        Cause::new(String::from("req-1"), String::from("Review decision")),
        Action::new(String::from("TransitionStatus"), None),
        StatusSnapshot::of(RequestStatus::Pending),
        StatusSnapshot::of(RequestStatus::UnderCoordinator),
        application_id.to_string(),
    )
}

#[test]
fn test_insert_then_get() {
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("insert should succeed");

    let fetched = store.get("S-NPT-2025-IT-001").expect("request exists");
    assert_eq!(fetched.application_id, "S-NPT-2025-IT-001");
}

#[test]
fn test_get_is_case_insensitive() {
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("insert should succeed");

    assert!(store.get("s-npt-2025-it-001").is_ok());
}

#[test]
fn test_insert_refuses_duplicate_id() {
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("first insert should succeed");

    let result = store.insert(request_with_id("S-NPT-2025-IT-001"));
    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateApplicationId(_))
    ));
}

#[test]
fn test_insert_refuses_duplicate_id_differing_only_in_case() {
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("first insert should succeed");

    let result = store.insert(request_with_id("s-npt-2025-it-001"));
    assert!(matches!(
        result,
        Err(PersistenceError::DuplicateApplicationId(_))
    ));
}

#[test]
fn test_find_ids_with_prefix_scopes_to_bucket() {
    let store = InMemoryStore::new();
    for id in [
        "S-NPT-2025-IT-001",
        "S-NPT-2025-IT-002",
        "S-NPT-2024-IT-001",
        "F-FDP-2025-CSE-001",
    ] {
        store.insert(request_with_id(id)).expect("insert");
    }

    let mut ids = store
        .find_ids_with_prefix("S-NPT-2025-IT-")
        .expect("lookup should succeed");
    ids.sort();
    assert_eq!(ids, vec!["S-NPT-2025-IT-001", "S-NPT-2025-IT-002"]);
}

#[test]
fn test_find_ids_with_prefix_is_case_insensitive() {
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("insert");

    let ids = store
        .find_ids_with_prefix("s-npt-2025-it-")
        .expect("lookup should succeed");
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_update_with_matching_version_succeeds() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");
    store.insert(request.clone()).expect("insert");

    let advanced = request.advanced(
        RequestStatus::UnderCoordinator,
        None,
        OffsetDateTime::UNIX_EPOCH,
    );
    store
        .update(advanced, request.version)
        .expect("update with observed version should succeed");

    let stored = store.get("S-NPT-2025-IT-001").expect("request exists");
    assert_eq!(stored.status, RequestStatus::UnderCoordinator);
    assert_eq!(stored.version, 2);
}

#[test]
fn test_update_with_stale_version_is_refused() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");
    store.insert(request.clone()).expect("insert");

    // A first writer wins
    let winner = request.advanced(
        RequestStatus::UnderCoordinator,
        None,
        OffsetDateTime::UNIX_EPOCH,
    );
    store.update(winner, request.version).expect("first write");

    // A second writer still holding the original read must be refused
    let loser = request.advanced(RequestStatus::Rejected, None, OffsetDateTime::UNIX_EPOCH);
    let result = store.update(loser, request.version);
    assert!(matches!(
        result,
        Err(PersistenceError::VersionConflict {
            expected: 1,
            actual: 2,
            ..
        })
    ));

    // The winner's write is intact
    let stored = store.get("S-NPT-2025-IT-001").expect("request exists");
    assert_eq!(stored.status, RequestStatus::UnderCoordinator);
}

#[test]
fn test_update_with_audit_commits_both_writes() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");
    store.insert(request.clone()).expect("insert");

    let advanced = request.advanced(
        RequestStatus::UnderCoordinator,
        None,
        OffsetDateTime::UNIX_EPOCH,
    );
    store
        .update_with_audit(advanced, request.version, sample_event("S-NPT-2025-IT-001"))
        .expect("combined write should succeed");

    let stored = store.get("S-NPT-2025-IT-001").expect("request exists");
    assert_eq!(stored.status, RequestStatus::UnderCoordinator);
    let trail = store.audit_for("S-NPT-2025-IT-001").expect("audit trail");
    assert_eq!(trail.len(), 1);
}

#[test]
fn test_update_with_audit_stale_version_writes_nothing() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");
    store.insert(request.clone()).expect("insert");

    let winner = request.advanced(
        RequestStatus::UnderCoordinator,
        None,
        OffsetDateTime::UNIX_EPOCH,
    );
    store.update(winner, request.version).expect("first write");

    // The refused write must leave neither a status change nor a stray
    // audit event behind.
    let loser = request.advanced(RequestStatus::Rejected, None, OffsetDateTime::UNIX_EPOCH);
    let result = store.update_with_audit(loser, request.version, sample_event("S-NPT-2025-IT-001"));
    assert!(matches!(
        result,
        Err(PersistenceError::VersionConflict { .. })
    ));

    let stored = store.get("S-NPT-2025-IT-001").expect("request exists");
    assert_eq!(stored.status, RequestStatus::UnderCoordinator);
    let trail = store.audit_for("S-NPT-2025-IT-001").expect("audit trail");
    assert!(trail.is_empty());
}

#[test]
fn test_update_missing_request_is_not_found() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");

    let result = store.update(request, 1);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_is_gated_to_pending() {
    let store = InMemoryStore::new();
    let request = request_with_id("S-NPT-2025-IT-001");
    store.insert(request.clone()).expect("insert");

    store
        .delete_pending("S-NPT-2025-IT-001")
        .expect("pending requests may be deleted");

    // Re-insert and move it into the chain; deletion is now refused
    let mut in_review = request;
    in_review.status = RequestStatus::UnderCoordinator;
    store.insert(in_review).expect("insert");

    let result = store.delete_pending("S-NPT-2025-IT-001");
    assert!(matches!(
        result,
        Err(PersistenceError::DeletionNotPermitted { .. })
    ));
}

#[test]
fn test_deleted_sequence_is_not_reused() {
    // Deletion leaves a gap; max-plus-one allocation must not backfill it
    // while a later ID exists.
    let store = InMemoryStore::new();
    store
        .insert(request_with_id("S-NPT-2025-IT-001"))
        .expect("insert");
    store
        .insert(request_with_id("S-NPT-2025-IT-002"))
        .expect("insert");
    store
        .delete_pending("S-NPT-2025-IT-001")
        .expect("delete pending");

    let ids = store
        .find_ids_with_prefix("S-NPT-2025-IT-")
        .expect("lookup");
    assert_eq!(
        reimburse_domain::next_sequence_from_ids(&ids, "S-NPT-2025-IT-"),
        3
    );
}

#[test]
fn test_list_by_status_and_department() {
    let store = InMemoryStore::new();
    let mut approved = request_with_id("S-NPT-2025-IT-001");
    approved.status = RequestStatus::Approved;
    store.insert(approved).expect("insert");

    let mut other_dept = request_with_id("S-NPT-2025-CSE-001");
    other_dept.department = String::from("Computer Science");
    store.insert(other_dept).expect("insert");

    let approved = store
        .list_by_status(RequestStatus::Approved)
        .expect("list by status");
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].application_id, "S-NPT-2025-IT-001");

    let cse = store
        .list_by_department("computer science")
        .expect("list by department");
    assert_eq!(cse.len(), 1);
    assert_eq!(cse[0].application_id, "S-NPT-2025-CSE-001");
}

#[test]
fn test_audit_trail_is_append_only_and_scoped() {
    let store = InMemoryStore::new();
    store
        .append_audit(sample_event("S-NPT-2025-IT-001"))
        .expect("append");
    store
        .append_audit(sample_event("S-NPT-2025-IT-002"))
        .expect("append");
    store
        .append_audit(sample_event("S-NPT-2025-IT-001"))
        .expect("append");

    let trail = store.audit_for("S-NPT-2025-IT-001").expect("audit trail");
    assert_eq!(trail.len(), 2);
    assert!(
        trail
            .iter()
            .all(|event| event.application_id == "S-NPT-2025-IT-001")
    );
}
