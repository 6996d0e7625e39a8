// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request::ReimbursementRequest;
use crate::role::ActorRole;
use crate::status::RequestStatus;
use crate::types::{ApplicantType, DocumentRef, ReimbursementType, ReviewComment};
use time::OffsetDateTime;

fn sample_request() -> ReimbursementRequest {
    ReimbursementRequest::new(
        String::from("S-NPT-2025-IT-001"),
        ApplicantType::Student,
        ReimbursementType::Nptel,
        String::from("Information Technology"),
        String::from("2025-2026"),
        4500,
        vec![DocumentRef {
            file_name: String::from("receipt.pdf"),
            url: String::from("https://files.example/receipt.pdf"),
        }],
        OffsetDateTime::UNIX_EPOCH,
    )
}

#[test]
fn test_new_request_starts_pending_at_version_one() {
    let request = sample_request();

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.version, 1);
    assert!(request.review_trail.is_empty());
    assert_eq!(request.created_at, request.updated_at);
}

#[test]
fn test_advanced_leaves_receiver_unmodified() {
    let request = sample_request();
    let later = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);

    let _next = request.advanced(RequestStatus::UnderCoordinator, None, later);

    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.version, 1);
    assert_eq!(request.updated_at, OffsetDateTime::UNIX_EPOCH);
}

#[test]
fn test_advanced_bumps_version_and_refreshes_updated_at() {
    let request = sample_request();
    let later = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);

    let next = request.advanced(RequestStatus::UnderCoordinator, None, later);

    assert_eq!(next.status, RequestStatus::UnderCoordinator);
    assert_eq!(next.version, 2);
    assert_eq!(next.updated_at, later);
    assert_eq!(next.created_at, request.created_at);
}

#[test]
fn test_advanced_appends_comment_without_touching_earlier_entries() {
    let request = sample_request();
    let t1 = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);
    let t2 = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(2);

    let first = request.advanced(
        RequestStatus::UnderCoordinator,
        Some(ReviewComment::new(
            ActorRole::Coordinator,
            String::from("forwarded for HOD review"),
            t1,
        )),
        t1,
    );
    let second = first.advanced(
        RequestStatus::Rejected,
        Some(ReviewComment::new(
            ActorRole::Coordinator,
            String::from("missing receipt"),
            t2,
        )),
        t2,
    );

    assert_eq!(second.review_trail.len(), 2);
    assert_eq!(second.review_trail[0].text, "forwarded for HOD review");
    assert_eq!(second.review_trail[1].text, "missing receipt");
}

#[test]
fn test_advanced_never_mutates_claim_fields() {
    let request = sample_request();
    let later = OffsetDateTime::UNIX_EPOCH + time::Duration::hours(1);

    let next = request.advanced(RequestStatus::UnderCoordinator, None, later);

    assert_eq!(next.application_id, request.application_id);
    assert_eq!(next.amount, request.amount);
    assert_eq!(next.department, request.department);
    assert_eq!(next.documents, request.documents);
}
