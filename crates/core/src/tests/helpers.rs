// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reimburse_audit::{Actor, Cause};
use reimburse_domain::{
    ActorRole, ApplicantType, ReimbursementRequest, ReimbursementType, RequestStatus,
};
use time::OffsetDateTime;

pub fn create_test_actor(role: ActorRole) -> Actor {
    Actor::new(format!("{role}-1"), role.as_str().to_string())
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Review decision"))
}

pub fn test_time() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + time::Duration::days(20_000)
}

pub fn create_test_request() -> ReimbursementRequest {
    ReimbursementRequest::new(
        String::from("S-NPT-2025-IT-001"),
        ApplicantType::Student,
        ReimbursementType::Nptel,
        String::from("Information Technology"),
        String::from("2025-2026"),
        4500,
        Vec::new(),
        test_time(),
    )
}

/// A request already moved to the given status, bypassing the chain.
/// Only for test setup; production code has no such shortcut.
pub fn request_in_status(status: RequestStatus) -> ReimbursementRequest {
    let mut request = create_test_request();
    request.status = status;
    request
}
