// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use reimburse_audit::AuditEvent;
use reimburse_domain::ReimbursementRequest;

/// The result of a successful status transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects. The input aggregate is never mutated in place; callers
/// persist `new_request` under an optimistic version check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The updated aggregate.
    pub new_request: ReimbursementRequest,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// The result of creating a new request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    /// The freshly created aggregate, in the `Pending` state.
    pub request: ReimbursementRequest,
    /// The audit event recording the submission.
    pub audit_event: AuditEvent,
}
