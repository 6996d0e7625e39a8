// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

#[test]
fn test_invalid_transition_display_names_both_states() {
    let err = DomainError::InvalidStatusTransition {
        from: String::from("under_hod"),
        to: String::from("approved"),
        reason: String::from("transition not permitted by the approval chain"),
    };
    let msg = err.to_string();
    assert!(msg.contains("under_hod"));
    assert!(msg.contains("approved"));
}

#[test]
fn test_malformed_application_id_display_includes_offender() {
    let err = DomainError::MalformedApplicationId {
        id: String::from("garbage"),
        reason: String::from("expected 5 segments, found 1"),
    };
    assert!(err.to_string().contains("garbage"));
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_err: &E) {}
    assert_error(&DomainError::InvalidStatus(String::from("bogus")));
}
