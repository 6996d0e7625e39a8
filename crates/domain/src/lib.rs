// Copyright (C) 2026 The Reimburse Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod application_id;
mod error;
mod request;
mod role;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use application_id::{
    ParsedApplicationId, bucket_prefix, department_code, extract_year, format_application_id,
    next_sequence_from_ids, parse_application_id,
};
pub use error::DomainError;
pub use request::ReimbursementRequest;
pub use role::ActorRole;
pub use status::RequestStatus;
pub use types::{ApplicantType, DocumentRef, ReimbursementType, ReviewComment};
