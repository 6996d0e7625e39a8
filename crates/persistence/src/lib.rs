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

//! Storage primitives for the reimbursement workflow.
//!
//! The workflow core needs exactly three guarantees from storage:
//!
//! - "find all application IDs with this prefix" (case-insensitive), for
//!   sequence allocation;
//! - insert with a uniqueness guarantee on `application_id`, so concurrent
//!   allocations into the same bucket cannot both commit the same sequence;
//! - "update this request given the previously observed version", so
//!   concurrent transitions on one aggregate cannot both succeed from the
//!   same starting state.
//!
//! `InMemoryStore` is the reference implementation of the contract and the
//! substrate for the concurrency tests. A relational backend is an external
//! collaborator; anything satisfying [`RequestStore`] plugs in.

mod error;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use memory::InMemoryStore;
pub use store::RequestStore;
