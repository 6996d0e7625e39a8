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

mod allocator;
mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

pub use allocator::{AllocatedId, AllocationInput, allocate_application_id};
pub use apply::{apply_transition, create_request};
pub use command::Command;
pub use error::CoreError;
pub use state::{CreationResult, TransitionResult};
