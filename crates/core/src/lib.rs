// Copyright (C) 2026 Fred Clausen
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

mod apply;
mod command;
mod error;
mod presets;
mod state;
mod summary;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Transition, TransitionOutcome, apply};
pub use command::{StepDirection, WorkflowCommand};
pub use error::CoreError;
pub use presets::{activity_registration, membership_signup, sports_booking};
pub use state::{
    FieldKind, FieldMap, FieldValue, RequiredField, StepConfig, StepState, Submission, Workflow,
    WorkflowConfig, WorkflowPhase,
};
pub use summary::{
    BookingSummary, booking_cost, format_long_date, format_time_12h, summary_ready,
};
