// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for workflow tests.

use crate::{Workflow, WorkflowCommand, apply};

/// Applies a `SetField` for each pair, returning the resulting workflow.
pub fn set_fields(workflow: &Workflow, fields: &[(&str, &str)]) -> Workflow {
    let mut current: Workflow = workflow.clone();
    for (name, value) in fields {
        current = apply(
            &current,
            WorkflowCommand::SetField {
                name: (*name).to_string(),
                value: (*value).to_string(),
            },
        )
        .expect("workflow accepts fields")
        .workflow;
    }
    current
}

/// The personal-details fields for membership step 1.
pub const MEMBER_STEP_ONE: [(&str, &str); 4] = [
    ("firstName", "Jordan"),
    ("lastName", "Avery"),
    ("email", "jordan.avery@example.com"),
    ("phone", "+15550123"),
];

/// The plan fields for membership step 2.
pub const MEMBER_STEP_TWO: [(&str, &str); 2] =
    [("membershipPlan", "premium"), ("startDate", "2026-02-01")];

/// A complete set of booking fields for a basketball session.
pub const BOOKING_FIELDS: [(&str, &str); 8] = [
    ("sportId", "basketball"),
    ("date", "2026-01-15"),
    ("time", "14:00"),
    ("duration", "1.5"),
    ("type", "guest"),
    ("name", "Jordan Avery"),
    ("email", "jordan.avery@example.com"),
    ("phone", "+15550123"),
];
