// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The club's standard workflow configurations.
//!
//! Membership signup, sports booking, and activity registration all
//! instantiate the same gated-step pattern; only the step shapes and
//! confirmation prefixes differ. Field names match the club's forms.

use crate::state::{FieldKind, RequiredField, StepConfig, WorkflowConfig};
use rsc_club_domain::{BOOKING_PREFIX, MEMBERSHIP_PREFIX, REGISTRATION_PREFIX};

fn text(name: &str) -> RequiredField {
    RequiredField::new(name, FieldKind::Text)
}

fn agreement(name: &str) -> RequiredField {
    RequiredField::new(name, FieldKind::Agreement)
}

/// The three-step membership signup workflow.
///
/// Personal details, then plan selection, then the agreement checkboxes
/// that gate final submission.
#[must_use]
pub fn membership_signup() -> WorkflowConfig {
    WorkflowConfig::new(
        "membership",
        MEMBERSHIP_PREFIX,
        vec![
            StepConfig::new(
                "Personal Details",
                vec![
                    text("firstName"),
                    text("lastName"),
                    text("email"),
                    text("phone"),
                ],
            ),
            StepConfig::new(
                "Membership Plan",
                vec![text("membershipPlan"), text("startDate")],
            ),
            StepConfig::new("Agreements", vec![agreement("agreements")]),
        ],
    )
}

/// The single-step facility booking workflow.
///
/// The caller supplies the facility via the `sportId` field; the session
/// details and contact fields gate submission.
#[must_use]
pub fn sports_booking() -> WorkflowConfig {
    WorkflowConfig::new(
        "booking",
        BOOKING_PREFIX,
        vec![StepConfig::new(
            "Session Details",
            vec![
                text("date"),
                text("time"),
                text("duration"),
                text("type"),
                text("name"),
                text("email"),
                text("phone"),
            ],
        )],
    )
}

/// The single-step activity registration workflow.
///
/// The caller supplies the event via the `activityId` field; the
/// registrant details and the terms agreement gate submission.
#[must_use]
pub fn activity_registration() -> WorkflowConfig {
    WorkflowConfig::new(
        "activity-registration",
        REGISTRATION_PREFIX,
        vec![StepConfig::new(
            "Registrant Details",
            vec![
                text("firstName"),
                text("lastName"),
                text("email"),
                text("phone"),
                agreement("agreement"),
            ],
        )],
    )
}
