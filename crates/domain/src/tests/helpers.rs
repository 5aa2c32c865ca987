// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for domain tests.

use crate::{ActivityRecord, Priority};
use chrono::NaiveDate;

/// A valid, unscheduled practice activity.
pub fn create_test_activity() -> ActivityRecord {
    ActivityRecord::new(
        Some(String::from("activity_1735689600000_k3v9q2m1x")),
        "Football Practice",
        Priority::High,
        None,
        "football",
        false,
    )
}

/// A valid activity scheduled for the given date.
pub fn create_scheduled_activity(date: NaiveDate) -> ActivityRecord {
    ActivityRecord::new(
        Some(String::from("activity_1735689600000_a7c4f8n2d")),
        "Basketball Tournament",
        Priority::Medium,
        Some(date),
        "basketball",
        false,
    )
}

/// A stored-shape JSON value with the mandatory fields present.
pub fn stored_value() -> serde_json::Value {
    serde_json::json!({
        "id": "activity_1735689600000_p5r8t1w6z",
        "description": "Swimming Technique Clinic",
        "priority": "medium",
        "scheduledDate": "2026-05-25",
        "category": "swimming",
        "completed": false,
        "createdAt": "2026-01-02T09:30:00.000Z"
    })
}
