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

mod activity;
mod catalog;
mod error;
mod ids;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use activity::{ActivityPatch, ActivityRecord, StoredActivity};
pub use catalog::{EventInfo, EventType, SportInfo, event_details, events, sport_details, sports};
pub use error::DomainError;
pub use ids::{
    BOOKING_PREFIX, MEMBERSHIP_PREFIX, REGISTRATION_PREFIX, activity_id, confirmation_id,
};
pub use pricing::PricingTable;
pub use types::{ActivityStatus, PatronType, Priority, Rate};
pub use validation::{
    CATEGORY_MAX, DESCRIPTION_MAX, DESCRIPTION_MIN, ValidationReport, parse_event_date,
    validate_activity_id, validate_category, validate_description, validate_event_date,
    validate_priority_label, validate_stored_activity,
};
