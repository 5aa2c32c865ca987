// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier generation for records and confirmations.
//!
//! Identifiers combine a fixed prefix, a time-derived numeric suffix, and
//! a short random alphanumeric tail. Collisions are negligible at club
//! volume; uniqueness is not cryptographically guaranteed.

use chrono::Utc;
use rand::RngExt;

/// Confirmation prefix for membership applications.
pub const MEMBERSHIP_PREFIX: &str = "RSC";

/// Confirmation prefix for facility bookings.
pub const BOOKING_PREFIX: &str = "BK";

/// Confirmation prefix for activity registrations.
pub const REGISTRATION_PREFIX: &str = "ACT";

const LOWER_ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const UPPER_ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a fresh activity record identifier.
///
/// Shape: `activity_<millisecond timestamp>_<9 random lowercase
/// alphanumerics>`.
#[must_use]
pub fn activity_id() -> String {
    format!(
        "activity_{}_{}",
        Utc::now().timestamp_millis(),
        random_tail(LOWER_ALPHANUMERIC, 9)
    )
}

/// Generates a confirmation identifier for a submitted workflow.
///
/// Shape: `<prefix><last six digits of the millisecond timestamp><4
/// random uppercase alphanumerics>`.
///
/// # Arguments
///
/// * `prefix` - Short fixed prefix identifying the workflow kind
#[must_use]
pub fn confirmation_id(prefix: &str) -> String {
    let millis: String = Utc::now().timestamp_millis().to_string();
    let tail_start: usize = millis.len().saturating_sub(6);
    format!(
        "{prefix}{}{}",
        &millis[tail_start..],
        random_tail(UPPER_ALPHANUMERIC, 4)
    )
}

fn random_tail(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(charset[rng.random_range(0..charset.len())]))
        .collect()
}
