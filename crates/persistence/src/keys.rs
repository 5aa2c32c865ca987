// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The club's stored collection keys.

/// Membership applications.
pub const MEMBERSHIPS_KEY: &str = "ryanSportsClubMemberships";

/// Facility bookings.
pub const BOOKINGS_KEY: &str = "ryanSportsClubBookings";

/// Event registrations.
pub const ACTIVITY_REGISTRATIONS_KEY: &str = "ryanSportsClubActivityRegistrations";

/// The key for a generic per-form-type submission collection
/// (e.g. `suggestion`, `feedback`).
#[must_use]
pub fn form_submissions_key(form_type: &str) -> String {
    format!("ryansports_{form_type}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_submissions_key_shape() {
        assert_eq!(form_submissions_key("feedback"), "ryansports_feedback");
        assert_eq!(form_submissions_key("suggestion"), "ryansports_suggestion");
    }
}
