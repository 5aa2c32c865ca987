// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for booking summary derivation and formatting.

use crate::{
    BookingSummary, Workflow, booking_cost, format_long_date, format_time_12h, sports_booking,
    summary_ready,
};
use chrono::NaiveDate;
use rsc_club_domain::PricingTable;

use super::helpers::{BOOKING_FIELDS, set_fields};

fn booking_with(fields: &[(&str, &str)]) -> Workflow {
    set_fields(&Workflow::new(sports_booking()), fields)
}

#[test]
fn test_summary_absent_until_every_pricing_field_is_set() {
    let table: PricingTable = PricingTable::club_default();
    let partial: Workflow = booking_with(&[
        ("sportId", "basketball"),
        ("date", "2026-01-15"),
        ("time", "14:00"),
    ]);

    assert!(!summary_ready(partial.fields()));
    assert!(BookingSummary::derive(partial.fields(), &table).is_none());
}

#[test]
fn test_summary_derivation_for_a_guest_booking() {
    let table: PricingTable = PricingTable::club_default();
    let booking: Workflow = booking_with(&BOOKING_FIELDS);

    assert!(summary_ready(booking.fields()));
    let summary: BookingSummary = BookingSummary::derive(booking.fields(), &table)
        .expect("all pricing fields are populated");

    assert_eq!(summary.sport, "Basketball");
    assert_eq!(summary.date_time, "Thursday, January 15, 2026 at 2:00 PM");
    assert_eq!(summary.duration, "1.5 hours");
    assert_eq!(summary.patron, "Guest");
    assert_eq!(summary.cost, 38);
    assert_eq!(summary.total, "$38");
}

#[test]
fn test_summary_singular_duration_unit() {
    let table: PricingTable = PricingTable::club_default();
    let mut fields: Vec<(&str, &str)> = BOOKING_FIELDS.to_vec();
    for field in &mut fields {
        if field.0 == "duration" {
            field.1 = "1";
        }
        if field.0 == "type" {
            field.1 = "member";
        }
    }
    let booking: Workflow = booking_with(&fields);

    let summary: BookingSummary =
        BookingSummary::derive(booking.fields(), &table).expect("fields are populated");

    assert_eq!(summary.duration, "1 hour");
    assert_eq!(summary.patron, "Member");
    assert_eq!(summary.cost, 15);
}

#[test]
fn test_summary_prices_unknown_facility_at_zero() {
    let table: PricingTable = PricingTable::club_default();
    let mut fields: Vec<(&str, &str)> = BOOKING_FIELDS.to_vec();
    for field in &mut fields {
        if field.0 == "sportId" {
            field.1 = "badminton";
        }
    }
    let booking: Workflow = booking_with(&fields);

    let summary: BookingSummary =
        BookingSummary::derive(booking.fields(), &table).expect("fields are populated");

    assert_eq!(summary.sport, "badminton");
    assert_eq!(summary.cost, 0);
    assert_eq!(summary.total, "$0");
}

#[test]
fn test_summary_rejects_uninterpretable_values() {
    let table: PricingTable = PricingTable::club_default();
    let mut fields: Vec<(&str, &str)> = BOOKING_FIELDS.to_vec();
    for field in &mut fields {
        if field.0 == "duration" {
            field.1 = "soon";
        }
    }
    let booking: Workflow = booking_with(&fields);

    assert!(BookingSummary::derive(booking.fields(), &table).is_none());
}

#[test]
fn test_booking_cost_matches_pricing_table() {
    let table: PricingTable = PricingTable::club_default();
    let booking: Workflow = booking_with(&BOOKING_FIELDS);

    assert_eq!(booking_cost(booking.fields(), &table), 38);
}

#[test]
fn test_booking_cost_is_zero_for_incomplete_fields() {
    let table: PricingTable = PricingTable::club_default();
    let partial: Workflow = booking_with(&[("sportId", "basketball")]);

    assert_eq!(booking_cost(partial.fields(), &table), 0);
}

#[test]
fn test_long_date_formatting() {
    let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    assert_eq!(format_long_date(date), "Thursday, January 15, 2026");

    let single_digit: NaiveDate = NaiveDate::from_ymd_opt(2026, 4, 5).unwrap();
    assert_eq!(format_long_date(single_digit), "Sunday, April 5, 2026");
}

#[test]
fn test_twelve_hour_time_formatting() {
    assert_eq!(format_time_12h("06:00").as_deref(), Some("6:00 AM"));
    assert_eq!(format_time_12h("09:30").as_deref(), Some("9:30 AM"));
    assert_eq!(format_time_12h("12:00").as_deref(), Some("12:00 PM"));
    assert_eq!(format_time_12h("14:00").as_deref(), Some("2:00 PM"));
    assert_eq!(format_time_12h("00:15").as_deref(), Some("12:15 AM"));

    assert!(format_time_12h("25:00").is_none());
    assert!(format_time_12h("noon").is_none());
}
