// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the field-level validation rules.

use crate::{
    DomainError, StoredActivity, ValidationReport, validate_activity_id, validate_category,
    validate_description, validate_event_date, validate_priority_label, validate_stored_activity,
};

fn valid_stored() -> StoredActivity {
    StoredActivity {
        id: String::from("activity_1735689600000_x1y2z3a4b"),
        description: String::from("Indoor Basketball Tournament"),
        priority: String::from("high"),
        scheduled_date: Some(String::from("2026-02-25")),
        category: String::from("basketball"),
        completed: false,
        created_at: None,
        completed_at: None,
    }
}

#[test]
fn test_valid_stored_activity_has_no_errors() {
    let report: ValidationReport = validate_stored_activity(&valid_stored());

    assert!(report.is_valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_description_length_boundaries() {
    assert!(validate_description("abc").is_ok());
    assert!(validate_description(&"x".repeat(100)).is_ok());

    // One character below and above the limits
    let too_short = validate_description("ab").unwrap_err();
    assert!(too_short.to_string().contains("at least 3 characters"));

    let too_long = validate_description(&"x".repeat(101)).unwrap_err();
    assert!(too_long.to_string().contains("not exceed 100 characters"));
}

#[test]
fn test_description_required_and_non_blank() {
    let missing = validate_description("").unwrap_err();
    assert!(matches!(missing, DomainError::InvalidDescription(_)));
    assert_eq!(missing.to_string(), "Activity name is required");

    let blank = validate_description("   ").unwrap_err();
    assert_eq!(blank.to_string(), "Activity name cannot be empty");
}

#[test]
fn test_description_length_uses_trimmed_value() {
    // Two characters padded with whitespace still fails the minimum
    assert!(validate_description("  ab  ").is_err());
    assert!(validate_description("  abc  ").is_ok());
}

#[test]
fn test_priority_label_membership() {
    for label in ["low", "medium", "high"] {
        assert!(validate_priority_label(label).is_ok());
    }

    let err = validate_priority_label("urgent").unwrap_err();
    assert_eq!(err.to_string(), "Priority must be one of: low, medium, high");
}

#[test]
fn test_category_length_limit() {
    assert!(validate_category("").is_ok());
    assert!(validate_category(&"c".repeat(50)).is_ok());

    let err = validate_category(&"c".repeat(51)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidCategory(_)));
}

#[test]
fn test_event_date_parseability_only() {
    assert!(validate_event_date("2026-02-14").is_ok());
    assert!(validate_event_date("2026-02-14T18:00:00.000Z").is_ok());

    // Past dates are allowed; only parseability is checked
    assert!(validate_event_date("1999-01-01").is_ok());

    assert!(validate_event_date("next tuesday").is_err());
    assert!(validate_event_date("2026-13-40").is_err());
}

#[test]
fn test_activity_id_required() {
    assert!(validate_activity_id("activity_1_abc").is_ok());

    let err = validate_activity_id("").unwrap_err();
    assert_eq!(err.to_string(), "Activity ID is required");
    assert!(validate_activity_id("   ").is_err());
}

#[test]
fn test_all_violations_collected_in_order() {
    let stored: StoredActivity = StoredActivity {
        id: String::new(),
        description: String::from("ab"),
        priority: String::from("urgent"),
        scheduled_date: Some(String::from("not a date")),
        category: "c".repeat(51),
        completed: false,
        created_at: None,
        completed_at: None,
    };

    let report: ValidationReport = validate_stored_activity(&stored);

    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 5);
    assert!(report.errors[0].contains("at least 3 characters"));
    assert!(report.errors[1].contains("low, medium, high"));
    assert!(report.errors[2].contains("50 characters"));
    assert!(report.errors[3].contains("valid date"));
    assert!(report.errors[4].contains("Activity ID"));
}

#[test]
fn test_report_into_result_carries_error_list() {
    let report: ValidationReport =
        ValidationReport::from_errors(vec![String::from("Activity name is required")]);

    let err: DomainError = report.into_result().unwrap_err();
    assert!(matches!(
        err,
        DomainError::ValidationFailed { ref errors } if errors.len() == 1
    ));
}

#[test]
fn test_clean_report_into_result_is_ok() {
    let report: ValidationReport = ValidationReport::from_errors(Vec::new());
    assert!(report.into_result().is_ok());
}
