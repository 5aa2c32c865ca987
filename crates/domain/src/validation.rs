// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules for activity records.
//!
//! Each rule is a pure function returning `Result<(), DomainError>`.
//! `validate_stored_activity` evaluates every rule independently and
//! collects all violations in order; rules are never short-circuited and
//! validation failures are never raised as panics. Callers that need a
//! hard failure convert the report with [`ValidationReport::into_result`].

use crate::activity::StoredActivity;
use crate::error::DomainError;
use chrono::NaiveDate;

/// Maximum length of an activity name, after trimming.
pub const DESCRIPTION_MAX: usize = 100;

/// Minimum length of an activity name, after trimming.
pub const DESCRIPTION_MIN: usize = 3;

/// Maximum length of a sport category label.
pub const CATEGORY_MAX: usize = 50;

/// The outcome of validating a record against every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// True when no rule was violated.
    pub is_valid: bool,
    /// Every violation message, in rule evaluation order.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Builds a report from the collected violation messages.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Converts the report into a hard result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationFailed` carrying the full ordered
    /// error list when any rule was violated.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(DomainError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

/// Validates an activity name.
///
/// The name is required, must be non-empty after trimming, and must be
/// between [`DESCRIPTION_MIN`] and [`DESCRIPTION_MAX`] characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidDescription` describing the first
/// applicable violation.
pub fn validate_description(description: &str) -> Result<(), DomainError> {
    if description.is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Activity name is required",
        )));
    }

    let trimmed: &str = description.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDescription(String::from(
            "Activity name cannot be empty",
        )));
    }

    let length: usize = trimmed.chars().count();
    if length < DESCRIPTION_MIN {
        return Err(DomainError::InvalidDescription(String::from(
            "Activity name must be at least 3 characters long",
        )));
    }
    if length > DESCRIPTION_MAX {
        return Err(DomainError::InvalidDescription(String::from(
            "Activity name must not exceed 100 characters",
        )));
    }

    Ok(())
}

/// Validates a priority label against the fixed set of levels.
///
/// # Errors
///
/// Returns `DomainError::InvalidPriority` if the label is not `low`,
/// `medium`, or `high`.
pub fn validate_priority_label(label: &str) -> Result<(), DomainError> {
    crate::types::Priority::parse(label).map(|_| ())
}

/// Validates a sport category label.
///
/// Categories are optional free text; when present they must not exceed
/// [`CATEGORY_MAX`] characters after trimming.
///
/// # Errors
///
/// Returns `DomainError::InvalidCategory` if the category is too long.
pub fn validate_category(category: &str) -> Result<(), DomainError> {
    if !category.is_empty() && category.trim().chars().count() > CATEGORY_MAX {
        return Err(DomainError::InvalidCategory(String::from(
            "Sport category must not exceed 50 characters",
        )));
    }
    Ok(())
}

/// Validates that an event date string parses to a calendar date.
///
/// Only parseability is checked; past dates are allowed.
///
/// # Errors
///
/// Returns `DomainError::InvalidEventDate` if the string is not a valid
/// date.
pub fn validate_event_date(raw: &str) -> Result<(), DomainError> {
    parse_event_date(raw)
        .map(|_| ())
        .map_err(|_| DomainError::InvalidEventDate(String::from("Event date must be a valid date")))
}

/// Validates an activity identifier.
///
/// # Errors
///
/// Returns `DomainError::InvalidActivityId` if the identifier is empty.
pub fn validate_activity_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::InvalidActivityId(String::from(
            "Activity ID is required",
        )));
    }
    Ok(())
}

/// Parses an event date from its stored string form.
///
/// Accepts a plain calendar date (`2026-02-14`) or a full ISO-8601
/// timestamp, in which case the calendar day is taken.
///
/// # Errors
///
/// Returns `DomainError::DateParse` if the string matches neither form.
pub fn parse_event_date(raw: &str) -> Result<NaiveDate, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(datetime) => Ok(datetime.date_naive()),
        Err(err) => Err(DomainError::DateParse {
            date_string: raw.to_string(),
            error: err.to_string(),
        }),
    }
}

/// Validates a stored activity against every field rule.
///
/// All rules are evaluated; every violation is collected in order rather
/// than stopping at the first. The order matches the rule listing:
/// description, priority, category, event date, identifier.
///
/// # Arguments
///
/// * `stored` - The stored activity shape to validate
#[must_use]
pub fn validate_stored_activity(stored: &StoredActivity) -> ValidationReport {
    let mut errors: Vec<String> = Vec::new();

    if let Err(err) = validate_description(&stored.description) {
        errors.push(err.to_string());
    }

    if let Err(err) = validate_priority_label(&stored.priority) {
        errors.push(err.to_string());
    }

    if let Err(err) = validate_category(&stored.category) {
        errors.push(err.to_string());
    }

    if let Some(raw) = stored.scheduled_date.as_deref()
        && let Err(err) = validate_event_date(raw)
    {
        errors.push(err.to_string());
    }

    if let Err(err) = validate_activity_id(&stored.id) {
        errors.push(err.to_string());
    }

    ValidationReport::from_errors(errors)
}
