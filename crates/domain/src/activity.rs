// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The activity record: a schedulable club activity or event.
//!
//! Records model things like "Football Practice" or "Basketball
//! Tournament". A record is either created fresh (identifier and creation
//! timestamp derived) or rebuilt from its stored shape, in which case the
//! stored timestamps are preserved.
//!
//! ## Invariants
//!
//! - `id` and `description` are non-empty after successful validation
//! - `completed_at` is present if and only if `completed` is true
//! - `created_at` is set once at construction and never mutated

use crate::error::DomainError;
use crate::ids;
use crate::types::{ActivityStatus, Priority};
use crate::validation::{ValidationReport, parse_event_date, validate_stored_activity};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

fn default_priority_label() -> String {
    Priority::Medium.as_str().to_string()
}

/// The flat, JSON-compatible stored shape of an activity record.
///
/// This is the serialization boundary: dates are ISO-8601 strings, an
/// absent event date stays absent, and field values are untyped enough to
/// let validation report every problem rather than failing on the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredActivity {
    /// Opaque unique identifier.
    #[serde(default)]
    pub id: String,
    /// Activity name.
    #[serde(default)]
    pub description: String,
    /// Priority label (`low`, `medium`, `high`).
    #[serde(default = "default_priority_label")]
    pub priority: String,
    /// Event date as an ISO-8601 date string; absent when unscheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<String>,
    /// Sport category label; may be empty.
    #[serde(default)]
    pub category: String,
    /// Whether the event has taken place.
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp, ISO-8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Completion timestamp, ISO-8601; absent unless completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// A typed partial update for [`ActivityRecord::update`].
///
/// Every field is optional; `scheduled_date` is doubly optional so a
/// patch can distinguish "leave unchanged" from "clear the date".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    /// New activity name.
    pub description: Option<String>,
    /// New priority level.
    pub priority: Option<Priority>,
    /// New event date, or `Some(None)` to clear it.
    pub scheduled_date: Option<Option<NaiveDate>>,
    /// New sport category.
    pub category: Option<String>,
    /// New completion flag.
    pub completed: Option<bool>,
}

/// A validated, schedulable club activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Opaque unique identifier, immutable after construction.
    id: String,
    /// Activity name.
    description: String,
    /// Scheduling priority.
    priority: Priority,
    /// Event date; `None` means unscheduled.
    scheduled_date: Option<NaiveDate>,
    /// Sport category label; may be empty.
    category: String,
    /// Whether the event has taken place.
    completed: bool,
    /// Set once at construction.
    created_at: DateTime<Utc>,
    /// Present if and only if `completed` is true.
    completed_at: Option<DateTime<Utc>>,
}

impl ActivityRecord {
    /// Creates a new activity record.
    ///
    /// When `id` is `None` a fresh identifier is generated. The creation
    /// timestamp is derived now; the completion timestamp is set only when
    /// the record starts out completed.
    ///
    /// # Arguments
    ///
    /// * `id` - Existing identifier, or `None` to generate one
    /// * `description` - Activity name
    /// * `priority` - Scheduling priority
    /// * `scheduled_date` - Event date, if scheduled
    /// * `category` - Sport category label (may be empty)
    /// * `completed` - Whether the event has already taken place
    #[must_use]
    pub fn new(
        id: Option<String>,
        description: &str,
        priority: Priority,
        scheduled_date: Option<NaiveDate>,
        category: &str,
        completed: bool,
    ) -> Self {
        let now: DateTime<Utc> = Utc::now();
        Self {
            id: id.unwrap_or_else(ids::activity_id),
            description: description.to_string(),
            priority,
            scheduled_date,
            category: category.to_string(),
            completed,
            created_at: now,
            completed_at: completed.then_some(now),
        }
    }

    /// Rebuilds a record from an untyped stored value.
    ///
    /// The value must be a JSON object carrying at least `id` and
    /// `description`; anything else cannot be interpreted as a candidate
    /// record. The populated record is then re-validated against every
    /// field rule. Stored timestamps are preserved, not regenerated, and
    /// the completion-timestamp invariant is enforced on the way in: a
    /// record that is not completed drops any stale completion timestamp,
    /// and a completed record without one is stamped now.
    ///
    /// # Errors
    ///
    /// * `DomainError::MalformedRecord` - the value is not an object or a
    ///   field has an uninterpretable type
    /// * `DomainError::MissingRequiredField` - `id` or `description` is
    ///   absent or empty
    /// * `DomainError::ValidationFailed` - a field rule was violated;
    ///   carries the complete ordered violation list
    /// * `DomainError::DateParse` - a stored timestamp is unparseable
    pub fn from_stored(value: &serde_json::Value) -> Result<Self, DomainError> {
        let object = value
            .as_object()
            .ok_or_else(|| DomainError::MalformedRecord(String::from("must be an object")))?;

        if !object.get("id").is_some_and(is_non_empty_string) {
            return Err(DomainError::MissingRequiredField("id"));
        }
        if !object.get("description").is_some_and(is_non_empty_string) {
            return Err(DomainError::MissingRequiredField("description"));
        }

        let stored: StoredActivity = serde_json::from_value(value.clone())
            .map_err(|err| DomainError::MalformedRecord(err.to_string()))?;

        Self::from_stored_shape(stored)
    }

    /// Rebuilds a record from its typed stored shape, re-validating it.
    ///
    /// # Errors
    ///
    /// Same as [`ActivityRecord::from_stored`], minus the structural
    /// object checks.
    pub fn from_stored_shape(stored: StoredActivity) -> Result<Self, DomainError> {
        validate_stored_activity(&stored).into_result()?;

        // Every rule passed, so the typed parses below cannot fail for
        // rule reasons; only stored timestamps can still be bad.
        let priority: Priority = Priority::parse(&stored.priority)?;
        let scheduled_date: Option<NaiveDate> = match stored.scheduled_date.as_deref() {
            Some(raw) => Some(parse_event_date(raw)?),
            None => None,
        };

        let created_at: DateTime<Utc> = match stored.created_at.as_deref() {
            Some(raw) => parse_timestamp(raw)?,
            None => Utc::now(),
        };

        let completed_at: Option<DateTime<Utc>> = if stored.completed {
            match stored.completed_at.as_deref() {
                Some(raw) => Some(parse_timestamp(raw)?),
                None => Some(Utc::now()),
            }
        } else {
            None
        };

        Ok(Self {
            id: stored.id,
            description: stored.description,
            priority,
            scheduled_date,
            category: stored.category,
            completed: stored.completed,
            created_at,
            completed_at,
        })
    }

    /// Converts the record to its flat stored shape.
    ///
    /// Timestamps are rendered as ISO-8601 strings with millisecond
    /// precision; an absent event date stays absent rather than becoming a
    /// placeholder.
    #[must_use]
    pub fn to_stored(&self) -> StoredActivity {
        StoredActivity {
            id: self.id.clone(),
            description: self.description.clone(),
            priority: self.priority.as_str().to_string(),
            scheduled_date: self
                .scheduled_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            category: self.category.clone(),
            completed: self.completed,
            created_at: Some(format_timestamp(self.created_at)),
            completed_at: self.completed_at.map(format_timestamp),
        }
    }

    /// Validates the record against every field rule.
    ///
    /// All violated rules are collected in order; nothing is thrown. A
    /// freshly constructed record with a well-formed description always
    /// validates clean, since the remaining rules are enforced by the
    /// field types.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate_stored_activity(&self.to_stored())
    }

    /// Marks the activity as completed, stamping the completion time.
    ///
    /// Idempotent: re-marking a completed record refreshes nothing.
    pub fn mark_completed(&mut self) {
        if !self.completed {
            self.completed = true;
            self.completed_at = Some(Utc::now());
        }
    }

    /// Marks the activity as not completed, clearing the completion time.
    ///
    /// Idempotent.
    pub fn mark_incomplete(&mut self) {
        self.completed = false;
        self.completed_at = None;
    }

    /// Checks whether the event date has passed without completion.
    ///
    /// Time of day is ignored on both sides: only whole calendar days are
    /// compared, and the event day itself is not overdue.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Utc::now().date_naive())
    }

    /// [`ActivityRecord::is_overdue`] against an explicit calendar day.
    #[must_use]
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        self.scheduled_date.is_some_and(|date| date < today)
    }

    /// Derives the scheduling status for the current calendar day.
    #[must_use]
    pub fn status(&self) -> ActivityStatus {
        self.status_on(Utc::now().date_naive())
    }

    /// Derives the scheduling status for an explicit calendar day.
    ///
    /// Precedence: completed, then overdue, then the whole-day difference
    /// between the event date and `today` (0 today, 1 tomorrow, more
    /// upcoming); records without an event date fall back to scheduled.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> ActivityStatus {
        if self.completed {
            return ActivityStatus::Completed;
        }
        if self.is_overdue_on(today) {
            return ActivityStatus::Overdue;
        }
        if let Some(date) = self.scheduled_date {
            let days_out: i64 = (date - today).num_days();
            if days_out == 0 {
                return ActivityStatus::Today;
            }
            if days_out == 1 {
                return ActivityStatus::Tomorrow;
            }
            if days_out > 1 {
                return ActivityStatus::Upcoming;
            }
        }
        ActivityStatus::Scheduled
    }

    /// Returns the numeric priority weight for sort ordering.
    #[must_use]
    pub const fn priority_weight(&self) -> u8 {
        self.priority.weight()
    }

    /// Produces a new validated record with the patch applied.
    ///
    /// The original record is untouched. The identifier and creation
    /// timestamp carry over; flipping the completion flag adjusts the
    /// completion timestamp to keep the invariant.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ValidationFailed` with the complete ordered
    /// violation list if the merged record is invalid.
    pub fn update(&self, patch: ActivityPatch) -> Result<Self, DomainError> {
        let mut merged: Self = self.clone();

        if let Some(description) = patch.description {
            merged.description = description;
        }
        if let Some(priority) = patch.priority {
            merged.priority = priority;
        }
        if let Some(scheduled_date) = patch.scheduled_date {
            merged.scheduled_date = scheduled_date;
        }
        if let Some(category) = patch.category {
            merged.category = category;
        }
        if let Some(completed) = patch.completed {
            if completed {
                merged.mark_completed();
            } else {
                merged.mark_incomplete();
            }
        }

        merged.validate().into_result()?;
        Ok(merged)
    }

    /// Returns the opaque unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the activity name.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the event date, if scheduled.
    #[must_use]
    pub const fn scheduled_date(&self) -> Option<NaiveDate> {
        self.scheduled_date
    }

    /// Returns the sport category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns whether the event has taken place.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present iff completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

fn is_non_empty_string(value: &serde_json::Value) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty())
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| DomainError::DateParse {
            date_string: raw.to_string(),
            error: err.to_string(),
        })
}
