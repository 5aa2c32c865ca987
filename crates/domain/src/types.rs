// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Scheduling priority for a club activity.
///
/// Priorities are fixed domain constants used for ordering the activity
/// board; they carry no pricing or capacity meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Casual activities with no scheduling pressure.
    Low,
    /// The default for newly created activities.
    #[default]
    Medium,
    /// Activities that must be scheduled first.
    High,
}

impl Priority {
    /// Returns the string representation of this priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses a priority from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPriority` if the label is not one of
    /// `low`, `medium`, or `high`.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(DomainError::InvalidPriority(String::from(
                "Priority must be one of: low, medium, high",
            ))),
        }
    }

    /// Returns the numeric weight used for sort ordering.
    ///
    /// High sorts before medium, medium before low. Labels that fail to
    /// parse are treated as medium weight by callers.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable scheduling status derived from an activity record.
///
/// Status is never stored; it is recomputed from the completion flag and
/// the scheduled date relative to the current calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// The event has taken place.
    Completed,
    /// The event date has passed without completion.
    Overdue,
    /// The event is scheduled for the current calendar day.
    Today,
    /// The event is scheduled for the next calendar day.
    Tomorrow,
    /// The event is scheduled more than one day out.
    Upcoming,
    /// No event date has been set.
    Scheduled,
}

impl ActivityStatus {
    /// Returns the string representation of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::Upcoming => "upcoming",
            Self::Scheduled => "scheduled",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatus` if the label is not recognized.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label {
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "upcoming" => Ok(Self::Upcoming),
            "scheduled" => Ok(Self::Scheduled),
            _ => Err(DomainError::InvalidStatus(label.to_string())),
        }
    }
}

impl std::fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pricing tier for facility bookings.
///
/// Patron types are fixed domain constants; every priced item carries a
/// rate for each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatronType {
    /// A club member with an active membership.
    Member,
    /// A visitor without a membership.
    Guest,
}

impl PatronType {
    /// Returns the string representation of this patron type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Guest => "guest",
        }
    }

    /// Returns the capitalized label used in booking summaries.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Guest => "Guest",
        }
    }

    /// Parses a patron type from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPatronType` if the label is not
    /// `member` or `guest`.
    pub fn parse(label: &str) -> Result<Self, DomainError> {
        match label {
            "member" => Ok(Self::Member),
            "guest" => Ok(Self::Guest),
            _ => Err(DomainError::InvalidPatronType(label.to_string())),
        }
    }
}

impl FromStr for PatronType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PatronType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hourly and daily rate for one item and patron type, in whole currency
/// units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Cost per hour.
    pub hourly: u32,
    /// Cost for a full-day booking.
    pub daily: u32,
}

impl Rate {
    /// Creates a new `Rate`.
    ///
    /// # Arguments
    ///
    /// * `hourly` - Cost per hour
    /// * `daily` - Cost for a full-day booking
    #[must_use]
    pub const fn new(hourly: u32, daily: u32) -> Self {
        Self { hourly, daily }
    }
}
