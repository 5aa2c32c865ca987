// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Activity name is missing, empty, or outside the allowed length.
    InvalidDescription(String),
    /// Priority label is not one of the recognized levels.
    InvalidPriority(String),
    /// Sport category exceeds the allowed length.
    InvalidCategory(String),
    /// Event date could not be interpreted as a calendar date.
    InvalidEventDate(String),
    /// Activity identifier is missing or empty.
    InvalidActivityId(String),
    /// Patron type label is not recognized.
    InvalidPatronType(String),
    /// Activity status label is not recognized.
    InvalidStatus(String),
    /// One or more validation rules were violated.
    ///
    /// Carries every violated rule in evaluation order, never just the first.
    ValidationFailed {
        /// The complete ordered list of violation messages.
        errors: Vec<String>,
    },
    /// Stored data could not be interpreted as a candidate record at all.
    MalformedRecord(String),
    /// Stored data is missing a mandatory identifying field.
    MissingRequiredField(&'static str),
    /// Failed to parse a date or timestamp from a stored string.
    DateParse {
        /// The unparseable input.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDescription(msg) => write!(f, "{msg}"),
            Self::InvalidPriority(msg) => write!(f, "{msg}"),
            Self::InvalidCategory(msg) => write!(f, "{msg}"),
            Self::InvalidEventDate(msg) => write!(f, "{msg}"),
            Self::InvalidActivityId(msg) => write!(f, "{msg}"),
            Self::InvalidPatronType(label) => write!(f, "Unknown patron type: {label}"),
            Self::InvalidStatus(label) => write!(f, "Unknown activity status: {label}"),
            Self::ValidationFailed { errors } => {
                write!(f, "Invalid activity data: {}", errors.join(", "))
            }
            Self::MalformedRecord(reason) => write!(f, "Invalid data: {reason}"),
            Self::MissingRequiredField(field) => {
                write!(f, "Invalid data: missing required field \"{field}\"")
            }
            Self::DateParse { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
