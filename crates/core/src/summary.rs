// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking summary derivation.
//!
//! The summary is a non-authoritative display of the current booking
//! fields and their computed cost. It is derived purely from the field
//! map and the pricing table, with no side effects, and is recomputed by
//! the caller on every field change. Until every pricing-relevant field
//! is populated there is no summary at all.

use crate::state::FieldMap;
use chrono::NaiveDate;
use rsc_club_domain::{PatronType, PricingTable, parse_event_date, sport_details};

/// The field names a booking summary is derived from.
const SUMMARY_FIELDS: [&str; 4] = ["date", "time", "duration", "type"];

/// A derived, display-ready booking summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    /// The booked facility's display name.
    pub sport: String,
    /// Long-form date and 12-hour time (e.g. "Monday, January 15, 2026
    /// at 2:00 PM").
    pub date_time: String,
    /// Duration with its unit (e.g. "1.5 hours").
    pub duration: String,
    /// Capitalized patron type (e.g. "Member").
    pub patron: String,
    /// The computed cost in whole currency units; zero when unpriced.
    pub cost: u32,
    /// The formatted total (e.g. "$30").
    pub total: String,
}

impl BookingSummary {
    /// Derives a summary from the entered booking fields.
    ///
    /// Returns `None` until the date, time slot, duration, and patron
    /// type are all populated and interpretable. An unknown facility
    /// still summarizes, priced at zero.
    ///
    /// # Arguments
    ///
    /// * `fields` - The entered booking fields
    /// * `table` - The pricing table to cost against
    #[must_use]
    pub fn derive(fields: &FieldMap, table: &PricingTable) -> Option<Self> {
        if !summary_ready(fields) {
            return None;
        }

        let date: NaiveDate = parse_event_date(fields.value("date")?.trim()).ok()?;
        let time: String = format_time_12h(fields.value("time")?.trim())?;
        let duration_raw: &str = fields.value("duration")?.trim();
        let hours: f64 = duration_raw.parse().ok()?;
        let patron: PatronType = PatronType::parse(fields.value("type")?.trim()).ok()?;

        let sport_id: &str = fields.value("sportId").unwrap_or("");
        let sport: String =
            sport_details(sport_id).map_or_else(|| sport_id.to_string(), |info| info.name.clone());

        let cost: u32 = table.cost(sport_id, hours, patron);

        Some(Self {
            sport,
            date_time: format!("{} at {}", format_long_date(date), time),
            duration: duration_label(duration_raw, hours),
            patron: patron.label().to_string(),
            cost,
            total: format!("${cost}"),
        })
    }
}

/// Returns true when every pricing-relevant field is populated.
///
/// The summary fields are the preferred date, time slot, duration, and
/// patron type.
#[must_use]
pub fn summary_ready(fields: &FieldMap) -> bool {
    SUMMARY_FIELDS
        .iter()
        .all(|name| fields.value(name).is_some_and(|value| !value.trim().is_empty()))
}

/// Computes the booking cost from the entered fields.
///
/// Zero when the fields are incomplete, uninterpretable, or priced
/// against an unknown combination.
///
/// # Arguments
///
/// * `fields` - The entered booking fields
/// * `table` - The pricing table to cost against
#[must_use]
pub fn booking_cost(fields: &FieldMap, table: &PricingTable) -> u32 {
    let Some(duration_raw) = fields.value("duration") else {
        return 0;
    };
    let Ok(hours) = duration_raw.trim().parse::<f64>() else {
        return 0;
    };
    let Some(patron) = fields
        .value("type")
        .and_then(|raw| PatronType::parse(raw.trim()).ok())
    else {
        return 0;
    };
    table.cost(fields.value("sportId").unwrap_or(""), hours, patron)
}

/// Formats a date in long form: "Monday, January 15, 2026".
#[must_use]
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Formats a 24-hour `HH:MM` time slot as 12-hour with AM/PM.
///
/// Returns `None` if the slot does not parse.
#[must_use]
pub fn format_time_12h(slot: &str) -> Option<String> {
    let (hours_raw, minutes_raw) = slot.split_once(':')?;
    let hours: u32 = hours_raw.parse().ok()?;
    let minutes: u32 = minutes_raw.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    let meridiem: &str = if hours >= 12 { "PM" } else { "AM" };
    let display_hour: u32 = match hours % 12 {
        0 => 12,
        other => other,
    };
    Some(format!("{display_hour}:{minutes_raw} {meridiem}"))
}

/// Renders a duration with its unit, pluralized above one hour.
fn duration_label(raw: &str, hours: f64) -> String {
    if hours > 1.0 {
        format!("{raw} hours")
    } else {
        format!("{raw} hour")
    }
}
