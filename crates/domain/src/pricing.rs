// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Facility pricing lookups and cost calculation.
//!
//! Costs are pure, deterministic functions of the pricing table: hourly
//! rate times duration, rounded to the nearest whole currency unit. An
//! unknown item or patron combination prices at zero — callers treat zero
//! as "unpriced", not as an error.

use crate::types::{PatronType, Rate};

/// Per-patron pricing for a single bookable item.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PriceEntry {
    item_id: String,
    member: Rate,
    guest: Rate,
}

/// A mapping from bookable item to per-patron rates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingTable {
    entries: Vec<PriceEntry>,
}

impl PricingTable {
    /// Creates an empty pricing table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds or replaces the rates for an item.
    ///
    /// # Arguments
    ///
    /// * `item_id` - The bookable item identifier
    /// * `member` - Member-tier rate
    /// * `guest` - Guest-tier rate
    pub fn set_rates(&mut self, item_id: &str, member: Rate, guest: Rate) {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.item_id == item_id)
        {
            entry.member = member;
            entry.guest = guest;
        } else {
            self.entries.push(PriceEntry {
                item_id: item_id.to_string(),
                member,
                guest,
            });
        }
    }

    /// Looks up the rate for an item and patron type.
    #[must_use]
    pub fn rate(&self, item_id: &str, patron: PatronType) -> Option<Rate> {
        self.entries
            .iter()
            .find(|entry| entry.item_id == item_id)
            .map(|entry| match patron {
                PatronType::Member => entry.member,
                PatronType::Guest => entry.guest,
            })
    }

    /// Looks up the hourly rate for an item and patron type.
    #[must_use]
    pub fn hourly_rate(&self, item_id: &str, patron: PatronType) -> Option<u32> {
        self.rate(item_id, patron).map(|rate| rate.hourly)
    }

    /// Calculates the cost of a booking.
    ///
    /// Cost is the hourly rate times the duration in hours, rounded half
    /// away from zero to the nearest whole currency unit. Unknown pricing
    /// combinations and non-positive durations cost zero.
    ///
    /// # Arguments
    ///
    /// * `item_id` - The bookable item identifier
    /// * `duration_hours` - Booking length in hours (fractions allowed)
    /// * `patron` - The patron's pricing tier
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn cost(&self, item_id: &str, duration_hours: f64, patron: PatronType) -> u32 {
        let Some(hourly) = self.hourly_rate(item_id, patron) else {
            return 0;
        };

        let raw: f64 = f64::from(hourly) * duration_hours;
        if raw.is_finite() && raw > 0.0 {
            raw.round() as u32
        } else {
            0
        }
    }

    /// The club's standard pricing, derived from the sport catalog.
    #[must_use]
    pub fn club_default() -> Self {
        let mut table: Self = Self::new();
        for sport in crate::catalog::sports() {
            table.set_rates(&sport.id, sport.member, sport.guest);
        }
        table
    }
}
