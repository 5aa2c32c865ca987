// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed collection helpers over the raw store.

use crate::error::PersistenceError;
use crate::store::Store;
use rsc_club::Submission;
use rsc_club_domain::ActivityRecord;
use tracing::warn;

/// Loads the activity records stored under a key.
///
/// Stored values that fail structural or rule validation are skipped and
/// logged; one corrupt entry never poisons the rest of the collection.
#[must_use]
pub fn load_activities(store: &Store, key: &str) -> Vec<ActivityRecord> {
    store
        .load_collection(key)
        .iter()
        .filter_map(|value| match ActivityRecord::from_stored(value) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key, error = %err, "skipping invalid stored activity");
                None
            }
        })
        .collect()
}

/// Saves a whole activity collection under a key.
///
/// # Errors
///
/// Returns a `PersistenceError` if the collection cannot be encoded or
/// written.
pub fn save_activities(
    store: &mut Store,
    key: &str,
    activities: &[ActivityRecord],
) -> Result<(), PersistenceError> {
    let records: Vec<serde_json::Value> = activities
        .iter()
        .map(|activity| serde_json::to_value(activity.to_stored()))
        .collect::<Result<_, _>>()?;
    store.save_collection(key, &records)
}

/// Appends a workflow submission to the collection under a key.
///
/// # Errors
///
/// Returns a `PersistenceError` if the collection cannot be encoded or
/// written.
pub fn append_submission(
    store: &mut Store,
    key: &str,
    submission: &Submission,
) -> Result<(), PersistenceError> {
    store.append(key, submission.to_stored())
}
