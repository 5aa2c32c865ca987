// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the collection store and its backends.

use crate::{BOOKINGS_KEY, MEMBERSHIPS_KEY, Store, form_submissions_key};

use super::helpers::unique_store_dir;

#[test]
fn test_absent_collection_loads_empty() {
    let store: Store = Store::in_memory();

    assert!(store.load_collection(MEMBERSHIPS_KEY).is_empty());
}

#[test]
fn test_append_then_load_round_trip() {
    let mut store: Store = Store::in_memory();
    let booking: serde_json::Value = serde_json::json!({
        "sportId": "basketball",
        "bookingId": "BK600000A1B2",
        "cost": 38
    });

    store.append(BOOKINGS_KEY, booking.clone()).unwrap();

    let loaded: Vec<serde_json::Value> = store.load_collection(BOOKINGS_KEY);
    assert_eq!(loaded, vec![booking]);
}

#[test]
fn test_append_preserves_existing_records() {
    let mut store: Store = Store::in_memory();

    store
        .append(BOOKINGS_KEY, serde_json::json!({"bookingId": "BK1"}))
        .unwrap();
    store
        .append(BOOKINGS_KEY, serde_json::json!({"bookingId": "BK2"}))
        .unwrap();

    let loaded: Vec<serde_json::Value> = store.load_collection(BOOKINGS_KEY);
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0]["bookingId"], "BK1");
    assert_eq!(loaded[1]["bookingId"], "BK2");
}

#[test]
fn test_save_collection_replaces_whole_document() {
    let mut store: Store = Store::in_memory();
    store
        .append(MEMBERSHIPS_KEY, serde_json::json!({"membershipId": "RSC1"}))
        .unwrap();

    store
        .save_collection(MEMBERSHIPS_KEY, &[serde_json::json!({"membershipId": "RSC2"})])
        .unwrap();

    let loaded: Vec<serde_json::Value> = store.load_collection(MEMBERSHIPS_KEY);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0]["membershipId"], "RSC2");
}

#[test]
fn test_corrupt_document_loads_as_empty_collection() {
    let dir = unique_store_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{BOOKINGS_KEY}.json")), "{not json").unwrap();

    let store: Store = Store::on_disk(&dir);
    assert!(store.load_collection(BOOKINGS_KEY).is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_non_array_document_loads_as_empty_collection() {
    // A perfectly valid JSON object where an array belongs
    let key: String = form_submissions_key("feedback");
    let dir = unique_store_dir();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{key}.json")), "{\"type\":\"feedback\"}").unwrap();

    let store: Store = Store::on_disk(&dir);
    assert!(store.load_collection(&key).is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_file_backend_persists_across_store_instances() {
    let dir = unique_store_dir();

    let mut store: Store = Store::on_disk(&dir);
    store
        .append(BOOKINGS_KEY, serde_json::json!({"bookingId": "BK600000A1B2"}))
        .unwrap();

    let reopened: Store = Store::on_disk(&dir);
    let loaded: Vec<serde_json::Value> = reopened.load_collection(BOOKINGS_KEY);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0]["bookingId"], "BK600000A1B2");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_last_write_wins_between_stores() {
    let dir = unique_store_dir();

    let mut first: Store = Store::on_disk(&dir);
    let mut second: Store = Store::on_disk(&dir);

    first
        .save_collection(BOOKINGS_KEY, &[serde_json::json!({"bookingId": "BK1"})])
        .unwrap();
    second
        .save_collection(BOOKINGS_KEY, &[serde_json::json!({"bookingId": "BK2"})])
        .unwrap();

    let loaded: Vec<serde_json::Value> = Store::on_disk(&dir).load_collection(BOOKINGS_KEY);
    assert_eq!(loaded[0]["bookingId"], "BK2");

    std::fs::remove_dir_all(&dir).unwrap();
}
