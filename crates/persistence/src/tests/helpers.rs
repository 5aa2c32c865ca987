// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for persistence tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sequential counter for unique on-disk test store directories.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions.
static DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Returns a fresh, unique directory path for a file-backed test store.
pub fn unique_store_dir() -> PathBuf {
    let id: u64 = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("rsc-club-store-test-{}-{id}", std::process::id()))
}

/// A stored activity value that passes validation.
pub fn valid_activity_value() -> serde_json::Value {
    serde_json::json!({
        "id": "activity_1735689600000_m4n8p2q6r",
        "description": "Summer Football League",
        "priority": "high",
        "scheduledDate": "2026-06-10",
        "category": "football",
        "completed": false,
        "createdAt": "2026-01-05T08:00:00.000Z"
    })
}

/// A stored activity value that fails rule validation.
pub fn invalid_activity_value() -> serde_json::Value {
    serde_json::json!({
        "id": "activity_1735689600000_s5t9v3w7x",
        "description": "ab",
        "priority": "urgent"
    })
}
