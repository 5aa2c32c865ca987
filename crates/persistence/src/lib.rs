// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the RSC Club System.
//!
//! This crate provides the key-value collection store the workflows save
//! into. Each collection is a JSON array document under a well-known key,
//! read-modify-written whole on every save; concurrent writers are out of
//! scope and the last write wins.
//!
//! ## Backend Support
//!
//! - **Memory** (default for tests) — fast, deterministic, ephemeral
//! - **File** — one JSON document per key under a store directory; the
//!   local-storage equivalent for desktop use
//!
//! Backend dispatch happens exclusively in the `Store` adapter; backends
//! themselves only move opaque strings.
//!
//! ## Failure Philosophy
//!
//! Loads never fail: absent, corrupt, or mis-shaped documents degrade to
//! an empty collection with a logged warning. Saves can fail, but the
//! error is soft: callers report it and let the user-visible flow
//! complete with the in-memory result.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod keys;
mod records;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use backend::{FileBackend, MemoryBackend, StoreBackend};
pub use error::PersistenceError;
pub use keys::{
    ACTIVITY_REGISTRATIONS_KEY, BOOKINGS_KEY, MEMBERSHIPS_KEY, form_submissions_key,
};
pub use records::{append_submission, load_activities, save_activities};
pub use store::Store;
