// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence layer: narrow key-value storage behind the session store.
//!
//! The store only ever needs `get` and `set` on a named slot, mirroring
//! the browser storage the widget originally persisted to. Backends:
//! - [`MemoryStorage`] for tests and offline use
//! - [`JsonFileStorage`] for one JSON file per slot on disk

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Storage slot names as constants.
pub mod slots {
    pub const WORKOUTS: &str = "workouts";
}

/// Key-value storage consumed by the session store.
///
/// Backend failures surface as `anyhow::Error`; the store treats a failed
/// read as absent data and logs a failed write without retrying.
pub trait Storage {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}
