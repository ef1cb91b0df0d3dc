// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Session store: validation gatekeeper, ordered log, persistence bridge.

pub mod session;

pub use session::{SessionStore, StoreSnapshot, SNAPSHOT_VERSION};
