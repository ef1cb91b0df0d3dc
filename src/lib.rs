// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: core model and session store for a map-based workout log
//!
//! This crate provides the logic behind the workout widget: the workout
//! model (running/cycling activities with a derived pace or speed), the
//! session store that validates form input and owns the ordered log, and
//! the key-value storage bridge that persists the log across reloads.
//!
//! Map rendering, form wiring, and the geolocation prompt live in the UI
//! layer and talk to this crate through plain function calls.

pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod time_utils;
