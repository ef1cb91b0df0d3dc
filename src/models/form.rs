// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw form input, split by workout kind.

/// Raw numeric form fields as the UI hands them over.
///
/// The form layer parses the text inputs with a plain `parse()` and maps
/// failures to NaN, so a single finite-number check in the store covers
/// both "not a number" and "field left empty".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutForm {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}
