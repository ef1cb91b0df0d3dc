// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Session store for the workout log.
//!
//! Handles the core workflow:
//! 1. Validate the raw form fields for the selected kind
//! 2. Construct the workout record at the clicked coordinates
//! 3. Append it to the ordered log
//! 4. Re-serialize the whole log to the storage collaborator
//!
//! Restore is the mirror image: read the slot once at startup and
//! re-hydrate the records, falling back to an empty log on anything
//! absent or malformed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::models::{Coordinates, Workout, WorkoutForm};
use crate::storage::Storage;

/// Current snapshot schema version. Bump when the wire layout changes;
/// snapshots with an unknown version restore as empty.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable form of the whole workout log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub version: u32,
    pub workouts: Vec<Workout>,
}

/// Owner of the ordered workout log for the current session.
///
/// The log only ever grows: no deletion, no reordering. Each successful
/// append re-serializes the full log to the storage slot, best effort.
pub struct SessionStore<S: Storage> {
    storage: S,
    storage_key: String,
    workouts: Vec<Workout>,
}

impl<S: Storage> SessionStore<S> {
    /// Create an empty store without touching storage.
    pub fn new(storage: S, storage_key: impl Into<String>) -> Self {
        Self {
            storage,
            storage_key: storage_key.into(),
            workouts: Vec::new(),
        }
    }

    /// Create a store and restore any previously persisted log.
    ///
    /// Absent or malformed data leaves the log empty; nothing is surfaced
    /// to the user beyond a log line.
    pub fn open(storage: S, storage_key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, storage_key);
        store.restore();
        store
    }

    /// Validate raw form input and append a new workout at the clicked
    /// coordinates.
    ///
    /// The coordinates are a required parameter: a form submit without a
    /// prior map click has nothing to pass here, so the "submit before
    /// click" fault of the original widget cannot occur.
    ///
    /// On success the full log is re-serialized to storage (best effort,
    /// no retry) and the new record is returned for rendering and marker
    /// placement. On validation failure nothing is appended and nothing
    /// is written.
    pub fn log_workout(
        &mut self,
        form: WorkoutForm,
        coordinates: Coordinates,
    ) -> Result<Workout, ValidationError> {
        validate_form(&form)?;

        let workout = match form {
            WorkoutForm::Running {
                distance,
                duration,
                cadence,
            } => Workout::running(coordinates, distance, duration, cadence),
            WorkoutForm::Cycling {
                distance,
                duration,
                elevation_gain,
            } => Workout::cycling(coordinates, distance, duration, elevation_gain),
        };

        tracing::info!(
            id = %workout.id,
            kind = %workout.kind(),
            distance_km = workout.distance_km,
            "Workout logged"
        );

        self.workouts.push(workout.clone());
        self.persist();
        Ok(workout)
    }

    /// The logged workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Find a workout by id. Linear scan; `None` for an unknown id.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Record one activation of the given workout (e.g. a list click that
    /// re-centers the map). Returns the updated record, or `None` for an
    /// unknown id.
    ///
    /// The counter is only written to storage with the next append.
    pub fn record_interaction(&mut self, id: Uuid) -> Option<&Workout> {
        let workout = self.workouts.iter_mut().find(|w| w.id == id)?;
        workout.record_interaction();
        Some(&*workout)
    }

    /// The exact ordered sequence of all current records, for persistence.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            version: SNAPSHOT_VERSION,
            workouts: self.workouts.clone(),
        }
    }

    fn persist(&mut self) {
        let snapshot = self.snapshot();
        let raw = match serde_json::to_string(&snapshot) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to serialize workout log");
                return;
            }
        };

        if let Err(err) = self.storage.set(&self.storage_key, &raw) {
            tracing::warn!(error = %err, "Failed to persist workout log");
        }
    }

    fn restore(&mut self) {
        let raw = match self.storage.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.storage_key, "No persisted workout log");
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read persisted workout log");
                return;
            }
        };

        let snapshot: StoreSnapshot = match serde_json::from_str(&raw) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(error = %err, "Malformed workout log, starting empty");
                return;
            }
        };

        if snapshot.version != SNAPSHOT_VERSION {
            tracing::warn!(
                version = snapshot.version,
                expected = SNAPSHOT_VERSION,
                "Unknown snapshot version, starting empty"
            );
            return;
        }

        // Re-hydrate through the model so restored records carry a freshly
        // recomputed metric instead of whatever was on disk.
        let count = snapshot.workouts.len();
        match snapshot
            .workouts
            .into_iter()
            .map(Workout::rehydrated)
            .collect::<Option<Vec<_>>>()
        {
            Some(workouts) => {
                self.workouts = workouts;
                tracing::debug!(count, "Restored workout log");
            }
            None => {
                tracing::warn!("Persisted workout violates invariants, starting empty");
            }
        }
    }
}

/// Validate the numeric form fields for the selected kind.
///
/// Every field must be finite; distance, duration and (for running)
/// cadence must be strictly positive. Elevation gain carries no sign
/// constraint: net-downhill rides are legal.
fn validate_form(form: &WorkoutForm) -> Result<(), ValidationError> {
    match *form {
        WorkoutForm::Running {
            distance,
            duration,
            cadence,
        } => {
            require_positive("distance", distance)?;
            require_positive("duration", duration)?;
            require_positive("cadence", cadence)?;
        }
        WorkoutForm::Cycling {
            distance,
            duration,
            elevation_gain,
        } => {
            require_positive("distance", distance)?;
            require_positive("duration", duration)?;
            require_finite("elevation gain", elevation_gain)?;
        }
    }
    Ok(())
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotPositive { field })
    }
}
