// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model: one logged activity and its derived metric.
//!
//! A workout is either a run or a ride. Both carry distance, duration and
//! the map coordinates where the workout was logged; the kind-specific
//! details (cadence for running, elevation gain for cycling) live in a
//! tagged variant together with the metric derived at construction time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::time_utils::format_month_day;

/// Latitude/longitude pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self(lat, lng)
    }

    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }
}

/// Workout kind. Fixed at construction, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Cycling => write!(f, "Cycling"),
        }
    }
}

/// Kind-specific fields plus the metric derived from distance/duration.
///
/// The `kind` tag on the wire is `"running"` or `"cycling"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum WorkoutDetails {
    #[serde(rename_all = "camelCase")]
    Running {
        /// Cadence in steps per minute
        cadence_steps_per_min: f64,
        /// Pace derived at construction: duration / distance
        pace_min_per_km: f64,
    },
    #[serde(rename_all = "camelCase")]
    Cycling {
        /// Elevation gain in meters; negative for net-downhill rides
        elevation_gain_m: f64,
        /// Speed derived at construction: distance / (duration / 60)
        speed_km_per_h: f64,
    },
}

/// One logged workout.
///
/// Immutable after construction except for the interaction counter.
/// Construction never fails: the session store validates the raw input
/// before calling either constructor, which is also what keeps the
/// derived-metric division well defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(flatten)]
    pub details: WorkoutDetails,
    /// Display label, e.g. "Running on April 14"
    pub label: String,
    #[serde(default)]
    interaction_count: u32,
}

impl Workout {
    /// Create a running workout. Inputs are assumed already validated.
    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_steps_per_min: f64,
    ) -> Self {
        let details = WorkoutDetails::Running {
            cadence_steps_per_min,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::from_parts(coordinates, distance_km, duration_min, details)
    }

    /// Create a cycling workout. Inputs are assumed already validated;
    /// `elevation_gain_m` may be negative.
    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let details = WorkoutDetails::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.0),
        };
        Self::from_parts(coordinates, distance_km, duration_min, details)
    }

    fn from_parts(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        details: WorkoutDetails,
    ) -> Self {
        let created_at = Utc::now();
        let kind = match details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        };
        let label = format!("{} on {}", kind, format_month_day(created_at));

        Self {
            id: Uuid::now_v7(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            details,
            label,
            interaction_count: 0,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Metric derived at construction: pace (min/km) for running, speed
    /// (km/h) for cycling.
    pub fn derived_metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { pace_min_per_km, .. } => pace_min_per_km,
            WorkoutDetails::Cycling { speed_km_per_h, .. } => speed_km_per_h,
        }
    }

    /// Recompute the derived metric from the stored distance/duration.
    pub fn compute_derived_metric(&self) -> f64 {
        match self.details {
            WorkoutDetails::Running { .. } => self.duration_min / self.distance_km,
            WorkoutDetails::Cycling { .. } => self.distance_km / (self.duration_min / 60.0),
        }
    }

    /// Times this workout was activated (e.g. selected from the list).
    pub fn interaction_count(&self) -> u32 {
        self.interaction_count
    }

    /// Record one activation. No other observable side effect.
    pub fn record_interaction(&mut self) {
        self.interaction_count += 1;
    }

    /// Re-validate a deserialized workout and rebuild its derived metric
    /// through the same formulas the constructors use.
    ///
    /// Returns `None` if the stored fields violate the distance/duration
    /// invariant, in which case the whole restore falls back to empty.
    pub(crate) fn rehydrated(mut self) -> Option<Self> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.distance_km) || !positive(self.duration_min) {
            return None;
        }

        self.details = match self.details {
            WorkoutDetails::Running {
                cadence_steps_per_min,
                ..
            } => WorkoutDetails::Running {
                cadence_steps_per_min,
                pace_min_per_km: self.duration_min / self.distance_km,
            },
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: self.distance_km / (self.duration_min / 60.0),
            },
        };
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_running_pace_formula() {
        let workout = Workout::running(Coordinates::new(39.0, -12.0), 5.2, 24.0, 178.0);

        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert!((workout.derived_metric() - 4.6154).abs() < 1e-4);
        assert_eq!(workout.derived_metric(), workout.compute_derived_metric());
    }

    #[test]
    fn test_cycling_speed_formula() {
        let workout = Workout::cycling(Coordinates::new(39.0, -12.0), 27.0, 95.0, 523.0);

        assert_eq!(workout.kind(), WorkoutKind::Cycling);
        assert!((workout.derived_metric() - 17.0526).abs() < 1e-4);
        assert_eq!(workout.derived_metric(), workout.compute_derived_metric());
    }

    #[test]
    fn test_negative_elevation_gain_allowed() {
        let workout = Workout::cycling(Coordinates::new(46.0, 7.0), 30.0, 45.0, -120.0);

        match workout.details {
            WorkoutDetails::Cycling {
                elevation_gain_m, ..
            } => assert_eq!(elevation_gain_m, -120.0),
            _ => panic!("expected cycling details"),
        }
    }

    #[test]
    fn test_label_contains_kind_and_month() {
        let workout = Workout::running(Coordinates::new(0.0, 0.0), 1.0, 10.0, 160.0);
        let expected = format!(
            "Running on {}",
            crate::time_utils::format_month_day(workout.created_at)
        );

        assert_eq!(workout.label, expected);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Workout::running(Coordinates::new(0.0, 0.0), 1.0, 10.0, 160.0);
        let b = Workout::running(Coordinates::new(0.0, 0.0), 1.0, 10.0, 160.0);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_interaction_increments() {
        let mut workout = Workout::cycling(Coordinates::new(0.0, 0.0), 10.0, 30.0, 50.0);
        assert_eq!(workout.interaction_count(), 0);

        workout.record_interaction();
        workout.record_interaction();

        assert_eq!(workout.interaction_count(), 2);
    }

    #[test]
    fn test_rehydrated_recomputes_metric() {
        let mut workout = Workout::running(Coordinates::new(0.0, 0.0), 5.0, 25.0, 170.0);
        // Simulate a stale stored metric
        workout.details = WorkoutDetails::Running {
            cadence_steps_per_min: 170.0,
            pace_min_per_km: 99.0,
        };

        let rehydrated = workout.rehydrated().expect("invariants hold");
        assert_eq!(rehydrated.derived_metric(), 5.0);
    }

    #[test]
    fn test_rehydrated_rejects_nonpositive_distance() {
        let mut workout = Workout::running(Coordinates::new(0.0, 0.0), 5.0, 25.0, 170.0);
        workout.distance_km = 0.0;

        assert!(workout.rehydrated().is_none());
    }

    #[test]
    fn test_wire_format_field_names() {
        let workout = Workout::running(Coordinates::new(39.0, -12.0), 5.2, 24.0, 178.0);
        let json = serde_json::to_value(&workout).expect("serialize");

        assert_eq!(json["kind"], "running");
        assert_eq!(json["coordinates"][0], 39.0);
        assert_eq!(json["coordinates"][1], -12.0);
        assert_eq!(json["distanceKm"], 5.2);
        assert_eq!(json["durationMin"], 24.0);
        assert_eq!(json["cadenceStepsPerMin"], 178.0);
        assert!(json["paceMinPerKm"].is_number());
        assert!(json["createdAt"].is_string());
        assert_eq!(json["interactionCount"], 0);
    }

    #[test]
    fn test_wire_format_cycling_fields() {
        let workout = Workout::cycling(Coordinates::new(39.0, -12.0), 27.0, 95.0, 523.0);
        let json = serde_json::to_value(&workout).expect("serialize");

        assert_eq!(json["kind"], "cycling");
        assert_eq!(json["elevationGainM"], 523.0);
        assert!(json["speedKmPerH"].is_number());
    }
}
