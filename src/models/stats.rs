// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete statistics as returned by `GET /athletes/{id}/stats`.

use serde::{Deserialize, Serialize};

/// Totals for one bucket (recent / year-to-date / all-time, per sport).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityTotals {
    #[serde(default)]
    pub count: u64,
    /// Meters
    #[serde(default)]
    pub distance: f64,
    /// Seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Seconds
    #[serde(default)]
    pub elapsed_time: u64,
    /// Meters
    #[serde(default)]
    pub elevation_gain: f64,
}

/// The athlete stats document, passed to the success view as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteStats {
    #[serde(default)]
    pub biggest_ride_distance: Option<f64>,
    #[serde(default)]
    pub biggest_climb_elevation_gain: Option<f64>,
    #[serde(default)]
    pub recent_ride_totals: ActivityTotals,
    #[serde(default)]
    pub recent_run_totals: ActivityTotals,
    #[serde(default)]
    pub ytd_ride_totals: ActivityTotals,
    #[serde(default)]
    pub ytd_run_totals: ActivityTotals,
    #[serde(default)]
    pub all_ride_totals: ActivityTotals,
    #[serde(default)]
    pub all_run_totals: ActivityTotals,
}
