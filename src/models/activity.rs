// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava activity summary as returned by the activity list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One activity from `GET /athlete/activities`.
///
/// Held only for the duration of the request that fetched it; the success
/// view re-serializes the list for the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Strava activity ID
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Sport type (Ride, Run, Hike, etc.)
    pub sport_type: String,
    /// Start date/time
    pub start_date: DateTime<Utc>,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u64,
    /// Total elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
}
