// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod athlete;
pub mod route;
pub mod stats;

pub use activity::ActivitySummary;
pub use athlete::Athlete;
pub use route::{Route, RouteCollection, RoutePoint};
pub use stats::{ActivityTotals, AthleteStats};
