// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Routeboard: view your Strava activity stats and GPS routes on a map.
//!
//! This crate serves a single page that walks the user through Strava's
//! OAuth2 flow, then fetches their stats, recent activities, and
//! per-activity GPS streams and draws the routes on a Google map.

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;

use config::Settings;
use render::Templates;
use services::{Authenticator, StravaClient};

/// TCP port the server listens on.
pub const LISTEN_PORT: u16 = 8080;

/// Shared application state.
///
/// Built once before the listener starts and never mutated afterward, so
/// handlers share it behind an `Arc` without locking.
pub struct AppState {
    pub settings: Settings,
    pub templates: Templates,
    pub strava: StravaClient,
    pub authenticator: Authenticator,
}
