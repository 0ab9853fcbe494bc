// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from `settings.toml` at startup.
//!
//! Settings are read once, before the listener starts, and shared read-only
//! for the life of the process. A missing file or missing key is fatal.

use figment::providers::{Format, Toml};
use figment::Figment;
use serde::Deserialize;

/// Default settings file path, relative to the working directory.
pub const SETTINGS_PATH: &str = "settings.toml";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Google Maps settings (`[google_com]`)
    #[serde(rename = "google_com")]
    pub google: GoogleSettings,
    /// Strava OAuth settings (`[strava_com]`)
    #[serde(rename = "strava_com")]
    pub strava: StravaSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    /// Maps JavaScript API key embedded in the rendered page
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StravaSettings {
    /// OAuth application client ID (public)
    pub client_id: u64,
    /// OAuth application client secret
    pub client_secret: String,
}

impl Settings {
    /// Load settings from a TOML file.
    ///
    /// Every key is required; figment reports the missing or mistyped key
    /// in the error message.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Settings for tests only.
    pub fn test_default() -> Self {
        Self {
            google: GoogleSettings {
                key: "test_maps_key".to_string(),
            },
            strava: StravaSettings {
                client_id: 1234,
                client_secret: "test_secret".to_string(),
            },
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid settings file: {0}")]
    Invalid(String),
}
