// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Athlete summary returned alongside the OAuth token exchange.

use serde::{Deserialize, Serialize};

/// The authenticated athlete, as embedded in the token exchange response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Athlete {
    /// Strava athlete ID
    pub id: u64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    /// Profile picture URL
    #[serde(default)]
    pub profile: Option<String>,
}

impl Athlete {
    /// Display name for the success view.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.firstname, self.lastname);
        let name = name.trim();
        if name.is_empty() {
            self.username.clone().unwrap_or_else(|| self.id.to_string())
        } else {
            name.to_string()
        }
    }
}
