// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.
//!
//! Startup errors (settings, templates, callback URL) terminate the process.
//! Per-request upstream errors are recorded in the aggregation bundle and
//! degrade the rendered view; they never change the HTTP status.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("template error: {0}")]
    Template(String),

    #[error("invalid callback URL: {0}")]
    CallbackUrl(String),

    #[error("OAuth exchange failed: {0}")]
    OAuth(String),

    #[error("Strava API error: {0}")]
    StravaApi(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;
