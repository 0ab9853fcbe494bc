// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregate;
pub mod oauth;
pub mod strava;

pub use aggregate::{aggregate, Bundle};
pub use oauth::{AuthorizationResult, Authenticator, CallbackParams, Permission};
pub use strava::StravaClient;
