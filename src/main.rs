// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routeboard server
//!
//! Serves a single page that authenticates against Strava and draws the
//! athlete's activity routes on a Google map.

use routeboard::{
    config::{Settings, SETTINGS_PATH},
    render::Templates,
    services::{Authenticator, StravaClient},
    AppState, LISTEN_PORT,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration; every key is required
    let settings = match Settings::load(SETTINGS_PATH) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, path = SETTINGS_PATH, "Failed to load settings");
            std::process::exit(1);
        }
    };
    tracing::info!(
        client_id = settings.strava.client_id,
        "Starting Routeboard"
    );

    // Compile view templates
    let templates = match Templates::load() {
        Ok(templates) => templates,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load templates");
            std::process::exit(1);
        }
    };

    // Strava client + OAuth authenticator; a malformed callback URL is fatal
    let strava = StravaClient::new(
        settings.strava.client_id,
        settings.strava.client_secret.clone(),
    );
    let callback_url = format!("http://0.0.0.0:{}/exchange_token", LISTEN_PORT);
    let authenticator = match Authenticator::new(strava.clone(), callback_url) {
        Ok(authenticator) => authenticator,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build authenticator");
            std::process::exit(1);
        }
    };

    // Build shared state and router
    let state = Arc::new(AppState {
        settings,
        templates,
        strava,
        authenticator,
    });
    let app = routeboard::routes::create_router(state);

    // Start server; a bind failure is fatal
    let addr = format!("0.0.0.0:{}", LISTEN_PORT);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize logging with an env-filter override (`RUST_LOG`).
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("routeboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
