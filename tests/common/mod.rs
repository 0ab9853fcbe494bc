// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use routeboard::config::Settings;
use routeboard::render::Templates;
use routeboard::routes::create_router;
use routeboard::services::{Authenticator, StravaClient};
use routeboard::AppState;
use std::sync::Arc;

/// Create a test app whose Strava client points at a mock server.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(strava_url: &str) -> (axum::Router, Arc<AppState>) {
    let settings = Settings::test_default();

    // The real template files, loaded from the crate root.
    let templates = Templates::load().expect("template files present");

    let strava = StravaClient::with_base_urls(
        settings.strava.client_id,
        settings.strava.client_secret.clone(),
        strava_url.to_string(),
        format!("{}/oauth/token", strava_url),
    );
    let authenticator = Authenticator::new(
        strava.clone(),
        "http://0.0.0.0:8080/exchange_token".to_string(),
    )
    .expect("valid callback URL");

    let state = Arc::new(AppState {
        settings,
        templates,
        strava,
        authenticator,
    });

    (create_router(state.clone()), state)
}

/// Read a response body to a string.
#[allow(dead_code)]
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
