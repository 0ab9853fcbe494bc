// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The three page views: index, success, failure.
//!
//! Every handler renders with HTTP 200; upstream failures degrade the
//! view and are logged server-side only.

use crate::error::AppError;
use crate::models::Athlete;
use crate::render::{ViewData, ViewMode};
use crate::services::{aggregate, Bundle, CallbackParams, Permission};
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Html;
use serde_json::{json, Value};
use std::sync::Arc;

/// State value passed through the consent redirect. There is no session to
/// bind it to, so it is a fixed marker.
const OAUTH_STATE: &str = "state1";

/// `GET /` - landing page with the consent-screen link.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut data = base_view(&state, ViewMode::Index);
    data.insert(
        "url".to_string(),
        Value::String(
            state
                .authenticator
                .authorization_url(OAUTH_STATE, Permission::Public, true),
        ),
    );

    Html(state.templates.render(&data))
}

/// `GET /exchange_token` - OAuth callback.
///
/// A successful exchange feeds the aggregation pipeline and renders the
/// success view; any failure renders the failure view with the error text.
pub async fn exchange_token(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Html<String> {
    match state.authenticator.handle_callback(&params).await {
        Ok(auth) => {
            let bundle = aggregate(&state.strava, &auth.access_token, auth.athlete.id).await;
            let data = success_view(&state, &auth.athlete, &bundle);
            Html(state.templates.render(&data))
        }
        Err(error) => {
            tracing::warn!(error = %error, "OAuth callback failed");
            let data = failure_view(&state, &error);
            Html(state.templates.render(&data))
        }
    }
}

/// Fields common to every mode, with neutral defaults so each template
/// placeholder always resolves.
fn base_view(state: &AppState, mode: ViewMode) -> ViewData {
    let mut data = ViewData::new();
    data.insert(
        "google".to_string(),
        Value::String(state.settings.google.key.clone()),
    );
    data.insert("mode".to_string(), Value::String(mode.as_str().to_string()));
    data.insert("url".to_string(), Value::String(String::new()));
    data.insert("error".to_string(), Value::String(String::new()));
    data.insert("athlete_name".to_string(), Value::String(String::new()));
    data.insert("athlete".to_string(), Value::Null);
    data.insert("stats".to_string(), Value::Null);
    data.insert("activities".to_string(), json!([]));
    data.insert("routes".to_string(), json!([]));
    data
}

fn success_view(state: &AppState, athlete: &Athlete, bundle: &Bundle) -> ViewData {
    let mut data = base_view(state, ViewMode::Success);

    data.insert(
        "athlete_name".to_string(),
        Value::String(athlete.display_name()),
    );
    data.insert(
        "athlete".to_string(),
        serde_json::to_value(athlete).unwrap_or(Value::Null),
    );
    // Failed sections keep their index-mode defaults (null / empty array).
    if let Ok(stats) = &bundle.stats {
        data.insert(
            "stats".to_string(),
            serde_json::to_value(stats).unwrap_or(Value::Null),
        );
    }
    if let Ok(activities) = &bundle.activities {
        data.insert(
            "activities".to_string(),
            serde_json::to_value(activities).unwrap_or_else(|_| json!([])),
        );
    }
    data.insert("routes".to_string(), bundle.routes.to_json());
    data
}

fn failure_view(state: &AppState, error: &AppError) -> ViewData {
    let mut data = base_view(state, ViewMode::Failure);
    data.insert("error".to_string(), Value::String(error.to_string()));
    data
}
