// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod views;

use crate::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Build the complete router: the index view, the OAuth callback, and the
/// static asset tree.
pub fn create_router(state: Arc<AppState>) -> Router {
    let callback_path = state.authenticator.callback_path().to_string();

    Router::new()
        .route("/", get(views::index))
        .route(&callback_path, get(views::exchange_token))
        .nest_service("/assets", ServeDir::new("assets"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
