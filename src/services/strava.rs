// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client.
//!
//! Handles:
//! - OAuth code-for-token exchange
//! - Athlete statistics
//! - Activity list fetching (first page only)
//! - Per-activity stream fetching at high resolution

use crate::error::AppError;
use crate::models::{ActivitySummary, Athlete, AthleteStats, Route, RoutePoint};
use serde::Deserialize;

const API_BASE_URL: &str = "https://www.strava.com/api/v3";
const TOKEN_URL: &str = "https://www.strava.com/oauth/token";

/// Channel types requested with each stream fetch. Only `latlng` is read
/// back; the remaining channels stay in the request for parity with the
/// upstream page this view was built against.
const STREAM_KEYS: &str =
    "time,latlng,distance,altitude,velocity_smooth,heartrate,cadence,watts,temp,moving,grade_smooth";

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
    client_id: u64,
    client_secret: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: u64, client_secret: String) -> Self {
        Self::with_base_urls(
            client_id,
            client_secret,
            API_BASE_URL.to_string(),
            TOKEN_URL.to_string(),
        )
    }

    /// Create a client against non-default endpoints. Used by tests to
    /// point at a local mock server.
    pub fn with_base_urls(
        client_id: u64,
        client_secret: String,
        base_url: String,
        token_url: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token_url,
            client_id,
            client_secret,
        }
    }

    pub fn client_id(&self) -> u64 {
        self.client_id
    }

    /// Exchange an authorization code for an access token.
    ///
    /// A single attempt; the outcome is surfaced directly to the caller.
    pub async fn exchange_token(&self, code: &str) -> Result<TokenExchangeResponse, AppError> {
        let client_id = self.client_id.to_string();
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(format!("token exchange request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Get athlete statistics.
    pub async fn athlete_stats(
        &self,
        access_token: &str,
        athlete_id: u64,
    ) -> Result<AthleteStats, AppError> {
        let url = format!("{}/athletes/{}/stats", self.base_url, athlete_id);
        self.get_json(&url, access_token).await
    }

    /// List the most recent activities (first page only).
    pub async fn list_activities(
        &self,
        access_token: &str,
        per_page: u32,
    ) -> Result<Vec<ActivitySummary>, AppError> {
        let url = format!("{}/athlete/activities", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[("per_page", per_page.to_string()), ("page", "1".to_string())])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Fetch an activity's stream set and extract its GPS track.
    ///
    /// Activities without a location stream yield an empty route.
    pub async fn activity_route(
        &self,
        access_token: &str,
        activity_id: u64,
    ) -> Result<Route, AppError> {
        let url = format!("{}/activities/{}/streams", self.base_url, activity_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .query(&[
                ("keys", STREAM_KEYS),
                ("key_by_type", "true"),
                ("resolution", "high"),
            ])
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        let streams: StreamSet = self.check_response_json(response).await?;

        let points = streams
            .latlng
            .map(|stream| stream.data)
            .unwrap_or_default();

        Ok(Route::new(points))
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        access_token: &str,
    ) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::StravaApi(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::StravaApi(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::StravaApi(format!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from Strava OAuth (includes athlete info).
#[derive(Debug, Clone, Deserialize)]
pub struct TokenExchangeResponse {
    pub access_token: String,
    pub athlete: Athlete,
}

/// Stream set keyed by channel type. Channels other than `latlng` are
/// requested but not decoded.
#[derive(Debug, Deserialize)]
struct StreamSet {
    #[serde(default)]
    latlng: Option<LatLngStream>,
}

#[derive(Debug, Deserialize)]
struct LatLngStream {
    data: Vec<RoutePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn test_client(server: &Server) -> StravaClient {
        StravaClient::with_base_urls(
            1234,
            "secret".to_string(),
            server.url(),
            format!("{}/oauth/token", server.url()),
        )
    }

    #[tokio::test]
    async fn test_activity_route_extracts_latlng() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/activities/42/streams")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "latlng": {"data": [[37.4, -122.1], [37.5, -122.2]], "series_type": "distance"},
                    "time": {"data": [0, 10], "series_type": "distance"}
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let route = client.activity_route("token", 42).await.expect("route fetch");

        mock.assert_async().await;
        assert_eq!(route.points, vec![[37.4, -122.1], [37.5, -122.2]]);
    }

    #[tokio::test]
    async fn test_activity_route_without_location_stream_is_empty() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/activities/42/streams")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"time": {"data": [0, 10]}}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let route = client.activity_route("token", 42).await.expect("route fetch");

        assert!(route.is_empty());
    }

    #[tokio::test]
    async fn test_non_2xx_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/athletes/7/stats")
            .with_status(401)
            .with_body(r#"{"message": "Authorization Error"}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let result = client.athlete_stats("bad-token", 7).await;

        assert!(matches!(result, Err(AppError::StravaApi(_))));
    }

    #[tokio::test]
    async fn test_exchange_token_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "access_token": "abc123",
                    "athlete": {"id": 7, "firstname": "Ada", "lastname": "Lovelace"}
                }"#,
            )
            .create_async()
            .await;

        let client = test_client(&server);
        let exchange = client.exchange_token("the-code").await.expect("exchange");

        mock.assert_async().await;
        assert_eq!(exchange.access_token, "abc123");
        assert_eq!(exchange.athlete.id, 7);
    }
}
