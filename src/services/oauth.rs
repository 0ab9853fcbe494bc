// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth session handling.
//!
//! Each callback request runs the full exchange independently:
//! parse the redirect query, exchange the code, classify the outcome.
//! Nothing persists across requests.

use crate::error::AppError;
use crate::models::Athlete;
use crate::services::strava::StravaClient;
use serde::Deserialize;
use url::Url;

const AUTHORIZE_URL: &str = "https://www.strava.com/oauth/authorize";

/// Permission scope requested on the consent screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Public,
    ViewPrivate,
    Write,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::Public => "public",
            Permission::ViewPrivate => "view_private",
            Permission::Write => "write",
        }
    }
}

/// Query parameters Strava appends to the callback redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    /// Set when the user rejects the consent screen (e.g. `access_denied`)
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of a successful code exchange.
#[derive(Debug, Clone)]
pub struct AuthorizationResult {
    pub access_token: String,
    pub athlete: Athlete,
}

/// Builds consent URLs and turns callback redirects into access tokens.
pub struct Authenticator {
    client: StravaClient,
    callback_url: String,
    callback_path: String,
}

impl Authenticator {
    /// Create an authenticator for the given callback URL.
    ///
    /// The callback URL is parsed here so a malformed value prevents
    /// startup instead of breaking the first redirect.
    pub fn new(client: StravaClient, callback_url: String) -> Result<Self, AppError> {
        let parsed = Url::parse(&callback_url)
            .map_err(|e| AppError::CallbackUrl(format!("{}: {}", callback_url, e)))?;
        let callback_path = parsed.path().to_string();

        Ok(Self {
            client,
            callback_url,
            callback_path,
        })
    }

    /// Path component of the callback URL, used for route registration.
    pub fn callback_path(&self) -> &str {
        &self.callback_path
    }

    /// Build the consent-screen URL.
    ///
    /// Pure function of configuration and arguments.
    pub fn authorization_url(
        &self,
        state: &str,
        permission: Permission,
        force_approval: bool,
    ) -> String {
        let approval_prompt = if force_approval { "force" } else { "auto" };

        format!(
            "{}?client_id={}&response_type=code&redirect_uri={}&scope={}&state={}&approval_prompt={}",
            AUTHORIZE_URL,
            self.client.client_id(),
            urlencoding::encode(&self.callback_url),
            permission.as_str(),
            urlencoding::encode(state),
            approval_prompt,
        )
    }

    /// Handle the callback redirect: classify the query, then exchange the
    /// code for a token. One attempt, no retry.
    pub async fn handle_callback(
        &self,
        params: &CallbackParams,
    ) -> Result<AuthorizationResult, AppError> {
        if let Some(error) = &params.error {
            return Err(AppError::OAuth(format!("authorization denied: {}", error)));
        }

        let code = params
            .code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AppError::OAuth("missing authorization code".to_string()))?;

        let exchange = self
            .client
            .exchange_token(code)
            .await
            .map_err(|e| AppError::OAuth(e.to_string()))?;

        tracing::info!(
            athlete_id = exchange.athlete.id,
            "OAuth exchange succeeded"
        );

        Ok(AuthorizationResult {
            access_token: exchange.access_token,
            athlete: exchange.athlete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn test_authenticator() -> Authenticator {
        let client = StravaClient::new(1234, "secret".to_string());
        Authenticator::new(client, "http://0.0.0.0:8080/exchange_token".to_string())
            .expect("valid callback URL")
    }

    #[test]
    fn test_authorization_url_is_deterministic() {
        let authenticator = test_authenticator();

        let url = authenticator.authorization_url("state1", Permission::Public, true);

        assert_eq!(
            url,
            "https://www.strava.com/oauth/authorize?client_id=1234&response_type=code\
             &redirect_uri=http%3A%2F%2F0.0.0.0%3A8080%2Fexchange_token\
             &scope=public&state=state1&approval_prompt=force"
        );
        assert_eq!(
            url,
            authenticator.authorization_url("state1", Permission::Public, true)
        );
    }

    #[test]
    fn test_authorization_url_encodes_state() {
        let authenticator = test_authenticator();
        let url = authenticator.authorization_url("a b&c", Permission::ViewPrivate, false);

        assert!(url.contains("state=a%20b%26c"));
        assert!(url.contains("scope=view_private"));
        assert!(url.contains("approval_prompt=auto"));
    }

    #[test]
    fn test_callback_path() {
        let authenticator = test_authenticator();
        assert_eq!(authenticator.callback_path(), "/exchange_token");
    }

    #[test]
    fn test_malformed_callback_url_is_rejected() {
        let client = StravaClient::new(1234, "secret".to_string());
        let result = Authenticator::new(client, "not a url".to_string());
        assert!(matches!(result, Err(AppError::CallbackUrl(_))));
    }

    #[tokio::test]
    async fn test_callback_with_provider_error_skips_exchange() {
        let authenticator = test_authenticator();
        let params = CallbackParams {
            error: Some("access_denied".to_string()),
            ..Default::default()
        };

        let result = authenticator.handle_callback(&params).await;

        match result {
            Err(AppError::OAuth(msg)) => assert!(msg.contains("access_denied")),
            other => panic!("expected OAuth error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_callback_without_code_fails() {
        let authenticator = test_authenticator();
        let result = authenticator.handle_callback(&CallbackParams::default()).await;

        assert!(matches!(result, Err(AppError::OAuth(_))));
    }

    #[tokio::test]
    async fn test_callback_exchanges_code() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"access_token": "tok", "athlete": {"id": 9, "firstname": "Grace"}}"#,
            )
            .create_async()
            .await;

        let client = StravaClient::with_base_urls(
            1234,
            "secret".to_string(),
            server.url(),
            format!("{}/oauth/token", server.url()),
        );
        let authenticator =
            Authenticator::new(client, "http://0.0.0.0:8080/exchange_token".to_string())
                .expect("valid callback URL");

        let params = CallbackParams {
            code: Some("the-code".to_string()),
            state: Some("state1".to_string()),
            error: None,
        };
        let auth = authenticator
            .handle_callback(&params)
            .await
            .expect("exchange succeeds");

        assert_eq!(auth.access_token, "tok");
        assert_eq!(auth.athlete.firstname, "Grace");
    }

    #[tokio::test]
    async fn test_callback_with_rejected_code_fails() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .with_status(400)
            .with_body(r#"{"message": "Bad Request", "errors": [{"code": "invalid"}]}"#)
            .create_async()
            .await;

        let client = StravaClient::with_base_urls(
            1234,
            "secret".to_string(),
            server.url(),
            format!("{}/oauth/token", server.url()),
        );
        let authenticator =
            Authenticator::new(client, "http://0.0.0.0:8080/exchange_token".to_string())
                .expect("valid callback URL");

        let params = CallbackParams {
            code: Some("bad-code".to_string()),
            ..Default::default()
        };
        let result = authenticator.handle_callback(&params).await;

        assert!(matches!(result, Err(AppError::OAuth(_))));
    }
}
