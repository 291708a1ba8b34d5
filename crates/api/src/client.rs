//! HTTP client for the Hallbook backend

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::admin::AdminApi;
use crate::assistant::AssistantApi;
use crate::auth::AuthApi;
use crate::bookings::BookingsApi;
use crate::error::{Error, Result};
use crate::favorites::FavoritesApi;
use crate::geo::LocationProvider;
use crate::halls::HallsApi;
use crate::uploads::UploadsApi;

/// Error payload shape the backend uses for failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client handle for all backend calls.
///
/// Cheap to share behind an `Arc`; the inner reqwest client pools
/// connections. No client-side timeout is configured beyond reqwest's
/// defaults.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    location: Option<Arc<dyn LocationProvider>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            location: None,
        }
    }

    /// Attach a geolocation source for proximity-sorted searches.
    pub fn with_location_provider(mut self, provider: Arc<dyn LocationProvider>) -> Self {
        self.location = Some(provider);
        self
    }

    /// Get the hall search/CRUD API
    pub fn halls(&self) -> HallsApi<'_> {
        HallsApi::new(self)
    }

    /// Get the auth API
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Get the reservations API
    pub fn bookings(&self) -> BookingsApi<'_> {
        BookingsApi::new(self)
    }

    /// Get the favorites API
    pub fn favorites(&self) -> FavoritesApi<'_> {
        FavoritesApi::new(self)
    }

    /// Get the admin moderation API
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    /// Get the file upload API
    pub fn uploads(&self) -> UploadsApi<'_> {
        UploadsApi::new(self)
    }

    /// Get the chatbot API
    pub fn assistant(&self) -> AssistantApi<'_> {
        AssistantApi::new(self)
    }

    pub(crate) fn location(&self) -> Option<&Arc<dyn LocationProvider>> {
        self.location.as_ref()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the standard headers; `token` adds the bearer.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> RequestBuilder {
        debug!(method = %method, path, "Issuing request");
        let mut builder = self
            .http
            .request(method, self.url(path))
            .header(ACCEPT, "application/json");
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder
    }

    /// Send a request, mapping any non-2xx response to [`Error::Status`] with
    /// the server's error payload when one is present.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or(body);
        Err(Error::Status { status, message })
    }

    /// GET with query params, decoding the JSON body.
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
        token: Option<&str>,
    ) -> Result<T> {
        let builder = self.request(Method::GET, path, token).query(params);
        let response = self.send(builder).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://host/");
        assert_eq!(client.url("/halls"), "http://host/halls");
    }

    #[tokio::test]
    async fn bearer_header_is_injected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("authorization", "Bearer tok123"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let builder = client.request(Method::GET, "/ping", Some("tok123"));
        client.send(builder).await.unwrap();
    }

    #[tokio::test]
    async fn non_2xx_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fail"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let builder = client.request(Method::GET, "/fail", None);
        let err = client.send(builder).await.unwrap_err();
        match err {
            Error::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_passes_through_raw() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fail"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let builder = client.request(Method::GET, "/fail", None);
        let err = client.send(builder).await.unwrap_err();
        match err {
            Error::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
