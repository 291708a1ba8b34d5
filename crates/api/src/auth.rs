//! Login, registration, and logout

use hallbook_core::UserProfile;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::Result;

/// Successful login/registration outcome
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub token: String,
    #[serde(alias = "user")]
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Customer registration payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Hall-owner registration payload; `proof_url` points at the uploaded
/// ownership document (see the uploads API).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRegistration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub proof_url: String,
}

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Exchange credentials for a bearer token and profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome> {
        let builder = self
            .client
            .request(Method::POST, "/auth/login", None)
            .json(&LoginRequest { email, password });
        let response = self.client.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Register a customer account; logs the new account straight in.
    pub async fn register_customer(&self, reg: &CustomerRegistration) -> Result<AuthOutcome> {
        let builder = self
            .client
            .request(Method::POST, "/auth/register/customer", None)
            .json(reg);
        let response = self.client.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Register a hall-owner account (pending admin approval of listings).
    pub async fn register_owner(&self, reg: &OwnerRegistration) -> Result<AuthOutcome> {
        let builder = self
            .client
            .request(Method::POST, "/auth/register/owner", None)
            .json(reg);
        let response = self.client.send(builder).await?;
        Ok(response.json().await?)
    }

    /// Best-effort remote logout.
    ///
    /// Never fails: success, network failure, and non-2xx all end the same
    /// way. The caller clears the local token afterwards
    /// ([`AuthSession::clear`] or `AppSession::reset`) no matter what this
    /// returned; store locks are taken only before and after this await,
    /// never across it. In-flight requests still carrying the old token fail
    /// server-side, which is acceptable.
    pub async fn logout(&self, token: Option<&str>) {
        let Some(token) = token else {
            return;
        };
        let builder = self.client.request(Method::POST, "/auth/logout", Some(token));
        match self.client.send(builder).await {
            Ok(_) => info!("Remote logout acknowledged"),
            Err(e) => warn!(error = %e, "Remote logout failed, clearing local token anyway"),
        }
    }
}
