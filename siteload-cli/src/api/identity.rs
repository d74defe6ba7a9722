//! Identity Platform account provisioning

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use super::auth::TokenProvider;

const IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";

/// An account known to the identity service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IdentityAccount {
    #[serde(rename = "localId")]
    pub uid: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("identity lookup for '{email}' failed: {detail}")]
    Lookup { email: String, detail: String },
    #[error("creating account '{email}' failed: {detail}")]
    Create { email: String, detail: String },
    #[error(transparent)]
    Auth(#[from] anyhow::Error),
}

/// Account-provisioning service backing the users sheet.
#[async_trait]
pub trait IdentityService {
    /// Find an account by email. `Ok(None)` means no such user, which is
    /// not an error for the importer.
    async fn lookup_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<IdentityAccount>, IdentityError>;

    /// Create an enabled, unverified account with the given password.
    async fn create_account(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, IdentityError>;
}

/// Identity Toolkit REST client.
pub struct IdentityClient {
    http: reqwest::Client,
    auth: TokenProvider,
}

impl IdentityClient {
    pub fn new(auth: TokenProvider, http: reqwest::Client) -> Self {
        Self { http, auth }
    }

    fn accounts_url(&self, action: &str) -> String {
        format!(
            "{}/projects/{}/accounts{}",
            IDENTITY_BASE,
            self.auth.project_id(),
            action
        )
    }
}

/// Error payloads the lookup endpoint uses for "no such user".
fn is_not_found(body: &str) -> bool {
    body.contains("USER_NOT_FOUND") || body.contains("EMAIL_NOT_FOUND")
}

#[async_trait]
impl IdentityService for IdentityClient {
    async fn lookup_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<IdentityAccount>, IdentityError> {
        let token = self.auth.token().await?;
        let response = self
            .http
            .post(self.accounts_url(":lookup"))
            .bearer_auth(token)
            .json(&serde_json::json!({ "email": [email] }))
            .send()
            .await
            .map_err(|e| IdentityError::Lookup {
                email: email.to_string(),
                detail: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if is_not_found(&body) {
                return Ok(None);
            }
            return Err(IdentityError::Lookup {
                email: email.to_string(),
                detail: format!("HTTP {}: {}", status, body),
            });
        }

        #[derive(Deserialize)]
        struct LookupResponse {
            #[serde(default)]
            users: Vec<IdentityAccount>,
        }
        let found: LookupResponse =
            response.json().await.map_err(|e| IdentityError::Lookup {
                email: email.to_string(),
                detail: e.to_string(),
            })?;
        Ok(found.users.into_iter().next())
    }

    async fn create_account(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<IdentityAccount, IdentityError> {
        let token = self.auth.token().await?;
        let response = self
            .http
            .post(self.accounts_url(""))
            .bearer_auth(token)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "emailVerified": false,
                "disabled": false,
            }))
            .send()
            .await
            .map_err(|e| IdentityError::Create {
                email: email.to_string(),
                detail: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::Create {
                email: email.to_string(),
                detail: format!("HTTP {}: {}", status, body),
            });
        }

        let mut account: IdentityAccount =
            response.json().await.map_err(|e| IdentityError::Create {
                email: email.to_string(),
                detail: e.to_string(),
            })?;
        if account.email.is_empty() {
            account.email = email.to_string();
        }
        Ok(account)
    }
}
