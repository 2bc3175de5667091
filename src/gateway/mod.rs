//! Portal query gateway.
//!
//! Two read-only queries back the People screen: the member list filtered by
//! first name, and the admins list. Both are idempotent and side-effect-free,
//! so callers may repeat them freely.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{codes, GatewayError};
use crate::models::PersonRecord;

/// Header name for the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Read-only access to an organization's people.
#[async_trait]
pub trait PeopleGateway: Send + Sync {
    /// List members of an organization whose first name contains
    /// `name_contains`. An empty filter matches every member.
    async fn list_members(
        &self,
        org_id: &str,
        name_contains: &str,
    ) -> Result<Vec<PersonRecord>, GatewayError>;

    /// List admins of an organization. The admins query takes no name filter.
    async fn list_admins(&self, org_id: &str) -> Result<Vec<PersonRecord>, GatewayError>;
}

/// Response envelope used by every portal endpoint.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    #[serde(default)]
    data: Option<Vec<PersonRecord>>,
    #[serde(default)]
    error: Option<EnvelopeError>,
}

/// Error details in the response envelope.
#[derive(Debug, Deserialize)]
struct EnvelopeError {
    code: String,
    message: String,
}

/// HTTP implementation of [`PeopleGateway`] against the portal REST API.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway from configuration.
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|_| GatewayError::Config("Invalid PORTAL_API_KEY value".to_string()))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue a GET request and unwrap the portal's response envelope.
    async fn fetch_people(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<PersonRecord>, GatewayError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let (code, message) = serde_json::from_str::<Envelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .map(|e| (e.code, e.message))
                .unwrap_or_else(|| (codes::PORTAL_ERROR.to_string(), body));

            return Err(GatewayError::Portal {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let envelope: Envelope = response.json().await?;

        if !envelope.success {
            let (code, message) = envelope
                .error
                .map(|e| (e.code, e.message))
                .unwrap_or_else(|| {
                    (
                        codes::PORTAL_ERROR.to_string(),
                        "Portal reported failure without details".to_string(),
                    )
                });

            return Err(GatewayError::Portal {
                status: status.as_u16(),
                code,
                message,
            });
        }

        envelope
            .data
            .ok_or_else(|| GatewayError::Decode("Envelope is missing data".to_string()))
    }
}

#[async_trait]
impl PeopleGateway for HttpGateway {
    async fn list_members(
        &self,
        org_id: &str,
        name_contains: &str,
    ) -> Result<Vec<PersonRecord>, GatewayError> {
        self.fetch_people(
            "/api/members",
            &[("orgId", org_id), ("firstNameContains", name_contains)],
        )
        .await
    }

    async fn list_admins(&self, org_id: &str) -> Result<Vec<PersonRecord>, GatewayError> {
        self.fetch_people("/api/admins", &[("orgId", org_id)]).await
    }
}
