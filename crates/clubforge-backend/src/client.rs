//! Backend Client
//!
//! Thin client over the hosted backend's REST surface. The one write
//! that matters is `create_event_with_form`, a transactional remote
//! procedure: the backend applies the event attributes and the field
//! rows all-or-nothing. The client never retries; a failure surfaces to
//! the caller with the editor state untouched (arguments are borrowed).

use std::sync::Arc;
use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use clubforge_events::{EventAttributes, EventRecord, RegistrationRecord, RegistrationStatus};
use clubforge_forms::FieldRow;

use crate::error::{BackendError, Result};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Client for the hosted backend.
#[derive(Clone, Debug)]
pub struct BackendClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the given backend URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Default::default()
        })
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BackendError::Config(format!("invalid base url: {e}")))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "apikey",
            header::HeaderValue::from_str(&config.api_key)
                .map_err(|_| BackendError::Config("invalid api key".to_string()))?,
        );
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
                .map_err(|_| BackendError::Config("invalid api key".to_string()))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            inner: Arc::new(ClientInner { base_url, http }),
        })
    }

    /// Create the event and its form schema in one atomic call.
    ///
    /// Either both the event and all field rows exist afterward, or
    /// neither does; that guarantee lives in the backend procedure, not
    /// here. No retry is attempted: the admin corrects and resubmits.
    pub async fn create_event_with_form(
        &self,
        event: &EventAttributes,
        fields: &[FieldRow],
    ) -> Result<()> {
        #[derive(Serialize)]
        struct RpcParams<'a> {
            p_event_data: &'a EventAttributes,
            p_form_fields: &'a [FieldRow],
        }

        tracing::info!(
            title = %event.title,
            field_count = fields.len(),
            "calling create_event_with_form"
        );

        let url = self.endpoint("/rest/v1/rpc/create_event_with_form")?;
        let response = self
            .inner
            .http
            .post(url)
            .json(&RpcParams {
                p_event_data: event,
                p_form_fields: fields,
            })
            .send()
            .await?;

        self.check(response).await.map(|_| ())
    }

    /// Published events for the public listing, soonest first.
    pub async fn list_published_events(&self) -> Result<Vec<EventRecord>> {
        self.get_rows(
            "/rest/v1/events",
            &[
                ("select", "*"),
                ("status", "eq.published"),
                ("order", "start_date.asc"),
            ],
        )
        .await
    }

    /// All events for the admin selector, newest first.
    pub async fn list_event_summaries(&self) -> Result<Vec<EventRecord>> {
        self.get_rows(
            "/rest/v1/events",
            &[("select", "*"), ("order", "start_date.desc")],
        )
        .await
    }

    /// The stored form schema for one event, in display order.
    pub async fn event_form_schema(&self, event_id: Uuid) -> Result<Vec<FieldRow>> {
        self.get_rows(
            "/rest/v1/event_form_fields",
            &[
                ("select", "*"),
                ("event_id", &format!("eq.{event_id}")),
                ("order", "display_order.asc"),
            ],
        )
        .await
    }

    /// Applications for one event, joined with registrant identity,
    /// newest first.
    pub async fn list_applications(&self, event_id: Uuid) -> Result<Vec<RegistrationRecord>> {
        self.get_rows(
            "/rest/v1/event_registrations",
            &[
                (
                    "select",
                    "*,profiles:user_id(full_name,roll_number,email)",
                ),
                ("event_id", &format!("eq.{event_id}")),
                ("order", "registered_at.desc"),
            ],
        )
        .await
    }

    /// Record a review decision on one application.
    pub async fn update_registration_status(
        &self,
        registration_id: Uuid,
        status: RegistrationStatus,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct StatusPatch {
            status: RegistrationStatus,
        }

        tracing::info!(%registration_id, ?status, "updating registration status");

        let url = self.endpoint("/rest/v1/event_registrations")?;
        let response = self
            .inner
            .http
            .patch(url)
            .query(&[("id", &format!("eq.{registration_id}"))])
            .json(&StatusPatch { status })
            .send()
            .await?;

        self.check(response).await.map(|_| ())
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let url = self.endpoint(path)?;
        let response = self.inner.http.get(url).query(query).send().await?;
        let response = self.check(response).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| BackendError::Config(format!("invalid endpoint {path}: {e}")))
    }

    /// Turn a non-success response into a rejection carrying the
    /// backend's own message.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let bytes = response.bytes().await?;
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| String::from_utf8_lossy(&bytes).to_string());

        tracing::warn!(%status, %message, "backend rejected request");
        Err(BackendError::Rejected { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        let err = BackendClient::new("not a url", "key").unwrap_err();
        assert!(matches!(err, BackendError::Config(_)));
    }

    #[test]
    fn default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.api_key.is_empty());
    }
}
