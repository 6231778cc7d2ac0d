//! Reqwest implementation of the [`EventProvider`] contract.
//!
//! Wraps the Luma public API (`/event/create`, `/event/get`,
//! `/event/update`, `/event/add-host`). All calls authenticate with the
//! `x-luma-api-key` header and share one pooled [`reqwest::Client`] with a
//! request timeout, so a hung provider surfaces as an ordinary request
//! error.

use std::time::Duration;

use serde::Deserialize;
use techweek_core::types::Timestamp;

use crate::provider::{
    CreateRemoteEvent, CreatedEvent, EventProvider, HostResult, LumaError, RemoteEvent, Visibility,
};

/// Default base URL of the Luma public API.
const DEFAULT_BASE_URL: &str = "https://api.lu.ma/public/v1";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Luma event-hosting API.
pub struct LumaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct EventEnvelope<T> {
    event: T,
}

#[derive(Debug, Deserialize)]
struct CreatedEventPayload {
    api_id: String,
    url: String,
    created_at: Timestamp,
}

#[derive(Debug, Deserialize)]
struct RemoteEventPayload {
    name: String,
    start_at: Timestamp,
    end_at: Timestamp,
}

#[derive(Debug, Deserialize)]
struct AddHostPayload {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl LumaClient {
    /// Create a client against the production Luma API.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a custom base URL (tests, staging).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{path}", self.base_url))
            .header("x-luma-api-key", &self.api_key)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}{path}", self.base_url))
            .header("x-luma-api-key", &self.api_key)
    }

    /// Read a JSON body from a 2xx response, or map the failure.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, LumaError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(LumaError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Discard the body of a 2xx response, or map the failure.
    async fn check_status(response: reqwest::Response) -> Result<(), LumaError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(LumaError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait::async_trait]
impl EventProvider for LumaClient {
    async fn create_event(&self, input: &CreateRemoteEvent) -> Result<CreatedEvent, LumaError> {
        let body = serde_json::json!({
            "name": input.name,
            "description": input.description,
            "start_at": input.start_at,
            "end_at": input.end_at,
            "visibility": Visibility::Private.as_str(),
        });

        let response = self.post("/event/create").json(&body).send().await?;
        let payload: EventEnvelope<CreatedEventPayload> = Self::parse_response(response).await?;

        tracing::info!(api_id = %payload.event.api_id, "Created remote event");

        Ok(CreatedEvent {
            api_id: payload.event.api_id,
            url: payload.event.url,
            created_at: payload.event.created_at,
        })
    }

    async fn get_event(&self, api_id: &str) -> Result<RemoteEvent, LumaError> {
        let response = self
            .get("/event/get")
            .query(&[("api_id", api_id)])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LumaError::NotFound {
                event_id: api_id.to_string(),
            });
        }

        let payload: EventEnvelope<RemoteEventPayload> = Self::parse_response(response).await?;
        Ok(RemoteEvent {
            name: payload.event.name,
            start_at: payload.event.start_at,
            end_at: payload.event.end_at,
        })
    }

    async fn update_visibility(
        &self,
        api_id: &str,
        visibility: Visibility,
    ) -> Result<(), LumaError> {
        let body = serde_json::json!({
            "api_id": api_id,
            "visibility": visibility.as_str(),
        });

        let response = self.post("/event/update").json(&body).send().await?;
        Self::check_status(response).await?;

        tracing::info!(api_id, visibility = visibility.as_str(), "Updated remote visibility");
        Ok(())
    }

    async fn add_hosts(
        &self,
        api_id: &str,
        emails: &[String],
    ) -> Result<Vec<HostResult>, LumaError> {
        // One call per email so a single bad address cannot sink the rest.
        let mut results = Vec::with_capacity(emails.len());
        for email in emails {
            let body = serde_json::json!({
                "event_api_id": api_id,
                "email": email,
            });

            let outcome = async {
                let response = self.post("/event/add-host").json(&body).send().await?;
                Self::parse_response::<AddHostPayload>(response).await
            }
            .await;

            results.push(match outcome {
                Ok(payload) => HostResult {
                    email: email.clone(),
                    success: payload.success,
                    error: payload.error,
                },
                Err(e) => {
                    tracing::warn!(api_id, email = %email, error = %e, "Failed to add co-host");
                    HostResult {
                        email: email.clone(),
                        success: false,
                        error: Some(e.to_string()),
                    }
                }
            });
        }
        Ok(results)
    }
}
