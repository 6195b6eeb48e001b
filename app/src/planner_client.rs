use crate::config::Config;
use crate::error::{PlannerError, Result};
use crate::types::{TripCreated, TripDraft};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 250;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Response wrapper used by every planner backend endpoint.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripPayload {
    trip_id: serde_json::Value,
}

/// HTTP client for the planner backend.
pub struct PlannerClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl PlannerClient {
    pub fn new(base_url: String) -> Result<Self> {
        Self::build(base_url, None, DEFAULT_TIMEOUT_SECS)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(
            config.planner_api_url.clone(),
            config.planner_api_token.clone(),
            config.request_timeout_secs,
        )
    }

    fn build(base_url: String, api_token: Option<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(PlannerError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    /// Destination names known to the backend, retried while it answers 503.
    pub async fn fetch_destinations(&self) -> Result<Vec<String>> {
        let mut attempts = 0;

        loop {
            attempts += 1;

            match self.fetch_destinations_once().await {
                Ok(destinations) => return Ok(destinations),
                Err(PlannerError::ServiceUnavailable) if attempts < MAX_RETRIES => {
                    warn!(
                        "Planner unavailable (attempt {}/{}), retrying in {}ms",
                        attempts,
                        MAX_RETRIES,
                        RETRY_DELAY_MS * u64::from(attempts)
                    );
                    tokio::time::sleep(Duration::from_millis(RETRY_DELAY_MS * u64::from(attempts)))
                        .await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_destinations_once(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/destinations", self.base_url);
        let response = self.authorized(self.client.get(&url)).send().await?;
        let status = response.status();

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(PlannerError::ServiceUnavailable);
        }
        if !status.is_success() {
            return Err(PlannerError::InvalidResponse(format!(
                "HTTP {status} for url={url}"
            )));
        }

        let body = response.text().await?;
        debug!("Destinations response: {}", body);

        let envelope: ApiEnvelope<Vec<String>> = parse_body(&body)?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Create a trip. Never retried: the call is not idempotent.
    pub async fn create_trip(&self, draft: &TripDraft) -> Result<TripCreated> {
        let url = format!("{}/api/trips", self.base_url);
        debug!(
            "Creating trip {} -> {} for {} traveler(s)",
            draft.start_city, draft.destination, draft.number_of_travelers
        );

        let response = self
            .authorized(self.client.post(&url))
            .json(draft)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(PlannerError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body),
            });
        }

        let envelope: ApiEnvelope<TripPayload> = parse_body(&body)?;
        let payload = envelope
            .data
            .ok_or_else(|| PlannerError::InvalidResponse("missing trip data".to_string()))?;

        Ok(TripCreated {
            trip_id: trip_id_to_string(&payload.trip_id)?,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>> {
    serde_json::from_str(body)
        .map_err(|e| PlannerError::InvalidResponse(format!("malformed body: {e}")))
}

/// The `message` field of an error body, when it is JSON and carries one.
fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty())
}

fn trip_id_to_string(value: &serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(id) if !id.is_empty() => Ok(id.clone()),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(PlannerError::InvalidResponse(format!(
            "unexpected tripId: {other}"
        ))),
    }
}
