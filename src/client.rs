//! Submission of card details to the server.
//!
//! [`CreditInfoSink`] is the seam between the form and the outside world.
//! [`HttpClient`] is the real implementation: one JSON `POST` per submit,
//! no retries, no timeout beyond what the transport imposes.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::SubmitError;
use crate::form::CreditInfo;

/// Something that accepts a validated payload and answers with a message.
#[async_trait]
pub trait CreditInfoSink: Send + Sync {
    /// Saves the card details, returning the success message to show the user.
    async fn save(&self, info: &CreditInfo) -> Result<String, SubmitError>;
}

/// Sends card details to `{server}/credits/savecreditinfo` as JSON.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a client with a default `reqwest::Client`.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Returns the endpoint configuration.
    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl CreditInfoSink for HttpClient {
    async fn save(&self, info: &CreditInfo) -> Result<String, SubmitError> {
        let endpoint = self.config.endpoint();
        info!(%endpoint, card = %info.card_number(), "Submitting card details");

        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(info)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "Server responded");

        if status.is_success() {
            let message = response.text().await?;
            info!(%status, "Card details saved");
            return Ok(message);
        }

        let body = response.text().await?;
        let err = error_from_body(status, body);
        warn!(%status, error = %err, "Server rejected card details");
        Err(err)
    }
}

/// Turns a non-success response body into a [`SubmitError`].
///
/// JSON bodies become [`SubmitError::Rejected`]; anything else is passed on
/// untouched as [`SubmitError::MalformedErrorBody`].
///
/// # Example
///
/// ```
/// use card_form::client::error_from_body;
/// use card_form::SubmitError;
/// use reqwest::StatusCode;
///
/// let err = error_from_body(StatusCode::BAD_REQUEST, r#"{"message":"duplicate card"}"#.into());
/// assert_eq!(err.to_string(), "duplicate card");
///
/// let err = error_from_body(StatusCode::BAD_GATEWAY, "Bad Gateway".into());
/// assert!(matches!(err, SubmitError::MalformedErrorBody { .. }));
/// ```
pub fn error_from_body(status: StatusCode, body: String) -> SubmitError {
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => SubmitError::Rejected {
            status,
            message: message_from_json(&value),
        },
        Err(_) => SubmitError::MalformedErrorBody { status, body },
    }
}

/// A JSON string is used verbatim, an object's `message` string if it has
/// one, otherwise the compact JSON text.
fn message_from_json(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("message") {
            Some(Value::String(text)) => text.clone(),
            _ => value.to_string(),
        },
        other => other.to_string(),
    }
}
