//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, ApiSecret, DeliveryResult, InboundMessage, MessageText, PushWap, SendBinary, SendText,
    ValidationError,
};

const DEFAULT_ENDPOINT: &str = "https://rest.nexmo.com/sms/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Nexmo account credentials, sent as `username`/`password` with every request.
pub struct Credentials {
    key: ApiKey,
    secret: ApiSecret,
}

impl Credentials {
    /// Validate that the key is non-empty after trimming and the secret is non-empty.
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            key: ApiKey::new(key)?,
            secret: ApiSecret::new(secret)?,
        })
    }

    pub fn key(&self) -> &ApiKey {
        &self.key
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.key.as_str().to_owned()));
        params.push((ApiSecret::FIELD.to_owned(), self.secret.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`].
///
/// Rejected message parts are not errors: they are reported inside the
/// [`DeliveryResult`] and must be checked by the caller.
pub enum NexmoError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body was empty or not the expected JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct NexmoClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NexmoClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the endpoint URL (`https://rest.nexmo.com/sms/json` by default).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NexmoClient`].
    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        Ok(NexmoClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Nexmo SMS client.
///
/// Every call builds one request, performs exactly one HTTP round-trip (no retries)
/// and decodes the JSON answer into a [`DeliveryResult`]. The client holds no state
/// besides its credentials and configuration, so it can be shared freely.
pub struct NexmoClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client using the default endpoint.
    ///
    /// For more customization, use [`NexmoClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NexmoClientBuilder {
        NexmoClientBuilder::new(credentials)
    }

    /// Send a text message. The `type` is `unicode` when the text has any character
    /// above code point 127, `text` otherwise.
    pub async fn send_text(&self, request: SendText) -> Result<DeliveryResult, NexmoError> {
        tracing::debug!(
            to = request.to().raw(),
            from = request.from().as_str(),
            text_type = request.text_type().as_str(),
            "sending text message"
        );
        self.send(crate::transport::encode_text_form(&request)).await
    }

    /// Send a binary message; body and user-data header go out hex-encoded.
    pub async fn send_binary(&self, request: SendBinary) -> Result<DeliveryResult, NexmoError> {
        tracing::debug!(
            to = request.to().raw(),
            from = request.from().as_str(),
            body_len = request.body().len(),
            udh_len = request.udh().len(),
            "sending binary message"
        );
        self.send(crate::transport::encode_binary_form(&request)).await
    }

    /// Send a WAP push (titled link).
    pub async fn push_wap(&self, request: PushWap) -> Result<DeliveryResult, NexmoError> {
        tracing::debug!(
            to = request.to().raw(),
            from = request.from().as_str(),
            validity_ms = request.validity().value(),
            "sending wap push"
        );
        self.send(crate::transport::encode_wap_push_form(&request)).await
    }

    /// Answer an inbound message: the reply goes to its sender, from the number it
    /// arrived on.
    ///
    /// Errors:
    /// - Returns [`NexmoError::Validation`] when the inbound sender is blank.
    pub async fn reply(
        &self,
        inbound: &InboundMessage,
        text: MessageText,
    ) -> Result<DeliveryResult, NexmoError> {
        let request = inbound.reply(text)?;
        self.send_text(request).await
    }

    async fn send(&self, mut params: Vec<(String, String)>) -> Result<DeliveryResult, NexmoError> {
        self.credentials.push_form_params(&mut params);
        let body = crate::transport::encode_form_body(&params);

        let response = self
            .http
            .post_form(&self.endpoint, body)
            .await
            .map_err(NexmoError::Transport)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            status = response.status,
            "gateway responded"
        );

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(NexmoError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let result = crate::transport::decode_send_json_response(&response.body).map_err(|err| {
            tracing::warn!(error = %err, "gateway response could not be parsed");
            NexmoError::Parse(Box::new(err))
        })?;

        if let Some(errors) = result.error_text() {
            tracing::warn!(
                parts = result.message_count,
                errors = %errors,
                "gateway rejected message parts"
            );
        }

        Ok(result)
    }
}
