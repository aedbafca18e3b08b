//! GigaChat client implementation
//!
//! Async HTTP client for the GigaChat REST API: OAuth token exchange plus
//! chat completions with function calling.

use async_trait::async_trait;
use rand::Rng;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use crate::core::config::GigaChatConfig;
use crate::core::{Message, Result, StorefrontError, ToolCall, ToolDefinition};
use crate::llm::traits::{GenerateOptions, LLMProvider, LLMResponse, TokenUsage};

/// Scope used when none is configured
pub const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "GigaChat";

/// Refresh tokens this long before they expire
const TOKEN_REFRESH_MARGIN_MS: u64 = 60_000;

const BACKOFF_BASE_MS: u64 = 500;
const BACKOFF_MAX_MS: u64 = 8_000;

/// GigaChat API client
pub struct GigaChatClient {
    client: Client,
    credentials: Option<String>,
    scope: String,
    auth_url: Url,
    chat_url: Url,
    max_retries: u32,
    token: Mutex<Option<AccessToken>>,
}

/// Cached OAuth access token
#[derive(Debug, Clone, Deserialize)]
struct AccessToken {
    access_token: String,
    /// Expiry as unix milliseconds
    expires_at: u64,
}

impl AccessToken {
    fn is_fresh(&self, now_ms: u64) -> bool {
        self.expires_at > now_ms + TOKEN_REFRESH_MARGIN_MS
    }
}

/// GigaChat chat request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<GigaMessage>,
    #[serde(skip_serializing_if = "no_functions")]
    functions: &'a [ToolDefinition],
    #[serde(skip_serializing_if = "Option::is_none")]
    function_call: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// GigaChat message format
#[derive(Debug, Serialize, Deserialize)]
struct GigaMessage {
    role: String,
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_call: Option<GigaFunctionCall>,
}

/// Function call requested by the model
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GigaFunctionCall {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// GigaChat chat response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: String,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: GigaMessage,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

fn no_functions(functions: &&[ToolDefinition]) -> bool {
    functions.is_empty()
}

fn parse_url(raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| StorefrontError::config(format!("Invalid GigaChat URL '{}': {}", raw, e)))
}

/// Append `path` to `base`, keeping any path `base` already has
fn endpoint(base: &str, path: &str) -> Result<Url> {
    let base = if base.ends_with('/') {
        parse_url(base)?
    } else {
        parse_url(&format!("{}/", base))?
    };

    base.join(path)
        .map_err(|e| StorefrontError::config(format!("Invalid GigaChat path '{}': {}", path, e)))
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Delay before retry number `attempt` (0-based): exponential with jitter
fn backoff_delay(attempt: u32) -> Duration {
    let exp = BACKOFF_BASE_MS.saturating_mul(1u64 << attempt.min(16));
    let jitter = rand::rng().random_range(0..=BACKOFF_BASE_MS / 2);
    Duration::from_millis(exp.min(BACKOFF_MAX_MS) + jitter)
}

fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

impl GigaChatClient {
    /// Create a client from configuration
    ///
    /// Credentials are not checked here; a missing key surfaces as an
    /// authentication error on the first request.
    pub fn from_config(config: &GigaChatConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if !config.verify_ssl_certs {
            warn!("TLS certificate verification is disabled for GigaChat endpoints");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            client: builder.build()?,
            credentials: config.credentials.clone(),
            scope: config
                .scope
                .clone()
                .unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: parse_url(&config.auth_url)?,
            chat_url: endpoint(&config.base_url, "chat/completions")?,
            max_retries: config.max_retries,
            token: Mutex::new(None),
        })
    }

    /// Convert internal Message to GigaChat format
    fn to_giga_message(msg: &Message) -> GigaMessage {
        GigaMessage {
            role: msg.role.clone(),
            content: msg.content.clone(),
            name: msg.name.clone(),
            // GigaChat accepts one function call per message
            function_call: msg
                .tool_calls
                .as_ref()
                .and_then(|calls| calls.first())
                .map(|tc| GigaFunctionCall {
                    name: tc.name.clone(),
                    arguments: tc.arguments.clone(),
                }),
        }
    }

    /// Convert GigaChat response to LLMResponse
    fn to_llm_response(response: ChatResponse) -> Result<LLMResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| StorefrontError::upstream("GigaChat returned no choices"))?;

        let tool_calls = choice
            .message
            .function_call
            .into_iter()
            .map(|fc| ToolCall::new(fc.name, fc.arguments))
            .collect();

        Ok(LLMResponse {
            content: choice.message.content,
            tool_calls,
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            model: response.model,
        })
    }

    /// Send a request, retrying transport failures and 5xx/429 responses
    async fn send_with_retry<F>(&self, build: F) -> Result<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut attempt = 0;
        loop {
            match build().send().await {
                Ok(response)
                    if is_retryable_status(response.status()) && attempt < self.max_retries =>
                {
                    warn!(status = %response.status(), attempt, "retrying GigaChat request");
                }
                Ok(response) => return Ok(response),
                Err(e) => {
                    let err = StorefrontError::from(e);
                    if !err.is_transient() || attempt >= self.max_retries {
                        return Err(err);
                    }
                    warn!(error = %err, attempt, "retrying GigaChat request");
                }
            }

            tokio::time::sleep(backoff_delay(attempt)).await;
            attempt += 1;
        }
    }

    /// Return a valid access token, exchanging credentials when needed
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(now_ms())) {
            return Ok(token.access_token.clone());
        }

        let credentials = self
            .credentials
            .as_deref()
            .ok_or_else(|| StorefrontError::auth("GIGACHAT_KEY is not set"))?;

        debug!(scope = %self.scope, "requesting GigaChat access token");

        let response = self
            .send_with_retry(|| {
                self.client
                    .post(self.auth_url.clone())
                    .header("Authorization", format!("Basic {}", credentials))
                    .header("RqUID", uuid::Uuid::new_v4().to_string())
                    .header("Accept", "application/json")
                    .form(&[("scope", self.scope.as_str())])
            })
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(StorefrontError::auth(format!(
                "Token request failed ({}): {}",
                status, error_text
            )));
        }

        let token: AccessToken = response
            .json()
            .await
            .map_err(|e| StorefrontError::auth(format!("Failed to parse token response: {}", e)))?;
        let value = token.access_token.clone();
        *cached = Some(token);

        Ok(value)
    }

    /// Drop the cached token so the next call re-authenticates
    async fn invalidate_token(&self) {
        *self.token.lock().await = None;
    }
}

#[async_trait]
impl LLMProvider for GigaChatClient {
    async fn chat_with_tools(
        &self,
        model: &str,
        messages: &[Message],
        tools: &[ToolDefinition],
        options: Option<GenerateOptions>,
    ) -> Result<LLMResponse> {
        let options = options.unwrap_or_default();
        let request = ChatRequest {
            model,
            messages: messages.iter().map(Self::to_giga_message).collect(),
            functions: tools,
            function_call: (!tools.is_empty()).then_some("auto"),
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        debug!(request = %serde_json::to_string(&request)?, "GigaChat request");

        let token = self.access_token().await?;
        let response = self
            .send_with_retry(|| {
                self.client
                    .post(self.chat_url.clone())
                    .bearer_auth(&token)
                    .json(&request)
            })
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.invalidate_token().await;
            let error_text = response.text().await.unwrap_or_default();
            return Err(StorefrontError::auth(format!(
                "GigaChat rejected the access token: {}",
                error_text
            )));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StorefrontError::upstream(format!(
                "GigaChat API error ({}): {}",
                status, error_text
            )));
        }

        let response_text = response.text().await?;
        debug!(response = %response_text, "GigaChat response");

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            StorefrontError::upstream(format!("Failed to parse response: {}", e))
        })?;

        Self::to_llm_response(chat_response)
    }

    fn name(&self) -> &str {
        "gigachat"
    }
}
