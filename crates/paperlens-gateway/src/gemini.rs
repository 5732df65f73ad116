//! Gemini Gateway Implementation
//!
//! Integration with Google's Gemini `generateContent` API.
//!
//! # Examples
//!
//! ```no_run
//! use paperlens_gateway::{GatewayConfig, GeminiGateway};
//!
//! let config = GatewayConfig::new("AIza...".to_string());
//! let gateway = GeminiGateway::new(config);
//! ```

use async_trait::async_trait;
use paperlens_domain::{GatewayError, GenerationOptions, ModelGateway};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default Gemini generateContent endpoint
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Explicit gateway configuration: credential plus endpoint
///
/// The credential is threaded in at construction time; a missing
/// credential is a construction-time error, never a panic deep inside
/// request handling.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// API key for the generative-text service
    pub api_key: String,

    /// Full generateContent endpoint URL
    pub endpoint: String,
}

impl GatewayConfig {
    /// Build a configuration with the default endpoint
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Read the credential from `GEMINI_API_KEY`
    pub fn from_env() -> Result<Self, GatewayError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GatewayError::Config(format!("{} not set", API_KEY_ENV)))?;
        if api_key.trim().is_empty() {
            return Err(GatewayError::Config(format!("{} is empty", API_KEY_ENV)));
        }
        Ok(Self::new(api_key))
    }

    /// Override the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Gateway speaking the Gemini generateContent wire format
pub struct GeminiGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK", skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

impl GeminiGateway {
    /// Create a gateway from an explicit configuration
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    async fn send(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: options.temperature,
                top_k: options.top_k,
                top_p: options.top_p,
                max_output_tokens: options.max_output_tokens,
            },
        };

        let url = format!("{}?key={}", self.config.endpoint, self.config.api_key);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                code: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(format!("failed to parse response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                GatewayError::EmptyResponse("no candidates in response".to_string())
            })?;

        debug!("gateway response length: {} chars", text.len());
        Ok(text)
    }
}
