//! Trait boundary to the generative-text service
//!
//! The engine requires exactly one capability from the outside world:
//! send a prompt, get text back. Implementations live in
//! `paperlens-gateway`; the engine only sees this trait.

use async_trait::async_trait;
use thiserror::Error;

/// Failures obtaining a response from the generative-text service
///
/// Every variant is recoverable by escalation or fallback synthesis and
/// is never surfaced through the engine's public operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Remote service unreachable or the request could not be sent
    #[error("transport error: {0}")]
    Transport(String),

    /// Remote service answered with a non-success status
    #[error("status {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body excerpt
        body: String,
    },

    /// The response arrived but carried no usable text
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// Missing or invalid gateway configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Sampling options for one generation call
///
/// The engine chooses these per attempt tier; they are constants, not
/// caller-tunable knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    /// Sampling temperature
    pub temperature: f32,

    /// Top-k sampling cutoff, if set
    pub top_k: Option<u32>,

    /// Nucleus sampling cutoff, if set
    pub top_p: Option<f32>,

    /// Maximum tokens to generate
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: None,
            top_p: None,
            max_output_tokens: 2048,
        }
    }
}

/// The one operation the engine consumes: prompt in, text out
///
/// Implementations wrap a specific provider and its wire format. The
/// engine bounds each call with its own timeout; implementations need
/// not enforce one.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Send a prompt and return the generated text
    async fn send(&self, prompt: &str, options: &GenerationOptions)
        -> Result<String, GatewayError>;
}
