//! Paperlens Gateway Layer
//!
//! Implementations of the `ModelGateway` trait from `paperlens-domain`.
//!
//! # Gateways
//!
//! - `MockGateway`: deterministic scripted gateway for testing
//! - `GeminiGateway`: Google Gemini `generateContent` API integration
//!
//! # Examples
//!
//! ```
//! use paperlens_gateway::MockGateway;
//! use paperlens_domain::{GenerationOptions, ModelGateway};
//!
//! # async fn example() {
//! let gateway = MockGateway::new("Hello from the model!");
//! let text = gateway
//!     .send("test prompt", &GenerationOptions::default())
//!     .await
//!     .unwrap();
//! assert_eq!(text, "Hello from the model!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;

use async_trait::async_trait;
use paperlens_domain::{GatewayError, GenerationOptions, ModelGateway};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub use gemini::{GatewayConfig, GeminiGateway};

/// One scripted reply for the mock gateway
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with a transport error carrying this message
    TransportError(String),
}

/// Scripted gateway for deterministic testing
///
/// Replies are consumed in order; once the script is exhausted the
/// default response is returned for every further call. No network
/// access.
///
/// # Examples
///
/// ```
/// use paperlens_gateway::{MockGateway, MockReply};
/// use paperlens_domain::{GenerationOptions, ModelGateway};
///
/// # async fn example() {
/// let gateway = MockGateway::new("[]").with_script(vec![
///     MockReply::TransportError("connection refused".to_string()),
///     MockReply::Text("second attempt answer".to_string()),
/// ]);
///
/// let opts = GenerationOptions::default();
/// assert!(gateway.send("p", &opts).await.is_err());
/// assert_eq!(gateway.send("p", &opts).await.unwrap(), "second attempt answer");
/// assert_eq!(gateway.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockGateway {
    default_response: String,
    script: Arc<Mutex<VecDeque<MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockGateway {
    /// Create a mock that returns a fixed response for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock whose every call fails with a transport error
    pub fn unreachable() -> Self {
        Self {
            default_response: String::new(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue scripted replies, consumed in call order
    pub fn with_script(self, replies: Vec<MockReply>) -> Self {
        self.script.lock().unwrap().extend(replies);
        self
    }

    /// Number of times `send` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn send(
        &self,
        _prompt: &str,
        _options: &GenerationOptions,
    ) -> Result<String, GatewayError> {
        *self.call_count.lock().unwrap() += 1;

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::TransportError(message)) => {
                Err(GatewayError::Transport(message))
            }
            None if self.default_response.is_empty() => {
                Err(GatewayError::Transport("mock gateway unreachable".to_string()))
            }
            None => Ok(self.default_response.clone()),
        }
    }
}
