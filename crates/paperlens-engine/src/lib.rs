//! Paperlens Extraction Engine
//!
//! Turns unreliable free-form text produced by a generative-text service
//! into a small set of validated, bounded structured records. The caller
//! never sees a failure: every failure class is absorbed internally and
//! terminates in deterministic fallback synthesis.
//!
//! # Architecture
//!
//! ```text
//! Summary text → Engine → gateway (rich prompt)  → tiered parser ─┐
//!                  │                                 parse failed  │
//!                  ├──────→ gateway (degraded prompt) → parser ────┤
//!                  │                                 still failed  │
//!                  └──────→ deterministic fallback synthesis ──────┴→ 1..5 articles
//! ```
//!
//! # Key Features
//!
//! - **Tiered parsing**: direct JSON, fenced-block recovery, then a
//!   line-oriented heuristic reconstruction
//! - **One escalation**: a single retry with a shorter, key-term-driven
//!   prompt before giving up on the remote service
//! - **Deterministic fallback**: five complete articles synthesized from
//!   the key-term set, no network, never fails
//! - **Deterministic URLs**: domain-classified reference URLs filled from
//!   a content fingerprint instead of a random source
//!
//! # Example Usage
//!
//! ```
//! use paperlens_engine::{Engine, EngineConfig};
//! use paperlens_gateway::MockGateway;
//!
//! # async fn example() {
//! let gateway = MockGateway::new("no structure here at all");
//! let engine = Engine::new(gateway, EngineConfig::default());
//!
//! // Infallible: unparseable model output still yields articles.
//! let articles = engine.extract_articles("machine learning in healthcare").await;
//! assert!(!articles.is_empty() && articles.len() <= 5);
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod fallback;
mod key_terms;
mod mindmap;
mod parser;
mod prompt;
mod score;
mod url;

#[cfg(test)]
mod tests;

pub use config::EngineConfig;
pub use engine::{AttemptTier, Engine, ExtractionOutcome};
pub use error::EngineError;
pub use key_terms::extract_key_terms;
pub use self::url::synthesize_url;
