//! Engine facade and retry controller
//!
//! One escalation path, three states, linear progression: a rich-prompt
//! attempt, then a degraded-prompt attempt, then deterministic fallback
//! synthesis. Transport failures and parse failures advance the state
//! machine identically; the fallback state cannot fail, so the two
//! extraction operations are total functions.

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::fallback::synthesize_articles;
use crate::key_terms::extract_key_terms;
use crate::mindmap::clean_mermaid;
use crate::parser::parse_articles;
use crate::prompt;
use crate::score::parse_novelty;
use paperlens_domain::{
    GenerationOptions, ModelGateway, NoveltyScore, RelatedArticle,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Which retry state produced a result, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptTier {
    /// Rich prompt over the full source text
    Primary,
    /// Simplified prompt over key terms and a truncated excerpt
    Degraded,
    /// Deterministic synthesis, no remote call
    Fallback,
}

/// Payload plus provenance: parsed from model text, or synthesized
///
/// The tag is internal bookkeeping for observability and tests. Callers
/// of the public extraction operations receive only the payload and
/// never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome<T> {
    /// Recovered from model text by some parser tier
    Parsed(T),
    /// Produced by deterministic fallback synthesis
    Synthesized(T),
}

impl<T> ExtractionOutcome<T> {
    /// Unwrap the payload, discarding the provenance tag
    pub fn into_inner(self) -> T {
        match self {
            ExtractionOutcome::Parsed(value) => value,
            ExtractionOutcome::Synthesized(value) => value,
        }
    }

    /// True if the payload came from fallback synthesis
    pub fn is_synthesized(&self) -> bool {
        matches!(self, ExtractionOutcome::Synthesized(_))
    }
}

/// The resilient structured-extraction engine
///
/// Self-contained per invocation: key terms, records, and scores are
/// freshly computed on every call, and nothing is cached across calls.
/// Concurrent extractions share only the gateway handle.
pub struct Engine<G: ModelGateway> {
    gateway: Arc<G>,
    config: EngineConfig,
}

impl<G: ModelGateway> Engine<G> {
    /// Create an engine over a gateway
    pub fn new(gateway: G, config: EngineConfig) -> Self {
        Self {
            gateway: Arc::new(gateway),
            config,
        }
    }

    /// Extract 1..=5 related articles from a research summary
    ///
    /// Total: every failure class is absorbed and terminates in
    /// deterministic synthesis.
    pub async fn extract_articles(&self, summary: &str) -> Vec<RelatedArticle> {
        self.extract_articles_outcome(summary).await.into_inner()
    }

    /// Like [`extract_articles`](Self::extract_articles), but keeps the
    /// parsed-vs-synthesized provenance tag
    pub async fn extract_articles_outcome(
        &self,
        summary: &str,
    ) -> ExtractionOutcome<Vec<RelatedArticle>> {
        match self.primary_attempt(summary).await {
            Ok(articles) => {
                info!(tier = ?AttemptTier::Primary, count = articles.len(), "articles extracted");
                return ExtractionOutcome::Parsed(articles);
            }
            Err(e) => warn!("primary attempt failed: {}", e),
        }

        match self.degraded_attempt(summary).await {
            Ok(articles) => {
                info!(tier = ?AttemptTier::Degraded, count = articles.len(), "articles extracted");
                return ExtractionOutcome::Parsed(articles);
            }
            Err(e) => warn!("degraded attempt failed: {}", e),
        }

        let key_terms = extract_key_terms(summary);
        let articles = synthesize_articles(&key_terms);
        info!(tier = ?AttemptTier::Fallback, count = articles.len(), "articles synthesized");
        ExtractionOutcome::Synthesized(articles)
    }

    /// Primary state: rich prompt, full summary, long timeout
    async fn primary_attempt(&self, summary: &str) -> Result<Vec<RelatedArticle>, EngineError> {
        let options = GenerationOptions {
            temperature: 0.7,
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: 2048,
        };
        let response = self
            .call_gateway(
                &prompt::articles_prompt(summary),
                &options,
                self.config.primary_timeout(),
            )
            .await?;
        let key_terms = extract_key_terms(summary);
        parse_articles(&response, &key_terms).map_err(EngineError::Parse)
    }

    /// Degraded state: key-term prompt, truncated excerpt, short timeout
    async fn degraded_attempt(&self, summary: &str) -> Result<Vec<RelatedArticle>, EngineError> {
        let key_terms = extract_key_terms(summary);
        let options = GenerationOptions {
            temperature: 0.3,
            top_k: None,
            top_p: None,
            max_output_tokens: 1500,
        };
        let response = self
            .call_gateway(
                &prompt::degraded_articles_prompt(
                    &key_terms,
                    summary,
                    self.config.degraded_excerpt_chars,
                ),
                &options,
                self.config.degraded_timeout(),
            )
            .await?;
        parse_articles(&response, &key_terms).map_err(EngineError::Parse)
    }

    /// Assess the novelty of a paper from its text and summary
    ///
    /// Single-attempt: the caller already supplies both inputs, so a
    /// failed call or parse goes straight to the default assessment
    /// rather than a retry.
    pub async fn extract_novelty(&self, full_text: &str, summary: &str) -> NoveltyScore {
        self.extract_novelty_outcome(full_text, summary)
            .await
            .into_inner()
    }

    /// Like [`extract_novelty`](Self::extract_novelty), with the
    /// provenance tag
    pub async fn extract_novelty_outcome(
        &self,
        full_text: &str,
        summary: &str,
    ) -> ExtractionOutcome<NoveltyScore> {
        let text_prefix = char_prefix(full_text, self.config.novelty_text_chars);
        let summary_prefix = char_prefix(summary, self.config.novelty_summary_chars);
        let result = self
            .call_gateway(
                &prompt::novelty_prompt(&text_prefix, &summary_prefix),
                &GenerationOptions::default(),
                self.config.single_timeout(),
            )
            .await;

        match result {
            Ok(response) => match parse_novelty(&response) {
                Ok(score) => {
                    info!(overall = score.overall.score, "novelty score parsed");
                    ExtractionOutcome::Parsed(score)
                }
                Err(reason) => {
                    warn!("novelty parse failed: {}", reason);
                    ExtractionOutcome::Synthesized(NoveltyScore::default_assessment())
                }
            },
            Err(e) => {
                warn!("novelty call failed: {}", e);
                ExtractionOutcome::Synthesized(NoveltyScore::default_assessment())
            }
        }
    }

    /// Generate a comprehensive summary of the paper text
    ///
    /// Fallible: there is no meaningful synthetic substitute for a
    /// summary, so gateway failures surface to the caller.
    pub async fn generate_summary(&self, text: &str) -> Result<String, EngineError> {
        let prefix = char_prefix(text, self.config.prompt_text_chars);
        self.call_gateway(
            &prompt::summary_prompt(&prefix),
            &GenerationOptions::default(),
            self.config.single_timeout(),
        )
        .await
    }

    /// Generate Mermaid mind-map code for the paper text
    pub async fn generate_mindmap(&self, text: &str) -> Result<String, EngineError> {
        let prefix = char_prefix(text, self.config.prompt_text_chars);
        let response = self
            .call_gateway(
                &prompt::mindmap_prompt(&prefix),
                &GenerationOptions::default(),
                self.config.single_timeout(),
            )
            .await?;
        Ok(clean_mermaid(&response))
    }

    /// One bounded remote call; timeout expiry is an ordinary transport
    /// failure
    async fn call_gateway(
        &self,
        prompt_text: &str,
        options: &GenerationOptions,
        limit: Duration,
    ) -> Result<String, EngineError> {
        let gateway = Arc::clone(&self.gateway);
        match timeout(limit, gateway.send(prompt_text, options)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(EngineError::Gateway(e)),
            Err(_) => Err(EngineError::Timeout),
        }
    }
}

/// First `n` characters of `s`
fn char_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
