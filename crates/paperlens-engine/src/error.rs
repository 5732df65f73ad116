//! Error types for the extraction engine

use paperlens_domain::GatewayError;
use thiserror::Error;

/// Errors internal to the engine, or surfaced by its fallible
/// operations (summary and mind-map generation)
///
/// The two extraction operations never surface these: transport and
/// parse failures only trigger escalation and, ultimately, fallback
/// synthesis.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Failure obtaining a response from the remote service
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// The remote call did not complete within its timeout
    #[error("gateway call timed out")]
    Timeout,

    /// No parse tier produced a minimally valid result
    #[error("parse failure: {0}")]
    Parse(String),

    /// Invalid engine configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    /// True for failures that advance the retry controller to its next
    /// state (transport and parse failures are treated identically)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::Gateway(_) | EngineError::Timeout | EngineError::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_and_parse_both_recoverable() {
        let transport = EngineError::Gateway(GatewayError::Transport("down".to_string()));
        let parse = EngineError::Parse("no tier succeeded".to_string());
        assert!(transport.is_recoverable());
        assert!(parse.is_recoverable());
        assert!(EngineError::Timeout.is_recoverable());
    }

    #[test]
    fn test_config_error_not_recoverable() {
        assert!(!EngineError::Config("bad".to_string()).is_recoverable());
    }
}
