//! Configuration for the extraction engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the extraction engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Timeout for the primary (rich prompt) remote call, seconds
    pub primary_timeout_secs: u64,

    /// Timeout for the degraded (simplified prompt) remote call, seconds
    pub degraded_timeout_secs: u64,

    /// Timeout for single-attempt calls (novelty, summary, mind map), seconds
    pub single_timeout_secs: u64,

    /// Source-text excerpt length used in the degraded prompt, characters
    pub degraded_excerpt_chars: usize,

    /// Source-text prefix sent for summary and mind-map prompts, characters
    pub prompt_text_chars: usize,

    /// Summary prefix sent in the novelty prompt, characters
    pub novelty_summary_chars: usize,

    /// Paper-text prefix sent in the novelty prompt, characters
    pub novelty_text_chars: usize,
}

impl EngineConfig {
    /// Primary-attempt timeout as a Duration
    pub fn primary_timeout(&self) -> Duration {
        Duration::from_secs(self.primary_timeout_secs)
    }

    /// Degraded-attempt timeout as a Duration
    pub fn degraded_timeout(&self) -> Duration {
        Duration::from_secs(self.degraded_timeout_secs)
    }

    /// Single-attempt timeout as a Duration
    pub fn single_timeout(&self) -> Duration {
        Duration::from_secs(self.single_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.primary_timeout_secs == 0 {
            return Err("primary_timeout_secs must be greater than 0".to_string());
        }
        if self.degraded_timeout_secs == 0 {
            return Err("degraded_timeout_secs must be greater than 0".to_string());
        }
        if self.single_timeout_secs == 0 {
            return Err("single_timeout_secs must be greater than 0".to_string());
        }
        if self.degraded_excerpt_chars == 0 {
            return Err("degraded_excerpt_chars must be greater than 0".to_string());
        }
        if self.prompt_text_chars == 0 {
            return Err("prompt_text_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Aggressive preset: shorter timeouts for interactive use
    pub fn aggressive() -> Self {
        Self {
            primary_timeout_secs: 45,
            degraded_timeout_secs: 30,
            single_timeout_secs: 30,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            primary_timeout_secs: 90,
            degraded_timeout_secs: 60,
            single_timeout_secs: 60,
            degraded_excerpt_chars: 500,
            prompt_text_chars: 10_000,
            novelty_summary_chars: 2_000,
            novelty_text_chars: 3_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_aggressive_config_is_valid() {
        let config = EngineConfig::aggressive();
        assert!(config.validate().is_ok());
        assert!(config.primary_timeout_secs < EngineConfig::default().primary_timeout_secs);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = EngineConfig::default();
        config.primary_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.primary_timeout_secs, parsed.primary_timeout_secs);
        assert_eq!(config.degraded_excerpt_chars, parsed.degraded_excerpt_chars);
    }
}
