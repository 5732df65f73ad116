//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paperlens CLI - analyze research papers via a generative-text service.
#[derive(Debug, Parser)]
#[command(name = "paperlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API key for the generative-text service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Override the service endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Use the aggressive (short-timeout) engine preset
    #[arg(long)]
    pub aggressive: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a comprehensive summary of a paper
    Summary {
        /// Path to a plain-text file with the paper text
        text: PathBuf,
    },

    /// Find related articles for a paper summary
    Articles {
        /// Path to a plain-text file with the paper summary
        summary: PathBuf,
    },

    /// Calculate a novelty score for a paper
    Novelty {
        /// Path to a plain-text file with the paper text
        text: PathBuf,

        /// Path to a plain-text file with the paper summary
        summary: PathBuf,
    },

    /// Generate Mermaid mind-map code for a paper
    Mindmap {
        /// Path to a plain-text file with the paper text
        text: PathBuf,
    },
}
