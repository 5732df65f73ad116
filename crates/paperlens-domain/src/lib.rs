//! Paperlens Domain Layer
//!
//! Core types and trait seams for the resilient structured-extraction
//! engine. This crate defines the value objects all other layers depend
//! upon and the one capability the engine consumes from the outside
//! world: "send a prompt, get text back, subject to timeout".
//!
//! ## Key Concepts
//!
//! - **RelatedArticle**: a validated, bounded description of a related
//!   work (title, description, authors, venue, year, citations, URL)
//! - **NoveltyScore**: four scored facets in [1, 100], each with a
//!   free-text rationale
//! - **KeyTermSet**: an ordered, never-empty set of up to 8 domain terms
//!   derived from source text
//! - **ModelGateway**: the trait boundary to the generative-text service

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod gateway;
pub mod key_terms;
pub mod score;

// Re-exports for convenience
pub use article::RelatedArticle;
pub use gateway::{GatewayError, GenerationOptions, ModelGateway};
pub use key_terms::KeyTermSet;
pub use score::{NoveltyScore, ScoreFacet};
