//! Novelty score - the fixed 4-facet numeric schema

use serde::{Deserialize, Serialize};

/// Default overall score when nothing can be recovered from model text
pub const DEFAULT_OVERALL_SCORE: u32 = 70;

/// Default rationale accompanying the default overall score
pub const DEFAULT_ASSESSMENT: &str = "Default assessment as parsing failed.";

/// One scored facet: an integer in [1, 100] plus a free-text rationale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFacet {
    /// Score value, clamped to [1, 100]
    pub score: u32,

    /// Explanation for the score, possibly empty
    pub rationale: String,
}

impl ScoreFacet {
    /// Build a facet, clamping the score into [1, 100]
    pub fn new(score: u32, rationale: impl Into<String>) -> Self {
        Self {
            score: score.clamp(1, 100),
            rationale: rationale.into(),
        }
    }
}

/// Novelty assessment of a research paper
///
/// Four facets in [1, 100]. When no score can be recovered from model
/// text the engine falls back to [`NoveltyScore::default_assessment`],
/// which carries the documented overall score of 70.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoveltyScore {
    /// Methodological innovation
    pub methodological: ScoreFacet,

    /// Conceptual originality
    pub conceptual: ScoreFacet,

    /// Potential impact
    pub impact: ScoreFacet,

    /// Overall novelty
    pub overall: ScoreFacet,
}

impl NoveltyScore {
    /// The documented fallback assessment (overall 70, default rationale)
    pub fn default_assessment() -> Self {
        Self {
            methodological: ScoreFacet::new(DEFAULT_OVERALL_SCORE, ""),
            conceptual: ScoreFacet::new(DEFAULT_OVERALL_SCORE, ""),
            impact: ScoreFacet::new(DEFAULT_OVERALL_SCORE, ""),
            overall: ScoreFacet::new(DEFAULT_OVERALL_SCORE, DEFAULT_ASSESSMENT),
        }
    }
}
