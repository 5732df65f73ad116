//! Tiered recovery of the novelty score from raw model text
//!
//! Structurally a thin sibling of the article parser: direct decode,
//! fenced-block decode, then a line heuristic specialized for the fixed
//! 4-facet schema. Scoring is single-attempt - total failure yields the
//! documented default assessment at the engine level, not a retry.

use crate::parser::fenced_candidates;
use paperlens_domain::{NoveltyScore, ScoreFacet};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

static FIRST_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Parse raw model text into a novelty score
///
/// Returns `Err` with a reason string if no tier recovered a nonzero
/// overall score.
pub(crate) fn parse_novelty(raw: &str) -> Result<NoveltyScore, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("response text is empty".to_string());
    }

    // Tier 1: the whole response is the score object.
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(score) = score_from_json(&value) {
            debug!("direct decode recovered novelty score {}", score.overall.score);
            return Ok(score);
        }
    }

    // Tier 2: score object buried in code fences.
    for candidate in fenced_candidates(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(&candidate) {
            if let Some(score) = score_from_json(&value) {
                debug!("fenced-block decode recovered novelty score {}", score.overall.score);
                return Ok(score);
            }
        }
    }

    // Tier 4: line heuristic over facet-name/colon lines.
    if let Some(score) = scan_score_lines(trimmed) {
        debug!("heuristic scan recovered novelty score {}", score.overall.score);
        return Ok(score);
    }

    Err("no tier produced a nonzero overall score".to_string())
}

/// Convert a decoded JSON object into a score, tolerating both the
/// engine's wire shape and the flat `*_score`/`*_reason` vocabulary the
/// model tends to produce
fn score_from_json(value: &Value) -> Option<NoveltyScore> {
    let obj = value.as_object()?;

    let overall = facet_from_json(obj, "overall", "overall_score", "overall_assessment")?;
    if overall.score == 0 {
        return None;
    }
    let overall = ScoreFacet::new(overall.score, overall.rationale);

    let facet = |name: &str, score_key: &str, reason_key: &str| {
        facet_from_json(obj, name, score_key, reason_key)
            .filter(|f| f.score > 0)
            .map(|f| ScoreFacet::new(f.score, f.rationale))
            .unwrap_or_else(|| ScoreFacet::new(overall.score, ""))
    };
    let methodological = facet("methodological", "methodological_score", "methodological_reason");
    let conceptual = facet("conceptual", "conceptual_score", "conceptual_reason");
    let impact = facet("impact", "impact_score", "impact_reason");

    Some(NoveltyScore {
        methodological,
        conceptual,
        impact,
        overall,
    })
}

/// Raw facet values before clamping
struct RawFacet {
    score: u32,
    rationale: String,
}

fn facet_from_json(
    obj: &serde_json::Map<String, Value>,
    name: &str,
    score_key: &str,
    reason_key: &str,
) -> Option<RawFacet> {
    // Nested wire shape: {"overall": {"score": 85, "rationale": "..."}}
    if let Some(nested) = obj.get(name).and_then(|v| v.as_object()) {
        let score = nested.get("score").and_then(coerce_score)?;
        let rationale = nested
            .get("rationale")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        return Some(RawFacet { score, rationale });
    }

    // Flat shape: {"overall_score": 85, "overall_assessment": "..."}
    let score = obj.get(score_key).and_then(coerce_score)?;
    let rationale = obj
        .get(reason_key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    Some(RawFacet { score, rationale })
}

/// Accept 85, "85", or "85/100"
fn coerce_score(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_str()
        .and_then(|text| FIRST_INT.find(text))
        .and_then(|m| m.as_str().parse().ok())
}

/// Tier 4: scan lines for a facet token together with a colon; the
/// first integer after the colon is the score, the remainder of the
/// line the rationale
fn scan_score_lines(text: &str) -> Option<NoveltyScore> {
    let mut methodological: Option<RawFacet> = None;
    let mut conceptual: Option<RawFacet> = None;
    let mut impact: Option<RawFacet> = None;
    let mut overall: Option<RawFacet> = None;

    for line in text.lines() {
        let lower = line.to_lowercase();
        let Some((_, rest)) = line.split_once(':') else {
            continue;
        };
        let slot = if lower.contains("methodological") {
            &mut methodological
        } else if lower.contains("conceptual") {
            &mut conceptual
        } else if lower.contains("impact") {
            &mut impact
        } else if lower.contains("overall") {
            &mut overall
        } else {
            continue;
        };
        if slot.is_some() {
            continue;
        }
        if let Some(score) = FIRST_INT
            .find(rest)
            .and_then(|m| m.as_str().parse::<u32>().ok())
        {
            *slot = Some(RawFacet {
                score,
                rationale: rest.trim().to_string(),
            });
        }
    }

    let overall = overall.filter(|f| f.score > 0)?;
    let overall = ScoreFacet::new(overall.score, overall.rationale);
    let fill = |facet: Option<RawFacet>| {
        facet
            .filter(|f| f.score > 0)
            .map(|f| ScoreFacet::new(f.score, f.rationale))
            .unwrap_or_else(|| ScoreFacet::new(overall.score, ""))
    };
    let methodological = fill(methodological);
    let conceptual = fill(conceptual);
    let impact = fill(impact);

    Some(NoveltyScore {
        methodological,
        conceptual,
        impact,
        overall,
    })
}
