//! Tiered recovery of article records from raw model text
//!
//! The model may return a clean JSON array, JSON buried in prose or
//! code fences, or free text that only gestures at structure. The
//! tiers below are attempted in order; the first one that produces at
//! least one minimally valid record wins. All tiers failing is a parse
//! failure, returned internally to trigger escalation - it is never
//! surfaced to the engine's caller.

use crate::fallback::enhance_description;
use crate::url::synthesize_url;
use paperlens_domain::article::{MAX_ARTICLES, URL_PLACEHOLDER};
use paperlens_domain::{KeyTermSet, RelatedArticle};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Default author pool for records missing an author list
const DEFAULT_AUTHORS: [&str; 3] = ["Dr. Sarah Johnson", "Dr. Michael Chen", "Dr. Emily Rodriguez"];

/// Default publication year for records missing one
const DEFAULT_YEAR: &str = "2023";

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());
static FENCED_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());
static BRACKET_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*?\}\s*\]").unwrap());

static NUMBERED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\d+\.\s*["']?([^"']+)["']?"#).unwrap());
static LABELED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^Title:\s*["']?([^"']+)["']?"#).unwrap());
static QUOTED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["']([^"']{20,})["']"#).unwrap());

static FOUR_DIGIT_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{4})\b").unwrap());
static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Parse raw model text into validated article records
///
/// Returns `Err` with a reason string when no tier produced a minimally
/// valid result; the engine treats that exactly like a transport
/// failure.
pub(crate) fn parse_articles(
    raw: &str,
    key_terms: &KeyTermSet,
) -> Result<Vec<RelatedArticle>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("response text is empty".to_string());
    }

    // Tier 1: the whole response is the target format.
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if let Some(articles) = articles_from_json(&value, key_terms) {
            debug!("direct decode recovered {} articles", articles.len());
            return Ok(articles);
        }
    }

    // Tier 2: JSON buried in code fences or a bracketed array in prose.
    for candidate in fenced_candidates(trimmed) {
        if let Ok(value) = serde_json::from_str::<Value>(&candidate) {
            if let Some(articles) = articles_from_json(&value, key_terms) {
                debug!("fenced-block decode recovered {} articles", articles.len());
                return Ok(articles);
            }
        }
    }

    // Tier 3: line-oriented heuristic reconstruction.
    let candidates = scan_article_lines(trimmed);
    if !candidates.is_empty() {
        let articles = finish_heuristic_candidates(candidates, key_terms);
        if !articles.is_empty() {
            debug!("heuristic reconstruction recovered {} articles", articles.len());
            return Ok(articles);
        }
    }

    Err("no tier produced a minimally valid article".to_string())
}

/// JSON regions worth attempting a decode on, in priority order
pub(crate) fn fenced_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(captures) = FENCED_JSON.captures(text) {
        candidates.push(captures[1].to_string());
    }
    if let Some(captures) = FENCED_ANY.captures(text) {
        candidates.push(captures[1].to_string());
    }
    if let Some(m) = BRACKET_ARRAY.find(text) {
        candidates.push(m.as_str().to_string());
    }
    candidates
}

/// Convert a decoded JSON value into validated articles
///
/// `None` means the value did not have the target shape (a non-empty
/// array with at least one minimally valid entry).
fn articles_from_json(value: &Value, key_terms: &KeyTermSet) -> Option<Vec<RelatedArticle>> {
    let items = value.as_array()?;
    let mut articles = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match article_from_value(item, index, key_terms) {
            Some(article) => articles.push(article),
            None => warn!("dropping article candidate {}: missing title or description", index),
        }
        if articles.len() == MAX_ARTICLES {
            break;
        }
    }
    if articles.is_empty() {
        None
    } else {
        Some(articles)
    }
}

/// Build one validated article from a loosely shaped JSON object
///
/// Field names from both the engine's wire format and the model's
/// habitual vocabulary are accepted (`venue`/`journal`, `year`/`date`,
/// `citationCount`/`citations`). Missing optional fields get the same
/// defaults heuristic reconstruction uses; a missing or placeholder URL
/// is synthesized.
fn article_from_value(value: &Value, index: usize, key_terms: &KeyTermSet) -> Option<RelatedArticle> {
    let obj = value.as_object()?;

    let title = obj.get("title")?.as_str()?.trim();
    let description = obj.get("description")?.as_str()?.trim();
    if title.is_empty() || description.is_empty() {
        return None;
    }

    let authors: Vec<String> = obj
        .get("authors")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|a| a.as_str())
                .map(|a| a.to_string())
                .collect()
        })
        .unwrap_or_default();
    let authors = if authors.is_empty() {
        default_authors()
    } else {
        authors
    };

    let venue = obj
        .get("venue")
        .or_else(|| obj.get("journal"))
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .unwrap_or_else(|| default_venue(key_terms));

    let year = obj
        .get("year")
        .or_else(|| obj.get("date"))
        .map(coerce_year)
        .unwrap_or_else(|| DEFAULT_YEAR.to_string());

    let citation_count = obj
        .get("citationCount")
        .or_else(|| obj.get("citations"))
        .and_then(coerce_count)
        .unwrap_or_else(|| default_citations(index));

    let url = obj
        .get("url")
        .and_then(|v| v.as_str())
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty() && u != URL_PLACEHOLDER && u.starts_with("https://"))
        .unwrap_or_else(|| synthesize_url(title, &authors, &year, key_terms));

    let mut article = RelatedArticle {
        title: title.to_string(),
        description: description.to_string(),
        authors,
        venue,
        year,
        citation_count,
        url,
    };
    article.cap_lengths();

    match article.validate() {
        Ok(()) => Some(article),
        Err(reason) => {
            warn!("dropping article candidate {}: {}", index, reason);
            None
        }
    }
}

fn default_authors() -> Vec<String> {
    DEFAULT_AUTHORS.iter().map(|a| a.to_string()).collect()
}

fn default_venue(key_terms: &KeyTermSet) -> String {
    format!("Journal of {}", key_terms.first())
}

fn default_citations(index: usize) -> u32 {
    30 + 5 * index as u32
}

/// Accept "2023", 2023, or text containing a 4-digit year
fn coerce_year(value: &Value) -> String {
    if let Some(n) = value.as_u64() {
        let text = n.to_string();
        if text.len() == 4 {
            return text;
        }
    }
    if let Some(text) = value.as_str() {
        if let Some(captures) = FOUR_DIGIT_YEAR.captures(text) {
            return captures[1].to_string();
        }
    }
    DEFAULT_YEAR.to_string()
}

/// Accept 25, "25", or "approx. 25 citations"
fn coerce_count(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_str()
        .and_then(|text| LEADING_INT.find(text))
        .and_then(|m| m.as_str().parse().ok())
}

/// A partially reconstructed article from heuristic line scanning
#[derive(Debug, Default)]
struct CandidateArticle {
    title: String,
    description: String,
}

/// State of the line scanner, explicit so flush conditions stay auditable
#[derive(Debug, PartialEq)]
enum ScanState {
    /// No candidate open; looking for a title-shaped line
    AwaitingTitle,
    /// A candidate is open; description lines accumulate onto it
    Accumulating,
}

/// Tier 3: reconstruct candidates from title-shaped and prose lines
///
/// A numbered-item, `Title:`-prefixed, or long-quoted line opens a new
/// candidate and flushes the previous one if it accumulated both a
/// title and a description. Metadata lines are skipped; other lines
/// longer than 20 characters that are not bullet-prefixed extend the
/// open candidate's description.
fn scan_article_lines(text: &str) -> Vec<CandidateArticle> {
    let mut candidates = Vec::new();
    let mut current = CandidateArticle::default();
    let mut state = ScanState::AwaitingTitle;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(title) = match_title(line) {
            if state == ScanState::Accumulating && !current.description.is_empty() {
                candidates.push(std::mem::take(&mut current));
            }
            current = CandidateArticle {
                title,
                description: String::new(),
            };
            state = ScanState::Accumulating;
            continue;
        }

        if state == ScanState::Accumulating && is_description_line(line) {
            if current.description.is_empty() {
                current.description = line.to_string();
            } else {
                current.description.push(' ');
                current.description.push_str(line);
            }
        }
    }

    if state == ScanState::Accumulating && !current.description.is_empty() {
        candidates.push(current);
    }

    candidates
}

fn match_title(line: &str) -> Option<String> {
    for pattern in [&NUMBERED_TITLE, &LABELED_TITLE, &QUOTED_TITLE] {
        if let Some(captures) = pattern.captures(line) {
            let title = captures[1].trim().to_string();
            if !title.is_empty() {
                return Some(title);
            }
        }
    }
    None
}

fn is_description_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    let is_metadata = [
        "author:", "authors:", "journal:", "citation:", "citations:", "url:", "date:",
    ]
    .iter()
    .any(|marker| lower.contains(marker));
    let is_bullet = line.starts_with(['\u{2022}', '-', '*'])
        || ["1.", "2.", "3.", "4.", "5."]
            .iter()
            .any(|prefix| line.starts_with(prefix));

    !is_metadata && !is_bullet && line.chars().count() > 20
}

/// Promote heuristic candidates to full records: defaults, description
/// enhancement, synthesized URL, length caps, field validation
fn finish_heuristic_candidates(
    candidates: Vec<CandidateArticle>,
    key_terms: &KeyTermSet,
) -> Vec<RelatedArticle> {
    candidates
        .into_iter()
        .take(MAX_ARTICLES)
        .enumerate()
        .filter_map(|(index, candidate)| {
            let description = enhance_description(&candidate.description, key_terms);
            let authors = default_authors();
            let url = synthesize_url(&candidate.title, &authors, DEFAULT_YEAR, key_terms);
            let mut article = RelatedArticle {
                title: candidate.title,
                description,
                authors,
                venue: default_venue(key_terms),
                year: DEFAULT_YEAR.to_string(),
                citation_count: default_citations(index),
                url,
            };
            article.cap_lengths();
            match article.validate() {
                Ok(()) => Some(article),
                Err(reason) => {
                    warn!("dropping heuristic candidate {}: {}", index, reason);
                    None
                }
            }
        })
        .collect()
}
