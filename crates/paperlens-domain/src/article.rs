//! Related-article record - the primary output of the extraction engine

use serde::{Deserialize, Serialize};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum description length in characters
pub const DESCRIPTION_MAX_CHARS: usize = 300;

/// Maximum number of articles returned by a single extraction
pub const MAX_ARTICLES: usize = 5;

/// Placeholder URL value that must never survive validation
pub const URL_PLACEHOLDER: &str = "#";

/// A validated structured description of a related research work
///
/// Every instance emitted by the engine satisfies the field bounds:
/// non-empty title of at most 100 characters, non-empty description of
/// at most 300 characters, at least one author, a 4-digit year, and a
/// non-placeholder `https://` URL. Records are created fresh per
/// extraction call and owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedArticle {
    /// Complete academic paper title
    pub title: String,

    /// How the paper relates to the analyzed research
    pub description: String,

    /// Ordered author names
    pub authors: Vec<String>,

    /// Journal or conference name
    pub venue: String,

    /// Publication year, 4 digits
    pub year: String,

    /// Citation count
    pub citation_count: u32,

    /// External reference URL
    pub url: String,
}

impl RelatedArticle {
    /// Validate the field invariants
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("title is empty".to_string());
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(format!(
                "title exceeds {} characters",
                TITLE_MAX_CHARS
            ));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err("description is empty".to_string());
        }
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(format!(
                "description exceeds {} characters",
                DESCRIPTION_MAX_CHARS
            ));
        }
        if self.authors.is_empty() {
            return Err("authors is empty".to_string());
        }
        if self.year.len() != 4 || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("year '{}' is not a 4-digit string", self.year));
        }
        if self.url.is_empty() || self.url == URL_PLACEHOLDER {
            return Err("url is missing or a placeholder".to_string());
        }
        if !self.url.starts_with("https://") {
            return Err(format!("url '{}' does not start with https://", self.url));
        }
        Ok(())
    }

    /// Cap title and description to their maximum lengths
    pub fn cap_lengths(&mut self) {
        self.title = truncate_chars(&self.title, TITLE_MAX_CHARS);
        self.description = truncate_chars(&self.description, DESCRIPTION_MAX_CHARS);
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RelatedArticle {
        RelatedArticle {
            title: "Deep Learning for Clinical Diagnosis".to_string(),
            description: "Examines neural approaches to diagnostic imaging.".to_string(),
            authors: vec!["Dr. Sarah Johnson".to_string()],
            venue: "Journal of Medical AI".to_string(),
            year: "2023".to_string(),
            citation_count: 42,
            url: "https://arxiv.org/abs/2301.12345".to_string(),
        }
    }

    #[test]
    fn test_valid_article() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut a = sample();
        a.title = "   ".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_placeholder_url_rejected() {
        let mut a = sample();
        a.url = URL_PLACEHOLDER.to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_non_https_url_rejected() {
        let mut a = sample();
        a.url = "http://example.com/paper".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_bad_year_rejected() {
        let mut a = sample();
        a.year = "202".to_string();
        assert!(a.validate().is_err());
        a.year = "20x3".to_string();
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_cap_lengths() {
        let mut a = sample();
        a.title = "t".repeat(250);
        a.description = "d".repeat(500);
        a.cap_lengths();
        assert_eq!(a.title.chars().count(), TITLE_MAX_CHARS);
        assert_eq!(a.description.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("citationCount").is_some());
        assert!(json.get("authors").unwrap().is_array());
    }
}
