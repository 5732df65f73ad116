//! Domain-aware pseudo-URL synthesis
//!
//! Manufactures a plausible external-reference URL for an article from
//! its title, authors, year, and key terms. Every digit and pattern
//! choice is derived from a content fingerprint of the inputs, so the
//! function is pure: identical inputs always yield the identical URL,
//! while different titles still fan out across the pattern set.

use paperlens_domain::KeyTermSet;
use sha2::{Digest, Sha256};

/// Reference-URL styles, indexed by the domain table below
const PATTERN_COUNT: usize = 9;

/// Domain keyword to allowed pattern indices
const DOMAIN_PATTERNS: [(&str, [usize; 5]); 12] = [
    ("computer", [0, 2, 4, 5, 8]),
    ("machine", [0, 2, 4, 5, 7]),
    ("artificial", [0, 2, 4, 5, 8]),
    ("medical", [1, 3, 4, 5, 7]),
    ("healthcare", [1, 3, 4, 5, 7]),
    ("clinical", [1, 3, 4, 5, 6]),
    ("engineering", [1, 2, 4, 5, 8]),
    ("physics", [0, 1, 4, 5, 8]),
    ("mathematics", [0, 1, 5, 6, 8]),
    ("biology", [1, 3, 4, 5, 7]),
    ("chemistry", [1, 4, 5, 7, 8]),
    ("psychology", [1, 4, 5, 6, 7]),
];

/// Pattern indices used when no domain keyword matches
const DEFAULT_PATTERNS: [usize; 4] = [1, 4, 5, 7];

/// Journal-abbreviation pools for DOI-style URLs
const JOURNAL_ABBREVIATIONS: [(&str, [&str; 4]); 8] = [
    ("computer", ["compsci", "infsys", "artint", "compeng"]),
    ("machine", ["mlsys", "artint", "neunet", "pattrec"]),
    ("medical", ["medres", "clinmed", "bioeng", "medinfo"]),
    ("biology", ["biosci", "molbio", "bioinf", "lifesci"]),
    ("engineering", ["engapp", "syseng", "techsci", "appeng"]),
    ("physics", ["physa", "physb", "nuclphys", "optcom"]),
    ("chemistry", ["chemphys", "molcat", "inorg", "orgchem"]),
    ("mathematics", ["amc", "cam", "jmaa", "topol"]),
];

const GENERIC_ABBREVIATIONS: [&str; 4] = ["research", "science", "tech", "studies"];

/// Synthesize a deterministic academic-reference URL
///
/// Classifies the research domain by testing the title and key terms
/// against a fixed keyword table, picks one URL style from the domain's
/// allowed set, and fills it with digits derived from a SHA-256
/// fingerprint of the title/authors/year tuple. The output always
/// starts with `https://` and is never a placeholder.
pub fn synthesize_url(
    title: &str,
    authors: &[String],
    year: &str,
    key_terms: &KeyTermSet,
) -> String {
    let fingerprint = hex_fingerprint(title);
    let seed = tuple_seed(title, authors, year);
    let numeric = u64::from_str_radix(&fingerprint[..6], 16).unwrap_or(0);

    let title_lower = title.to_lowercase();
    let terms_lower: Vec<String> = key_terms.terms().iter().map(|t| t.to_lowercase()).collect();

    let allowed: &[usize] = DOMAIN_PATTERNS
        .iter()
        .find(|(keyword, _)| {
            title_lower.contains(keyword) || terms_lower.iter().any(|t| t.contains(keyword))
        })
        .map(|(_, indices)| indices.as_slice())
        .unwrap_or(&DEFAULT_PATTERNS);

    let pattern = allowed[(seed as usize) % allowed.len()];
    debug_assert!(pattern < PATTERN_COUNT);

    let yy = year_suffix(year, 2);
    let yyy = year_suffix(year, 3);

    match pattern {
        0 => format!(
            "https://arxiv.org/abs/{}{:02}.{}",
            yy,
            10 + seed % 3,
            &fingerprint[..5]
        ),
        1 => format!(
            "https://doi.org/10.1016/j.{}.{}.{}",
            journal_abbreviation(&terms_lower, seed),
            year,
            &fingerprint[..8]
        ),
        2 => format!(
            "https://ieeexplore.ieee.org/document/{}",
            9_000_000 + numeric % 1_000_000
        ),
        3 => format!(
            "https://pubmed.ncbi.nlm.nih.gov/{}/",
            35_000_000 + numeric % 3_000_000
        ),
        4 => format!(
            "https://www.researchgate.net/publication/{}_{}",
            350_000_000 + numeric % 30_000_000,
            slug(title)
        ),
        5 => format!(
            "https://scholar.google.com/scholar?hl=en&q={}",
            query_encode(title)
        ),
        6 => format!(
            "https://www.jstor.org/stable/{}",
            10_000_000 + numeric % 40_000_000
        ),
        7 => format!(
            "https://www.sciencedirect.com/science/article/pii/S{}{}{}",
            &fingerprint[..4],
            yy,
            &fingerprint[4..8]
        ),
        _ => format!(
            "https://link.springer.com/article/10.1007/s{}-{}-{}-{}",
            10_000 + seed % 90_000,
            yyy,
            &fingerprint[..4],
            1 + seed % 9
        ),
    }
}

/// Hex fingerprint of the title content
fn hex_fingerprint(title: &str) -> String {
    let digest = Sha256::digest(title.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Seed derived from the full title/authors/year tuple, replacing the
/// unseeded random draws of earlier designs
fn tuple_seed(title: &str, authors: &[String], year: &str) -> u64 {
    let digest = Sha256::digest(format!("{}|{}|{}", title, authors.join(","), year).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

fn journal_abbreviation(terms_lower: &[String], seed: u64) -> &'static str {
    for (domain, abbrevs) in JOURNAL_ABBREVIATIONS.iter() {
        if terms_lower.iter().any(|t| t.contains(domain)) {
            return abbrevs[(seed as usize) % abbrevs.len()];
        }
    }
    GENERIC_ABBREVIATIONS[(seed as usize) % GENERIC_ABBREVIATIONS.len()]
}

/// Last `n` digits of the year, padded from "2023" when malformed
fn year_suffix(year: &str, n: usize) -> String {
    let year = if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
        year
    } else {
        "2023"
    };
    year[year.len() - n..].to_string()
}

/// Underscore slug of the title, capped at 50 characters
fn slug(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    joined.chars().take(50).collect()
}

/// Percent-encode the leading 100 characters of the title for a search query
fn query_encode(title: &str) -> String {
    let prefix: String = title.chars().take(100).collect();
    ::url::form_urlencoded::byte_serialize(prefix.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperlens_domain::KeyTermSet;

    fn terms(items: &[&str]) -> KeyTermSet {
        KeyTermSet::from_terms(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_deterministic() {
        let authors = vec!["Dr. Sarah Johnson".to_string()];
        let key_terms = terms(&["Machine Learning"]);
        let a = synthesize_url("Adaptive Scheduling", &authors, "2023", &key_terms);
        let b = synthesize_url("Adaptive Scheduling", &authors, "2023", &key_terms);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_titles_differ() {
        let authors = vec!["Dr. A".to_string()];
        let key_terms = terms(&["Research"]);
        let a = synthesize_url("First Paper Title", &authors, "2023", &key_terms);
        let b = synthesize_url("Second Paper Title", &authors, "2023", &key_terms);
        assert_ne!(a, b);
    }

    #[test]
    fn test_always_https_and_not_placeholder() {
        let authors: Vec<String> = vec![];
        for title in ["", "x", "Very Long Title With Many Words In It"] {
            let url = synthesize_url(title, &authors, "2024", &terms(&["Analysis"]));
            assert!(url.starts_with("https://"), "bad url: {}", url);
            assert_ne!(url, "#");
        }
    }

    #[test]
    fn test_medical_terms_use_biomedical_patterns() {
        let key_terms = terms(&["Healthcare", "Clinical"]);
        let url = synthesize_url(
            "Patient Outcome Prediction",
            &["Dr. B".to_string()],
            "2022",
            &key_terms,
        );
        // Allowed healthcare patterns: doi, pubmed, researchgate, scholar, sciencedirect.
        assert!(
            url.contains("doi.org")
                || url.contains("pubmed.ncbi.nlm.nih.gov")
                || url.contains("researchgate.net")
                || url.contains("scholar.google.com")
                || url.contains("sciencedirect.com"),
            "unexpected pattern: {}",
            url
        );
    }

    #[test]
    fn test_malformed_year_falls_back() {
        let url = synthesize_url("Paper", &[], "n/a", &terms(&["Research"]));
        assert!(url.starts_with("https://"));
    }

    #[test]
    fn test_slug_strips_punctuation() {
        assert_eq!(slug("Graphs: A Study, Part 2!"), "Graphs_A_Study_Part_2");
    }

    #[test]
    fn test_slug_caps_length() {
        let long = "word ".repeat(40);
        assert!(slug(&long).len() <= 50);
    }

    #[test]
    fn test_query_encode_spaces() {
        assert_eq!(query_encode("a b"), "a+b");
    }
}
