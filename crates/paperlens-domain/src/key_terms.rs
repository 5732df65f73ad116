//! Key-term set - ordered domain terms derived from source text

use std::fmt;

/// Maximum number of key terms retained
pub const MAX_KEY_TERMS: usize = 8;

/// Terms used when nothing can be derived from the source text
pub const DEFAULT_KEY_TERMS: [&str; 3] = ["Research", "Analysis", "Study"];

/// An ordered, deduplicated set of up to 8 domain terms
///
/// Never empty: construction substitutes [`DEFAULT_KEY_TERMS`] when the
/// input yields nothing. Recomputed fresh on every extraction call,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyTermSet(Vec<String>);

impl KeyTermSet {
    /// Build a set from candidate terms, deduplicating in order and
    /// truncating to [`MAX_KEY_TERMS`]. Empty input yields the defaults.
    pub fn from_terms(terms: Vec<String>) -> Self {
        let mut seen = Vec::new();
        for term in terms {
            if !term.is_empty() && !seen.contains(&term) {
                seen.push(term);
            }
            if seen.len() == MAX_KEY_TERMS {
                break;
            }
        }
        if seen.is_empty() {
            return Self::defaults();
        }
        Self(seen)
    }

    /// The default 3-term set
    pub fn defaults() -> Self {
        Self(DEFAULT_KEY_TERMS.iter().map(|s| s.to_string()).collect())
    }

    /// Term at position `index`, wrapping around the set length
    ///
    /// The set is never empty, so this always yields a term.
    pub fn term_at(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    /// First term in the set
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Up to `n` leading terms
    pub fn top(&self, n: usize) -> &[String] {
        &self.0[..self.0.len().min(n)]
    }

    /// All terms in order
    pub fn terms(&self) -> &[String] {
        &self.0
    }

    /// Number of terms (1..=8)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for idiomatic pairing with `len`
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for KeyTermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
