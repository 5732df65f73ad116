//! Prompt construction for each engine operation
//!
//! Prompts are templates over the caller's text plus, for the degraded
//! attempt, the key-term set. The engine chooses which template to use
//! per retry state; nothing here talks to the network.

use paperlens_domain::KeyTermSet;

const ARTICLES_INSTRUCTIONS: &str = r#"You are a research assistant. Based on the following research summary, find 5 related academic research papers.

Search for papers that are:
1. Directly related to the research topic
2. Use similar methodologies
3. Address related problems
4. Are from the same domain/field
5. Have complementary findings

For each paper, provide information in this EXACT JSON format:
[
  {
    "title": "Complete academic paper title",
    "description": "Detailed 2-3 sentence description explaining the direct relationship to the original research, methodology connections, and relevance",
    "authors": ["Author Name 1", "Author Name 2", "Author Name 3"],
    "journal": "Journal or Conference Name",
    "date": "Year (2020-2024)",
    "citations": "Number between 10-200",
    "url": "https://doi.org/10.1000/example.2023.1234 or https://arxiv.org/abs/2301.12345 (provide clickable academic URLs)"
  }
]

IMPORTANT:
- Respond with ONLY the JSON array, no other text
- Make sure all papers are highly relevant to the research topic
- Use realistic author names, journal names, and citation counts
- Ensure each description clearly explains the connection to the original research
- ALWAYS provide academic URLs (arXiv, DOI, Google Scholar, ResearchGate, etc.)"#;

/// Rich prompt for the primary articles attempt
pub(crate) fn articles_prompt(summary: &str) -> String {
    format!(
        "{}\n\nResearch Summary to analyze:\n{}\n",
        ARTICLES_INSTRUCTIONS, summary
    )
}

/// Shorter prompt for the degraded attempt: top key terms plus a
/// truncated excerpt of the summary
pub(crate) fn degraded_articles_prompt(
    key_terms: &KeyTermSet,
    summary: &str,
    excerpt_chars: usize,
) -> String {
    let excerpt: String = summary.chars().take(excerpt_chars).collect();
    format!(
        r#"Find 5 academic research papers related to: {}

Return as JSON array:
[
  {{
    "title": "Paper Title Here",
    "description": "How this paper relates to the research topic",
    "authors": ["Author 1", "Author 2"],
    "journal": "Journal Name",
    "date": "2023",
    "citations": 25,
    "url": "https://doi.org/10.1000/example.2023.1234 or https://arxiv.org/abs/2301.12345"
  }}
]

Research context: {}
"#,
        key_terms.top(3).join(", "),
        excerpt
    )
}

/// Prompt for the novelty assessment
pub(crate) fn novelty_prompt(text_prefix: &str, summary_prefix: &str) -> String {
    format!(
        r#"Analyze the following research paper and calculate a novelty score from 1-100.
Evaluate originality, innovation, and potential impact.

Provide scores in these categories:
1. Methodological innovation (1-100)
2. Conceptual originality (1-100)
3. Potential impact (1-100)
4. Overall novelty score (1-100)

Also provide a brief explanation (1-2 sentences) for each score.
Format the response as a JSON object with these fields: methodological_score,
conceptual_score, impact_score, overall_score, methodological_reason,
conceptual_reason, impact_reason, overall_assessment.

Research Summary:
{}

First few paragraphs:
{}
"#,
        summary_prefix, text_prefix
    )
}

/// Prompt for the comprehensive paper summary
pub(crate) fn summary_prompt(text_prefix: &str) -> String {
    format!(
        r#"Please provide a comprehensive summary of the following research paper.
Focus on the main objectives, methodology, key findings, and conclusions.
Keep it detailed but concise (300-500 words).

Research Paper Text:
{}
"#,
        text_prefix
    )
}

/// Prompt for the Mermaid mind-map code
pub(crate) fn mindmap_prompt(text_prefix: &str) -> String {
    format!(
        r#"Based on the following research paper, create a detailed Mermaid mind map code.
The mind map should include:
- Main research topic as the central node
- Key sections like Introduction, Methodology, Results, Conclusion
- Important concepts, findings, and relationships
- Use proper Mermaid syntax for mind maps (mindmap format)

Please provide ONLY the Mermaid code, starting with 'mindmap' and using proper indentation.
Do not include any markdown code blocks or explanations, just the raw mermaid code.

Research Paper Text:
{}
"#,
        text_prefix
    )
}
