//! Mermaid mind-map response cleanup
//!
//! Models frequently wrap the requested raw Mermaid code in fences or
//! surround it with prose. The cleaner keeps only the region from the
//! `mindmap` header to the closing fence, dropping fence lines and any
//! prose outside that region; if no header is found it falls back to
//! stripping fence and language markers globally.

/// Extract the Mermaid mind-map code from a model response
pub(crate) fn clean_mermaid(raw: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut in_mindmap = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("mindmap") {
            in_mindmap = true;
        }
        if in_mindmap {
            if trimmed.starts_with("```") {
                // Closing fence ends the diagram; trailing prose is noise.
                if !kept.is_empty() {
                    break;
                }
                continue;
            }
            kept.push(line);
        }
    }

    let cleaned = kept.join("\n").trim().to_string();
    if !cleaned.is_empty() {
        return cleaned;
    }
    raw.replace("```", "").replace("mermaid", "").trim().to_string()
}
