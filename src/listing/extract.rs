//! Best-effort extraction of structured results from model replies
//!
//! Model replies are unstructured natural language, so this is a line-by-line
//! marker-phrase scan, not a parser. Extraction never fails: inputs with no
//! matching lines degrade to fixed fallback values.

use crate::types::TitleOptimization;

/// Alternatives kept per title optimization.
pub const MAX_ALTERNATIVES: usize = 3;

/// Explanation used when the reply has no line mentioning an improvement.
pub const FALLBACK_EXPLANATION: &str = "Title optimized for better search visibility";

/// Value of a marker line: text after the first colon, or the whole line when
/// there is no colon, trimmed either way.
fn line_value(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line.trim(),
    }
}

/// Extract an optimized title, its explanation and alternative suggestions
/// from a raw model reply.
///
/// Single pass in document order. The first line containing "optimized title"
/// (case-insensitive) with a non-empty value sets the title; the first line
/// containing "improvement" sets the explanation; every line containing
/// "alternative" appends a non-empty value. The checks are independent, so a
/// single line can feed more than one field. Alternatives are capped at
/// [`MAX_ALTERNATIVES`]. Unmatched fields fall back to `original_title` and
/// [`FALLBACK_EXPLANATION`].
pub fn extract_title_optimization(raw: &str, original_title: &str) -> TitleOptimization {
    let mut optimized_title: Option<String> = None;
    let mut explanation: Option<String> = None;
    let mut alternatives: Vec<String> = Vec::new();

    for line in raw.lines() {
        let lower = line.to_lowercase();

        if optimized_title.is_none() && lower.contains("optimized title") {
            let value = line_value(line);
            if !value.is_empty() {
                optimized_title = Some(value.to_string());
            }
        }
        if explanation.is_none() && lower.contains("improvement") {
            let value = line_value(line);
            if !value.is_empty() {
                explanation = Some(value.to_string());
            }
        }
        if lower.contains("alternative") {
            let value = line_value(line);
            if !value.is_empty() {
                alternatives.push(value.to_string());
            }
        }
    }

    alternatives.truncate(MAX_ALTERNATIVES);

    TitleOptimization {
        optimized_title: optimized_title.unwrap_or_else(|| original_title.to_string()),
        explanation: explanation.unwrap_or_else(|| FALLBACK_EXPLANATION.to_string()),
        alternatives,
    }
}

/// Extract a flat keyword list from a raw model reply.
///
/// The reply is split on commas only. Newlines are NOT separators, so a label
/// the model put on its own line stays glued to the token that follows it.
/// Empty pieces are kept; trimming is the only normalization. Callers impose
/// their own cap on the number of keywords.
pub fn extract_keywords(raw: &str) -> Vec<String> {
    raw.split(',').map(|kw| kw.trim().to_string()).collect()
}
