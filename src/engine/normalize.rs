//! Cleanup applied to raw text before segmentation.

/// Collapse whitespace runs, trim, then drop symbols outside the retained punctuation set.
///
/// Whitespace is collapsed before stripping, so a removed symbol standing alone between two
/// spaces leaves a double space behind.
pub fn normalize_text(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.chars().filter(|&c| is_retained(c)).collect()
}

fn is_retained(c: char) -> bool {
    c.is_alphanumeric()
        || c == '_'
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '-' | '(' | ')')
}
