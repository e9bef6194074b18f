//! Reference-corpus cleanup applied before bigram counting. Mirrors the
//! normalization the corpus pipeline applies to encyclopedia dumps: drop
//! parenthesized/bracketed asides, flatten markup `=` runs, collapse
//! whitespace and lowercase everything.

/// Characters kept per corpus truncation when training from very large
/// dumps. Counting beyond this adds little to a bigram table.
pub const DEFAULT_MAX_CHARS: usize = 2_700_000;

/// Normalizes raw corpus text for model building.
pub fn normalize(content: &str) -> String {
    // 1. Strip (...) and [...] spans (not nested in practice; a stray
    // closer is kept as text).
    let mut stripped = String::with_capacity(content.len());
    let mut skip_until: Option<char> = None;
    for c in content.chars() {
        match skip_until {
            Some(close) => {
                if c == close {
                    skip_until = None;
                }
            }
            None => match c {
                '(' => skip_until = Some(')'),
                '[' => skip_until = Some(']'),
                '=' => stripped.push(' '),
                _ => stripped.push(c),
            },
        }
    }

    // 2. Collapse whitespace runs, tighten space before , and .
    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            if c != ',' && c != '.' {
                out.push(' ');
            }
            pending_space = false;
        }
        for lc in c.to_lowercase() {
            out.push(lc);
        }
    }
    out
}

/// Truncates to at most `max_chars` characters on a char boundary.
pub fn truncate(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &content[..byte_idx],
        None => content,
    }
}
