/// Replaces every literal occurrence of `old` with `new`.
///
/// Returns the new text and the number of occurrences replaced. An empty
/// `old` never matches.
pub fn replace_block(text: &str, old: &str, new: &str) -> (String, usize) {
    if old.is_empty() {
        return (text.to_string(), 0);
    }

    let count = text.matches(old).count();
    if count == 0 {
        return (text.to_string(), 0);
    }

    (text.replace(old, new), count)
}

/// Appends `rule` to the end of `text` unless `marker` already occurs in it.
///
/// Returns the resulting text and whether anything was appended.
pub fn append_if_missing(text: &str, marker: &str, rule: &str) -> (String, bool) {
    if text.contains(marker) {
        return (text.to_string(), false);
    }

    let mut out = String::with_capacity(text.len() + rule.len());
    out.push_str(text);
    out.push_str(rule);
    (out, true)
}
