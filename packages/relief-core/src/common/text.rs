//! Small text helpers used by the form layer.

/// Length in Unicode scalar values after trimming surrounding whitespace.
pub fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Trim each tag, drop empty ones and remove duplicates, keeping first-seen order.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || out.iter().any(|existing| existing == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}

/// Case-insensitive substring check.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
