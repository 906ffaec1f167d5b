use std::collections::HashSet;

/// Concatenates `lists` in order, drops blanks, keeps the first spelling of
/// every entry (compared trimmed and lower-cased), and stops at `limit`.
pub fn merge_unique(lists: &[&[String]], limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for item in lists.iter().flat_map(|list| list.iter()) {
        if merged.len() == limit {
            break;
        }
        let key = item.trim().to_lowercase();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        merged.push(item.trim().to_string());
    }
    merged
}
