use std::collections::HashSet;

/// Comparison key for "same name" checks.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deduped<T> {
    pub kept: Vec<T>,
    /// Names removed as duplicates, in input order
    pub dropped: Vec<String>,
}

/// Keeps the first occurrence of every name (trimmed, case-insensitive).
/// Blank names are removed without being reported.
pub fn dedup_by_name<T, F>(items: Vec<T>, name: F) -> Deduped<T>
where
    F: Fn(&T) -> &str,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(items.len());
    let mut dropped = Vec::new();

    for item in items {
        let key = name_key(name(&item));
        if key.is_empty() {
            continue;
        }
        if seen.insert(key) {
            kept.push(item);
        } else {
            dropped.push(name(&item).trim().to_string());
        }
    }

    Deduped { kept, dropped }
}

pub fn dedup_strings(values: Vec<String>) -> Deduped<String> {
    let trimmed = values.into_iter().map(|v| v.trim().to_string()).collect();
    dedup_by_name(trimmed, |v: &String| v.as_str())
}

pub fn contains_name<'a, I>(names: I, candidate: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let key = name_key(candidate);
    names.into_iter().any(|n| name_key(n) == key)
}
