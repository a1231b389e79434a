use std::collections::HashSet;

/// Iterate the parameter names of a raw query, in order of appearance.
///
/// A leading `?` is tolerated. Empty fragments (from `&&`, or a leading or
/// trailing `&`) are skipped. The name is the text before the first `=`.
pub fn param_names(raw_query: &str) -> impl Iterator<Item = &str> {
    raw_query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').map_or(pair, |(name, _)| name))
}

/// Canonical name-only view of a query string: names deduplicated and sorted
/// case-insensitively, joined with `&`. Values never contribute.
///
/// When two names differ only by case, the first one seen is kept.
pub fn sorted_param_names(raw_query: &str) -> String {
    if raw_query.trim().is_empty() {
        return String::new();
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut names: Vec<(String, &str)> = param_names(raw_query)
        .filter_map(|name| {
            let folded = name.to_lowercase();
            seen.insert(folded.clone()).then_some((folded, name))
        })
        .collect();

    names.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    names
        .into_iter()
        .map(|(_, name)| name)
        .collect::<Vec<&str>>()
        .join("&")
}
