use std::fmt;
use std::hash::{Hash, Hasher};

use super::parse::ParsedUrl;
use super::path_pattern::normalize_path;
use super::query_names::sorted_param_names;

/// Shape of a URL: scheme, host, path template and query parameter names.
///
/// Equality and hashing ignore case, so keys built from URLs whose hosts
/// differ only in casing compare equal.
#[derive(Debug, Clone)]
pub struct StructureKey {
    raw: String,
    folded: String,
}

impl StructureKey {
    fn new(raw: String) -> Self {
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn into_string(self) -> String {
        self.raw
    }
}

impl PartialEq for StructureKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for StructureKey {}

impl Hash for StructureKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Display for StructureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Build `{scheme}://{host}{template}?{names}` for a parsed URL.
pub fn structure_key(url: &ParsedUrl) -> StructureKey {
    StructureKey::new(format!(
        "{}://{}{}?{}",
        url.scheme(),
        url.host(),
        normalize_path(url.absolute_path()),
        sorted_param_names(url.raw_query()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::parse::parse_url;

    fn key(s: &str) -> StructureKey {
        structure_key(&parse_url(s).unwrap())
    }

    #[test]
    fn key_format() {
        assert_eq!(
            key("https://example.com/users/1?sort=name").as_str(),
            "https://example.com/users/<id>?sort"
        );
        assert_eq!(key("https://example.com").as_str(), "https://example.com/?");
    }

    #[test]
    fn same_structure_different_values() {
        assert_eq!(
            key("https://example.com/users/1?sort=name"),
            key("https://example.com/users/2?sort=date")
        );
    }

    #[test]
    fn query_order_does_not_matter() {
        assert_eq!(
            key("https://example.com/s?a=1&b=2"),
            key("https://example.com/s?b=3&a=4")
        );
    }

    #[test]
    fn different_structure() {
        assert_ne!(
            key("https://example.com/users/1"),
            key("https://example.com/posts/1")
        );
        assert_ne!(
            key("https://example.com/users/1"),
            key("https://example.com/users/1/edit")
        );
    }

    #[test]
    fn different_query_params() {
        assert_ne!(
            key("https://example.com/users?sort=name"),
            key("https://example.com/users?filter=active")
        );
        assert_ne!(
            key("https://example.com/users?sort=name"),
            key("https://example.com/users?sort=name&page=1")
        );
    }

    #[test]
    fn scheme_and_host_participate() {
        assert_ne!(key("http://example.com/a"), key("https://example.com/a"));
        assert_ne!(key("https://a.example.com/a"), key("https://b.example.com/a"));
    }

    #[test]
    fn fragment_is_ignored() {
        assert_eq!(key("https://example.com/a#x"), key("https://example.com/a#y"));
    }

    #[test]
    fn equality_is_case_insensitive() {
        assert_eq!(key("https://example.com/Docs"), key("https://example.com/docs"));
        assert_eq!(
            key("https://example.com/s?Q=1"),
            key("https://example.com/s?q=2")
        );
    }

    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(key("https://example.com/Users/1"));
        assert!(!set.insert(key("https://example.com/users/2")));
    }
}
