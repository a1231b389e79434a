use std::sync::LazyLock;

use regex::Regex;

/// Placeholder substituted for numeric and UUID segments.
pub const ID_PLACEHOLDER: &str = "<id>";

/// Placeholder prefix substituted for filename segments; the extension follows it.
pub const FILE_PLACEHOLDER: &str = "<file>";

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}$")
        .expect("UUID pattern is valid")
});

/// Structural class of a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentClass<'a> {
    Numeric,
    Uuid,
    /// Extension including the leading dot, e.g. `.css`.
    Filename { extension: &'a str },
    Opaque,
}

impl<'a> SegmentClass<'a> {
    /// Classify a non-empty segment. Numeric and UUID checks run before the
    /// filename check, so `123` is never a filename.
    pub fn of(segment: &'a str) -> Self {
        if is_numeric(segment) {
            return SegmentClass::Numeric;
        }
        if UUID_RE.is_match(segment) {
            return SegmentClass::Uuid;
        }
        match segment.rfind('.') {
            Some(dot) if dot > 0 && dot + 1 < segment.len() => SegmentClass::Filename {
                extension: &segment[dot..],
            },
            _ => SegmentClass::Opaque,
        }
    }

    fn render(self, segment: &str, out: &mut String) {
        match self {
            SegmentClass::Numeric | SegmentClass::Uuid => out.push_str(ID_PLACEHOLDER),
            SegmentClass::Filename { extension } => {
                out.push_str(FILE_PLACEHOLDER);
                out.push_str(extension);
            }
            SegmentClass::Opaque => out.push_str(segment),
        }
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Rewrite a path into its structural template.
///
/// Numeric IDs and UUIDs become `<id>`, filenames become `<file>.{ext}`, and
/// anything else is kept verbatim. Empty segments are dropped, so the result
/// is either `/` or `/` followed by non-empty segments.
pub fn normalize_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        SegmentClass::of(segment).render(segment, &mut out);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids() {
        assert_eq!(normalize_path("/users/123"), "/users/<id>");
        assert_eq!(normalize_path("/users/0"), "/users/<id>");
        assert_eq!(normalize_path("/users/999999"), "/users/<id>");
        assert_eq!(normalize_path("/users/abc"), "/users/abc");
        assert_eq!(normalize_path("/42"), "/<id>");
    }

    #[test]
    fn non_ascii_digits_are_opaque() {
        // Arabic-Indic digits are not ASCII
        assert_eq!(normalize_path("/\u{0661}\u{0662}"), "/\u{0661}\u{0662}");
    }

    #[test]
    fn uuids() {
        assert_eq!(
            normalize_path("/users/550e8400-e29b-41d4-a716-446655440000"),
            "/users/<id>"
        );
        assert_eq!(
            normalize_path("/users/550e8400e29b41d4a716446655440000"),
            "/users/<id>"
        );
        assert_eq!(
            normalize_path("/users/550E8400-E29B-41D4-A716-446655440000"),
            "/users/<id>"
        );
        assert_eq!(normalize_path("/users/not-a-uuid"), "/users/not-a-uuid");
    }

    #[test]
    fn uuid_hyphens_only_at_canonical_boundaries() {
        assert_eq!(
            SegmentClass::of("550e8400e29b-41d4a716-446655440000"),
            SegmentClass::Uuid
        );
        assert_eq!(
            SegmentClass::of("550e-8400e29b-41d4-a716-446655440000"),
            SegmentClass::Opaque
        );
        assert_eq!(
            SegmentClass::of("550e8400-e29b-41d4-a716-44665544000"),
            SegmentClass::Opaque
        );
    }

    #[test]
    fn filenames_keep_last_extension() {
        assert_eq!(normalize_path("/assets/style.css"), "/assets/<file>.css");
        assert_eq!(normalize_path("/images/photo.jpg"), "/images/<file>.jpg");
        assert_eq!(normalize_path("/docs/readme.md"), "/docs/<file>.md");
        assert_eq!(normalize_path("/dl/archive.tar.gz"), "/dl/<file>.gz");
    }

    #[test]
    fn dot_rules() {
        assert_eq!(normalize_path("/.hidden"), "/.hidden");
        assert_eq!(normalize_path("/trailing."), "/trailing.");
        assert_eq!(normalize_path("/a..b"), "/<file>.b");
    }

    #[test]
    fn root_and_opaque() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/plain"), "/plain");
        assert_eq!(normalize_path("/Plain/CASE"), "/Plain/CASE");
    }

    #[test]
    fn drops_empty_segments() {
        assert_eq!(normalize_path("//users///7/"), "/users/<id>");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn mixed_segments() {
        assert_eq!(
            normalize_path("/api/users/42/posts/550e8400-e29b-41d4-a716-446655440000/image.png"),
            "/api/users/<id>/posts/<id>/<file>.png"
        );
    }

    #[test]
    fn normalized_output_is_stable() {
        let once = normalize_path("/api/7/report.pdf");
        assert_eq!(normalize_path(&once), once);
    }
}
