use url::Url;

use crate::error::UrlError;

/// A validated absolute URL, split into the pieces the rest of the crate reads.
///
/// Built once per input by [`parse_url`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
    absolute_path: String,
}

impl ParsedUrl {
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host as written by the parser; empty for host-less URLs such as `file:///`.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("")
    }

    /// Explicit port, `None` when absent or equal to the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// Path component, always starting with `/`.
    pub fn absolute_path(&self) -> &str {
        &self.absolute_path
    }

    /// Query without the leading `?`; empty when the URL has none.
    pub fn raw_query(&self) -> &str {
        self.url.query().unwrap_or("")
    }

    /// Fragment without the leading `#`; empty when the URL has none.
    pub fn fragment(&self) -> &str {
        self.url.fragment().unwrap_or("")
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl TryFrom<Url> for ParsedUrl {
    type Error = UrlError;

    fn try_from(url: Url) -> Result<Self, Self::Error> {
        if url.cannot_be_a_base() {
            return Err(UrlError::NotHierarchical(url.to_string()));
        }
        let absolute_path = if url.path().starts_with('/') {
            url.path().to_string()
        } else {
            format!("/{}", url.path())
        };
        Ok(Self { url, absolute_path })
    }
}

impl std::str::FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_url(s)
    }
}

/// Validate and parse an absolute URL.
///
/// Surrounding whitespace is ignored. Relative references, blank input and
/// opaque URLs (`mailto:`, `data:`) are rejected.
pub fn parse_url(input: &str) -> Result<ParsedUrl, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|source| UrlError::Invalid {
        input: trimmed.to_string(),
        source,
    })?;

    ParsedUrl::try_from(url)
}
