use serde::Serialize;
use url::form_urlencoded;

use super::parse::ParsedUrl;

/// Shown in place of a port equal to the scheme default.
pub const DEFAULT_PORT: &str = "(default)";

/// One decoded `name=value` pair from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Every user-facing component of a URL, extracted deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    pub scheme: String,
    pub subdomain: String,
    pub host: String,
    pub tld: String,
    pub port: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
    pub query_params: Vec<QueryParam>,
}

impl UrlComponents {
    pub fn from_parsed(url: &ParsedUrl) -> Self {
        let host = url.host();
        Self {
            scheme: url.scheme().to_string(),
            subdomain: subdomain(host).to_string(),
            host: host.to_string(),
            tld: tld(host).to_string(),
            port: url
                .port()
                .map_or_else(|| DEFAULT_PORT.to_string(), |p| p.to_string()),
            path: url.absolute_path().to_string(),
            query: url.raw_query().to_string(),
            fragment: url.fragment().to_string(),
            query_params: form_urlencoded::parse(url.raw_query().as_bytes())
                .map(|(k, v)| QueryParam::new(k, v))
                .collect(),
        }
    }

    /// Aligned multi-line block for console output.
    pub fn format_all(&self) -> String {
        [
            ("Scheme:", &self.scheme),
            ("Subdomain:", &self.subdomain),
            ("Host:", &self.host),
            ("TLD:", &self.tld),
            ("Port:", &self.port),
            ("Path:", &self.path),
            ("Query:", &self.query),
            ("Fragment:", &self.fragment),
        ]
        .iter()
        .map(|(label, value)| format!("{label:<11} {value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// All labels but the registrable pair: `api.dev.example.com` → `api.dev`.
pub fn subdomain(host: &str) -> &str {
    let labels = host.split('.').count();
    if labels <= 2 {
        return "";
    }
    // Byte offset of the second-to-last label.
    let cut = host
        .match_indices('.')
        .nth(labels - 3)
        .map_or(0, |(i, _)| i);
    &host[..cut]
}

/// Last label of a dotted host, or empty for single-label hosts like `localhost`.
pub fn tld(host: &str) -> &str {
    match host.rsplit_once('.') {
        Some((_, last)) => last,
        None => "",
    }
}
