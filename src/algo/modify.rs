use url::Url;

use super::parse::ParsedUrl;
use crate::error::UrlError;

/// Replacement values for `modify`; `None` keeps the existing component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyRequest {
    pub scheme: Option<String>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ModifyRequest {
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none()
            && self.path.is_none()
            && self.query.is_none()
            && self.fragment.is_none()
    }
}

/// Apply `req` to a copy of `url`. An empty query or fragment removes it.
pub fn modify(url: &ParsedUrl, req: &ModifyRequest) -> Result<Url, UrlError> {
    let mut out = url.url().clone();

    if let Some(scheme) = req.scheme.as_deref() {
        out.set_scheme(scheme).map_err(|()| UrlError::SchemeChange {
            from: url.scheme().to_string(),
            to: scheme.to_string(),
        })?;
    }
    if let Some(path) = req.path.as_deref() {
        out.set_path(path);
    }
    if let Some(query) = req.query.as_deref() {
        let query = query.trim_start_matches('?');
        out.set_query((!query.is_empty()).then_some(query));
    }
    if let Some(fragment) = req.fragment.as_deref() {
        let fragment = fragment.trim_start_matches('#');
        out.set_fragment((!fragment.is_empty()).then_some(fragment));
    }

    Ok(out)
}
