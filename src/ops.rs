//! Shared operation wrappers for the CLI and library callers.
//!
//! Each `op_*` function is a pure, synchronous wrapper around one or more
//! `algo` modules. Nothing here opens stdin/stdout or depends on clap;
//! readers are passed in by the caller.

use std::io::{self, BufRead};

use serde_json::{json, Value};

use crate::algo::codec::{self, Mode};
use crate::algo::components::UrlComponents;
use crate::algo::dedupe;
use crate::algo::modify::{self, ModifyRequest};
use crate::algo::parse::parse_url;
use crate::algo::path_pattern::normalize_path;
use crate::algo::query_names::sorted_param_names;
use crate::algo::structure_key::structure_key;
use crate::error::UrlError;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Which components `parse` prints. All `false` means print everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentSelection {
    pub protocol: bool,
    pub subdomain: bool,
    pub tld: bool,
    pub hostname: bool,
    pub port: bool,
    pub path: bool,
    pub query: bool,
    pub fragment: bool,
}

impl ComponentSelection {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Every non-blank line of `reader`, one candidate URL per line.
///
/// Lines are kept as read; trimming happens in `op_dedupe`.
pub fn read_candidates(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

/// First non-blank line of `reader`, trimmed.
pub fn read_first_candidate(reader: impl BufRead) -> io::Result<Option<String>> {
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(Some(trimmed.to_string()));
        }
    }
    Ok(None)
}

// ── Operations ───────────────────────────────────────────────────────────────

pub fn op_parse(url: &str) -> Result<UrlComponents, UrlError> {
    let parsed = parse_url(url)?;
    Ok(UrlComponents::from_parsed(&parsed))
}

pub fn op_parse_json(url: &str) -> Result<Value, UrlError> {
    let components = op_parse(url)?;
    serde_json::to_value(&components).map_err(|e| UrlError::Serialize(e.to_string()))
}

/// Selected component values in a fixed order, one entry per requested flag.
pub fn op_select(components: &UrlComponents, sel: ComponentSelection) -> Vec<String> {
    [
        (sel.protocol, &components.scheme),
        (sel.subdomain, &components.subdomain),
        (sel.tld, &components.tld),
        (sel.hostname, &components.host),
        (sel.port, &components.port),
        (sel.path, &components.path),
        (sel.query, &components.query),
        (sel.fragment, &components.fragment),
    ]
    .into_iter()
    .filter(|(wanted, _)| *wanted)
    .map(|(_, value)| value.clone())
    .collect()
}

pub fn op_modify(url: &str, req: &ModifyRequest) -> Result<String, UrlError> {
    let parsed = parse_url(url)?;
    modify::modify(&parsed, req).map(String::from)
}

pub fn op_encode(input: &str, query: bool, double: bool) -> String {
    let mode = Mode::from_query_flag(query);
    if double {
        codec::encode_twice(input, mode)
    } else {
        codec::encode(input, mode)
    }
}

pub fn op_decode(input: &str, query: bool, double: bool) -> Result<String, UrlError> {
    let mode = Mode::from_query_flag(query);
    if double {
        codec::decode_twice(input, mode)
    } else {
        codec::decode(input, mode)
    }
}

/// First URL of each structural shape, trimmed, in input order.
pub fn op_dedupe<S: AsRef<str>>(candidates: &[S]) -> Vec<String> {
    dedupe::dedupe(candidates.iter().map(AsRef::as_ref))
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn op_structure_key(url: &str) -> Result<Value, UrlError> {
    let parsed = parse_url(url)?;
    Ok(json!({
        "original": url.trim(),
        "normalized_path": normalize_path(parsed.absolute_path()),
        "param_names": sorted_param_names(parsed.raw_query()),
        "structure_key": structure_key(&parsed).into_string(),
    }))
}
