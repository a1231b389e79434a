use std::collections::HashSet;

use super::parse::parse_url;
use super::structure_key::{structure_key, StructureKey};
use crate::error::UrlError;

/// What happened to one candidate offered to a [`Deduper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// First URL seen with this shape; it belongs in the output.
    Retained(StructureKey),
    /// Same shape as an earlier retained URL.
    Duplicate(StructureKey),
    /// Could not be parsed; silently excluded from the output.
    Invalid(UrlError),
}

/// Streaming first-seen-wins filter over structure keys.
#[derive(Debug, Default)]
pub struct Deduper {
    seen: HashSet<StructureKey>,
}

impl Deduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct shapes retained so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Classify `candidate` against everything offered before it.
    pub fn offer(&mut self, candidate: &str) -> Verdict {
        let parsed = match parse_url(candidate) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(candidate, error = %err, "dropping unparseable URL");
                return Verdict::Invalid(err);
            }
        };

        let key = structure_key(&parsed);
        if self.seen.insert(key.clone()) {
            tracing::trace!(candidate, key = %key, "retained");
            Verdict::Retained(key)
        } else {
            tracing::debug!(candidate, key = %key, "structural duplicate");
            Verdict::Duplicate(key)
        }
    }
}

/// Keep the first URL of each shape, in input order.
///
/// Candidates are trimmed; the returned slices are the trimmed originals, not
/// a re-serialized form. Unparseable candidates are dropped without error.
pub fn dedupe<'a, I>(candidates: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut deduper = Deduper::new();
    candidates
        .into_iter()
        .map(str::trim)
        .filter(|c| matches!(deduper.offer(c), Verdict::Retained(_)))
        .collect()
}
