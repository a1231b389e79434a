use thiserror::Error;

/// Errors raised at the URL parsing boundary and by the sibling commands.
///
/// The structural core (`path_pattern`, `query_names`, `structure_key`) is
/// total and never produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL: {input}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL has no hierarchical path: {0}")]
    NotHierarchical(String),

    #[error("cannot change scheme from '{from}' to '{to}'")]
    SchemeChange { from: String, to: String },

    #[error("could not decode input: {0}")]
    Decode(String),

    #[error("could not serialize output: {0}")]
    Serialize(String),

    #[error("No input provided")]
    NoInput,
}
