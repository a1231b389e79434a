pub mod codec;
pub mod components;
pub mod dedupe;
pub mod modify;
pub mod parse;
pub mod path_pattern;
pub mod query_names;
pub mod structure_key;
