pub mod algo;
pub mod error;
pub mod logging;
pub mod ops;

pub use algo::parse::{parse_url, ParsedUrl};
pub use algo::structure_key::{structure_key, StructureKey};
pub use error::UrlError;
