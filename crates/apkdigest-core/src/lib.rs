pub mod config;
pub mod logging;

pub mod extract;
pub mod locate;
pub mod manifest;
pub mod report;
pub mod task;

pub use extract::{extract_digest, extract_from_reader, try_extract_digest, ExtractError};
pub use manifest::DigestSpec;
