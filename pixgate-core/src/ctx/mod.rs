mod error;
mod normalization;
mod request_ctx;
mod request_id;
mod response_ctx;
#[cfg(test)]
mod tests;

pub use error::*;
pub use normalization::{NormalizedPath, parse_query_pairs};
pub use request_ctx::*;
pub use request_id::*;
pub use response_ctx::*;
