use thiserror::Error as ThisError;

/// A request the gateway refuses to process at all. Distinct from the
/// fail-open handling of transform parameters: these are protocol-level
/// violations, not bad image options.
#[derive(Debug, ThisError)]
pub enum RequestRejectError {
    #[error("invalid request path")]
    InvalidPath,
}
