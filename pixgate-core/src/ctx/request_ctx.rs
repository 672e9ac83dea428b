use crate::ctx::RequestId;
use crate::ctx::error::RequestRejectError;
use crate::ctx::normalization::{NormalizationOutcome, normalize_path, parse_query_pairs};
use crate::ctx::normalization::NormalizedPath;
use http::{HeaderMap, Method, Uri};
use pingora::prelude::Session;

/// Canonical request context passed through the Pixgate pipeline
#[derive(Debug)]
pub struct RequestCtx {
    /// Lifecycle flag to determine if the context has already been hydrated
    /// from a session.
    pub hydrated: bool,

    /// Optional override for the upstream request path, set by devices.
    pub upstream_path: Option<String>,

    method: Method,
    path: NormalizedPath,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    request_id: RequestId,
}

impl Default for RequestCtx {
    fn default() -> Self {
        Self::empty()
    }
}

/// Hydration API
impl RequestCtx {
    pub fn empty() -> Self {
        Self {
            hydrated: false,
            upstream_path: None,
            method: Method::GET,
            path: NormalizedPath::default(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            request_id: RequestId::default(),
        }
    }

    /// Create a boundary to decouple session from logic.
    /// This makes testing the hydration/normalization code easier.
    pub fn hydrate_from_session(&mut self, session: &Session) -> Result<(), RequestRejectError> {
        let request_header = session.req_header();
        self.hydrate(
            &request_header.uri,
            &request_header.method,
            &request_header.headers,
        )
    }

    pub(crate) fn hydrate(
        &mut self,
        uri: &Uri,
        method: &Method,
        headers: &HeaderMap,
    ) -> Result<(), RequestRejectError> {
        debug_assert!(!self.hydrated, "Already hydrated, cannot hydrate again");

        self.path = match normalize_path(uri.path()) {
            NormalizationOutcome::Accept(p) => p,
            NormalizationOutcome::Rewrite { value, .. } => value,
            NormalizationOutcome::Reject { .. } => {
                return Err(RequestRejectError::InvalidPath);
            }
        };

        self.query = parse_query_pairs(uri.query().unwrap_or_default());
        self.method = method.clone();
        self.headers = headers.clone();
        self.hydrated = true;

        Ok(())
    }
}

/// Request data API
impl RequestCtx {
    pub fn method(&self) -> &Method {
        debug_assert!(self.hydrated);
        &self.method
    }

    /// Internal canonical representation of the request path.
    pub fn canonical_path(&self) -> &str {
        debug_assert!(self.hydrated);
        self.path.as_str()
    }

    /// Decoded query pairs in arrival order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        debug_assert!(self.hydrated);
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        debug_assert!(self.hydrated);
        &self.headers
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}

/// Upstream path API
impl RequestCtx {
    /// Path used when proxying upstream. The rewritten variant path carries
    /// no query string; when no device rewrote the request, the canonical
    /// path is forwarded as-is.
    pub fn upstream_path(&self) -> &str {
        self.upstream_path.as_deref().unwrap_or(self.canonical_path())
    }

    pub fn set_upstream_path(&mut self, path: String) {
        debug_assert!(self.hydrated);
        self.upstream_path = Some(path);
    }
}
