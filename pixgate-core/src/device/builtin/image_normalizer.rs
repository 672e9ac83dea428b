use crate::conf::types::NormalizerConfig;
use crate::ctx::{RequestCtx, ResponseCtx};
use crate::device::core::{Device, DeviceResult};
use crate::normalize::{NormalizeOutcome, NormalizerPolicy, normalize_request};
use anyhow::{Context, Result};
use http::{HeaderMap, HeaderValue, StatusCode, header};

/// ImageNormalizer rewrites image requests into canonical variant paths.
///
/// Every inbound request leaves this device in exactly one of two shapes:
/// with its upstream path replaced by the fixed-order variant suffix (and the
/// query string gone), or as a terminal redirect to the external resizer for
/// bypass formats. Either way, arbitrary client query strings can no longer
/// reach the origin as cache keys.
pub struct ImageNormalizerDevice {
    policy: NormalizerPolicy,
}

impl ImageNormalizerDevice {
    pub fn from_config(raw: &toml::Value) -> Result<Self> {
        let cfg: NormalizerConfig = raw
            .clone()
            .try_into()
            .context("invalid image_normalizer config")?;

        let policy = NormalizerPolicy::from_config(&cfg)?;

        Ok(Self { policy })
    }

    pub fn from_policy(policy: NormalizerPolicy) -> Self {
        Self { policy }
    }

    fn redirect(&self, ctx: &RequestCtx, status: u16, location: String) -> DeviceResult {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&location) {
            Ok(value) => {
                headers.insert(header::LOCATION, value);
            }
            Err(_) => {
                // A location that is not a legal header value cannot be sent;
                // fail the request rather than emit a dangling 302.
                return DeviceResult::Error(crate::device::core::errors::DeviceError {
                    message: format!("redirect location not header-safe: {location}"),
                    fatal: true,
                });
            }
        }

        DeviceResult::Respond(ResponseCtx::new(
            Some(ctx.request_id().as_str().to_string()),
            StatusCode::from_u16(status).unwrap_or(StatusCode::FOUND),
            headers,
            Vec::new(),
        ))
    }
}

impl Device for ImageNormalizerDevice {
    /// The normalizer is a request-only transform. It acts once, on the
    /// hydrated context, and never touches responses.
    fn on_request(&self, ctx: &mut RequestCtx) -> DeviceResult {
        let outcome = normalize_request(
            &self.policy,
            ctx.canonical_path(),
            ctx.query_pairs(),
            ctx.headers(),
        );

        match outcome {
            NormalizeOutcome::Rewrite { uri } => {
                tracing::debug!(
                    request_id = ctx.request_id().as_str(),
                    uri = %uri,
                    "rewritten to canonical variant"
                );
                ctx.set_upstream_path(uri);
                DeviceResult::Continue
            }

            NormalizeOutcome::Redirect { status, location } => {
                tracing::debug!(
                    request_id = ctx.request_id().as_str(),
                    location = %location,
                    "bypassed to external resizer"
                );
                self.redirect(ctx, status, location)
            }
        }
    }
}
