mod format;
mod params;
mod policy;
mod quantize;
mod redirect;
mod suffix;
#[cfg(test)]
mod tests;
mod types;

pub use policy::*;
pub use quantize::BucketTable;
pub use types::*;

use http::{HeaderMap, header};

/// Normalize one image request into its canonical variant form.
///
/// The high-cardinality space of client query strings collapses into a small
/// fixed set of path suffixes, so downstream caches hold a bounded number of
/// variants per source image. Evaluation order:
///
/// 1. Bypass extensions short-circuit into a redirect and nothing else runs.
/// 2. Recognized query parameters (`f`, `w`, `h`, `q`) are lifted out of the
///    query string; everything else is ignored.
/// 3. The output format resolves from forced extension, explicit parameter,
///    accept-header negotiation, or the configured default, in that order.
/// 4. Width and quality snap to their bucket tables; width falls back to the
///    configured default when the client supplied none.
/// 5. A forced-format asset (e.g. gif) drops size and quality keys entirely.
///
/// This is a single-pass transform: the input must be an original client
/// request. Feeding a rewritten URI back through appends a second suffix,
/// because an empty query resolves to the default variant.
///
/// Malformed input never fails; every unusable value degrades to "not
/// supplied" and the request proceeds with defaults.
pub fn normalize_request(
    policy: &NormalizerPolicy,
    path: &str,
    query: &[(String, String)],
    headers: &HeaderMap,
) -> NormalizeOutcome {
    // Bypass extensions never enter normalization.
    if let Some(redirect_policy) = policy.redirect.as_ref() {
        let host = header_str(headers, header::HOST);
        if let Some((status, location)) = redirect::bypass_redirect(redirect_policy, path, host) {
            return NormalizeOutcome::Redirect { status, location };
        }
    }

    let raw = params::extract_operations(query);
    let accept = header_str(headers, header::ACCEPT);

    // A forced extension wins over every other format signal.
    let forced = format::forced_format(policy, path);

    let mut ops = ImageOperations {
        format: Some(match forced {
            Some(f) => f,
            None => format::resolve_format(policy, raw.format.as_deref(), accept),
        }),
        width: raw.width.map(|w| policy.width_buckets.nearest(w)),
        quality: raw.quality.map(|q| policy.resolve_quality(q)),
        height: raw.height,
    };

    if ops.width.is_none() {
        ops.width = Some(policy.default_width);
    }

    if forced.is_some() {
        // Forced formats are served as-is; size and quality keys would only
        // multiply cache entries for identical bytes.
        ops.width = None;
        ops.quality = None;
        ops.height = None;
    }

    NormalizeOutcome::Rewrite {
        uri: suffix::canonical_uri(path, &ops),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: header::HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}
