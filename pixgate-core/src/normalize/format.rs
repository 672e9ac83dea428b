use crate::normalize::policy::NormalizerPolicy;
use crate::normalize::types::Format;

/// Request-side sentinel asking for negotiated output.
const AUTO: &str = "auto";

/// Return the format an extension forces on this asset, if any.
///
/// Forced formats (configured, typically gif) beat every other signal; the
/// caller also suppresses width and quality for them.
pub(crate) fn forced_format(policy: &NormalizerPolicy, path: &str) -> Option<Format> {
    policy
        .forced_formats
        .iter()
        .copied()
        .find(|format| format.extensions().iter().any(|ext| path.ends_with(ext)))
}

/// Resolve the canonical output format from the explicit parameter and the
/// accept header.
///
/// An explicit, supported, non-`auto` value wins. Anything else - absent,
/// empty, unsupported, malformed, or `auto` - falls through to content
/// negotiation. No input is ever an error.
pub(crate) fn resolve_format(
    policy: &NormalizerPolicy,
    explicit: Option<&str>,
    accept: Option<&str>,
) -> Format {
    if let Some(raw) = explicit {
        let lowered = raw.to_ascii_lowercase();
        if lowered != AUTO {
            if let Some(format) = Format::parse(&lowered) {
                if policy.supports(format) {
                    return format;
                }
            }
        }
    }

    negotiate(policy, accept)
}

fn negotiate(policy: &NormalizerPolicy, accept: Option<&str>) -> Format {
    let accept = accept.unwrap_or_default();

    if policy.negotiate_avif && accept.contains("avif") {
        return Format::Avif;
    }

    if accept.contains("webp") {
        return Format::Webp;
    }

    policy.default_format
}
