use crate::normalize::policy::RedirectPolicy;

/// Build the bypass redirect for assets the edge layer does not normalize
/// itself (animated/complex formats handed to an external resizer).
///
/// Returns `None` when the path does not carry a bypass extension. The
/// alternate host derives from the request host by replacing the first
/// occurrence of the configured token (`cdn` -> `minio` by default); a
/// missing host header falls back to the configured host.
pub(crate) fn bypass_redirect(
    policy: &RedirectPolicy,
    path: &str,
    host: Option<&str>,
) -> Option<(u16, String)> {
    if !policy
        .extensions
        .iter()
        .any(|ext| path.ends_with(ext.as_str()))
    {
        return None;
    }

    let host = host.unwrap_or(&policy.fallback_host);
    let alternate = host.replacen(&policy.host_token, &policy.replacement_token, 1);

    // The path supplies the joining slash.
    let location = if path.starts_with('/') {
        format!(
            "https://{}/img/{}/{}/resize{}",
            alternate, policy.width, policy.crop, path
        )
    } else {
        format!(
            "https://{}/img/{}/{}/resize/{}",
            alternate, policy.width, policy.crop, path
        )
    };

    Some((policy.status, location))
}
