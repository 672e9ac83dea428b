use crate::ctx::normalization::{
    NormalizationOutcome, NormalizedPath, RejectReason, RewriteReason,
};

/// Normalize an asset path before it reaches the variant pipeline.
///
/// Rules applied, in order:
/// - NUL bytes are rejected outright (never valid in HTTP semantics).
/// - Empty and relative paths are rewritten to absolute form.
/// - "." segments vanish; ".." segments pop, and popping above root is
///   rejected as traversal.
/// - Repeated and trailing slashes collapse (root stays "/").
///
/// The canonical suffix is appended to this path later, so a trailing slash
/// here would leak straight into the cache key.
pub fn normalize_path(path: &str) -> NormalizationOutcome<NormalizedPath> {
    if path.as_bytes().contains(&0) {
        return NormalizationOutcome::Reject {
            reason: RejectReason::InvalidUtf8,
        };
    }

    if path.is_empty() {
        return NormalizationOutcome::Rewrite {
            value: NormalizedPath::default(),
            reason: RewriteReason::PathCanonicalization,
        };
    }

    if path == "/" {
        return NormalizationOutcome::Accept(NormalizedPath::default());
    }

    let mut rewritten = !path.starts_with('/') || path.starts_with("//");
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.trim_start_matches('/').split('/') {
        match segment {
            "" | "." => rewritten = true,
            ".." => {
                if segments.pop().is_none() {
                    return NormalizationOutcome::Reject {
                        reason: RejectReason::PathTraversal,
                    };
                }
                rewritten = true;
            }
            _ => segments.push(segment),
        }
    }

    let value = NormalizedPath(format!("/{}", segments.join("/")));

    if rewritten {
        NormalizationOutcome::Rewrite {
            value,
            reason: RewriteReason::PathCanonicalization,
        }
    } else {
        NormalizationOutcome::Accept(value)
    }
}
