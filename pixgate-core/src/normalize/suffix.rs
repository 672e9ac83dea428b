use crate::normalize::types::ImageOperations;
use smallvec::SmallVec;

/// Serialize resolved operations into the canonical variant suffix.
///
/// Token order is fixed: `format`, then `quality`, then `width`. Quality is
/// emitted only when the client resolved one; height is never part of the
/// variant key. Downstream the origin parses exactly this grammar, so the
/// order must not vary.
pub(crate) fn canonical_suffix(ops: &ImageOperations) -> String {
    let mut tokens: SmallVec<[String; 3]> = SmallVec::new();

    if let Some(format) = ops.format {
        tokens.push(format!("format={}", format.as_str()));
    }
    if let Some(quality) = ops.quality {
        tokens.push(format!("quality={quality}"));
    }
    if let Some(width) = ops.width {
        tokens.push(format!("width={width}"));
    }

    tokens.join(",")
}

/// Final upstream URI: original path, a separating slash, the suffix.
pub(crate) fn canonical_uri(path: &str, ops: &ImageOperations) -> String {
    format!("{}/{}", path, canonical_suffix(ops))
}
