/// Output formats the image pipeline can produce.
///
/// The request-side sentinel `auto` is recognized during parameter parsing
/// but is never a member of this enum; it always resolves to a concrete
/// format before serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Jpeg,
    Webp,
    Png,
    Svg,
    Gif,
    Avif,
}

impl Format {
    /// Case-insensitive parse of a client- or config-supplied format name.
    pub fn parse(raw: &str) -> Option<Format> {
        match raw.to_ascii_lowercase().as_str() {
            "jpeg" => Some(Format::Jpeg),
            "webp" => Some(Format::Webp),
            "png" => Some(Format::Png),
            "svg" => Some(Format::Svg),
            "gif" => Some(Format::Gif),
            "avif" => Some(Format::Avif),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Jpeg => "jpeg",
            Format::Webp => "webp",
            Format::Png => "png",
            Format::Svg => "svg",
            Format::Gif => "gif",
            Format::Avif => "avif",
        }
    }

    /// Path suffixes that identify an asset of this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Jpeg => &[".jpeg", ".jpg"],
            Format::Webp => &[".webp"],
            Format::Png => &[".png"],
            Format::Svg => &[".svg"],
            Format::Gif => &[".gif"],
            Format::Avif => &[".avif"],
        }
    }
}

/// Resolved per-request transform operations.
///
/// A transient record, built fresh for every request and discarded after
/// serialization. `height` is accepted from clients but is not part of the
/// variant key and is never serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOperations {
    pub format: Option<Format>,
    pub width: Option<u32>,
    pub quality: Option<u8>,
    pub height: Option<u32>,
}

/// Terminal result of normalizing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// Proxy upstream with the canonical variant path. The rewritten request
    /// carries no query string; the suffix alone is the cache key.
    Rewrite { uri: String },

    /// Bypass normalization and send the client to the external resizer.
    Redirect { status: u16, location: String },
}
