use serde::Deserialize;

/// Configuration blob for the `image_normalizer` builtin device.
///
/// Every knob has a default matching the production bucket scheme, so an
/// empty blob yields a working normalizer.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    #[serde(default = "default_width_buckets")]
    pub width_buckets: Vec<u32>,

    #[serde(default = "default_quality_buckets")]
    pub quality_buckets: Vec<u32>,

    /// Applied when the client supplies no usable width.
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Applied when negotiation yields nothing.
    #[serde(default = "default_format")]
    pub default_format: String,

    #[serde(default = "default_supported_formats")]
    pub supported_formats: Vec<String>,

    /// Offer avif to clients that accept it.
    #[serde(default)]
    pub negotiate_avif: bool,

    #[serde(default)]
    pub quality_policy: QualityPolicyConfig,

    /// Formats normalized in place with the format forced by extension and
    /// size/quality suppressed, e.g. ["gif"].
    #[serde(default)]
    pub forced_formats: Vec<String>,

    /// Bypass policy: matching extensions 302 to the external resizer.
    pub redirect: Option<RedirectConfig>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            width_buckets: default_width_buckets(),
            quality_buckets: default_quality_buckets(),
            default_width: default_width(),
            default_format: default_format(),
            supported_formats: default_supported_formats(),
            negotiate_avif: false,
            quality_policy: QualityPolicyConfig::default(),
            forced_formats: Vec::new(),
            redirect: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QualityPolicyConfig {
    #[default]
    Buckets,
    Clamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RedirectConfig {
    /// Path suffixes that bypass normalization, e.g. [".gif", ".avif"]
    pub extensions: Vec<String>,

    /// Used when the request carries no host header.
    #[serde(default = "default_fallback_host")]
    pub fallback_host: String,

    #[serde(default = "default_host_token")]
    pub host_token: String,

    #[serde(default = "default_replacement_token")]
    pub replacement_token: String,

    #[serde(default = "default_redirect_width")]
    pub width: u32,

    #[serde(default = "default_redirect_crop")]
    pub crop: String,

    #[serde(default = "default_redirect_status")]
    pub status: u16,
}

fn default_width_buckets() -> Vec<u32> {
    vec![
        64, 100, 128, 200, 300, 400, 500, 600, 640, 700, 800, 900, 1024, 1280, 1600, 1920,
    ]
}

fn default_quality_buckets() -> Vec<u32> {
    vec![30, 50, 80, 100]
}

fn default_width() -> u32 {
    400
}

fn default_format() -> String {
    "jpeg".to_string()
}

fn default_supported_formats() -> Vec<String> {
    ["jpeg", "webp", "png", "svg", "gif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fallback_host() -> String {
    "cdn.cacheimg.com".to_string()
}

fn default_host_token() -> String {
    "cdn".to_string()
}

fn default_replacement_token() -> String {
    "minio".to_string()
}

fn default_redirect_width() -> u32 {
    720
}

fn default_redirect_crop() -> String {
    "0".to_string()
}

fn default_redirect_status() -> u16 {
    302
}
