use crate::conf::ConfigError;
use crate::conf::types::{NormalizerConfig, QualityPolicyConfig, RedirectConfig};
use crate::normalize::quantize::BucketTable;
use crate::normalize::types::Format;
use smallvec::SmallVec;

/// Runtime policy for the request normalizer.
///
/// The diverging behaviors observed across deployments (quality quantization
/// vs. clamp-only, avif negotiation, redirect-vs-forced handling of bypass
/// formats, default format) are knobs on this one struct rather than separate
/// code paths. Built once from the device config blob at startup; read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct NormalizerPolicy {
    pub width_buckets: BucketTable,
    pub quality_buckets: BucketTable,
    pub default_width: u32,
    pub default_format: Format,
    pub supported_formats: SmallVec<[Format; 8]>,
    pub negotiate_avif: bool,
    pub quality_policy: QualityPolicy,
    pub forced_formats: SmallVec<[Format; 2]>,
    pub redirect: Option<RedirectPolicy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPolicy {
    /// Snap the clamped value to the quality bucket table.
    Buckets,
    /// Use the clamped value directly.
    Clamp,
}

/// Bypass policy: matching assets 302 to an external resizer instead of
/// being normalized in place.
#[derive(Debug, Clone)]
pub struct RedirectPolicy {
    pub extensions: Vec<String>,
    pub fallback_host: String,
    pub host_token: String,
    pub replacement_token: String,
    pub width: u32,
    pub crop: String,
    pub status: u16,
}

impl NormalizerPolicy {
    /// Build and validate a policy from its config blob.
    ///
    /// Config problems are startup errors; nothing here is reachable from
    /// request input.
    pub fn from_config(cfg: &NormalizerConfig) -> Result<Self, ConfigError> {
        validate_bucket_entries("width_buckets", &cfg.width_buckets)?;
        validate_bucket_entries("quality_buckets", &cfg.quality_buckets)?;

        if let Some(&worst) = cfg.quality_buckets.iter().find(|&&q| q > 100) {
            return Err(ConfigError::QualityBucketOutOfRange { value: worst });
        }

        let width_buckets = BucketTable::new(cfg.width_buckets.clone());
        if !width_buckets.contains(cfg.default_width) {
            return Err(ConfigError::DefaultWidthNotBucketed {
                width: cfg.default_width,
            });
        }

        let supported_formats: SmallVec<[Format; 8]> =
            parse_formats(&cfg.supported_formats)?.into_iter().collect();

        let default_format = match Format::parse(&cfg.default_format) {
            Some(format) if supported_formats.contains(&format) => format,
            _ => {
                return Err(ConfigError::UnsupportedDefaultFormat {
                    format: cfg.default_format.clone(),
                });
            }
        };

        let forced_formats: SmallVec<[Format; 2]> =
            parse_formats(&cfg.forced_formats)?.into_iter().collect();

        let redirect = cfg.redirect.as_ref().map(build_redirect_policy).transpose()?;

        // A given extension is either redirected out or force-formatted in
        // place, never both.
        if let Some(redirect_policy) = redirect.as_ref() {
            for format in &forced_formats {
                for ext in format.extensions() {
                    if redirect_policy.extensions.iter().any(|e| e == ext) {
                        return Err(ConfigError::ConflictingExtensionPolicy {
                            extension: ext.to_string(),
                        });
                    }
                }
            }
        }

        Ok(NormalizerPolicy {
            width_buckets,
            quality_buckets: BucketTable::new(cfg.quality_buckets.clone()),
            default_width: cfg.default_width,
            default_format,
            supported_formats,
            negotiate_avif: cfg.negotiate_avif,
            quality_policy: match cfg.quality_policy {
                QualityPolicyConfig::Buckets => QualityPolicy::Buckets,
                QualityPolicyConfig::Clamp => QualityPolicy::Clamp,
            },
            forced_formats,
            redirect,
        })
    }

    pub fn supports(&self, format: Format) -> bool {
        self.supported_formats.contains(&format)
    }

    /// Clamp to the [1,100] range, then apply the configured policy.
    pub fn resolve_quality(&self, requested: u32) -> u8 {
        let clamped = requested.min(100);
        let resolved = match self.quality_policy {
            QualityPolicy::Buckets => self.quality_buckets.nearest(clamped),
            QualityPolicy::Clamp => clamped,
        };
        resolved as u8
    }
}

fn validate_bucket_entries(table: &'static str, entries: &[u32]) -> Result<(), ConfigError> {
    if entries.is_empty() {
        return Err(ConfigError::EmptyBucketTable { table });
    }
    if !entries.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(ConfigError::UnorderedBucketTable { table });
    }
    Ok(())
}

fn parse_formats(names: &[String]) -> Result<Vec<Format>, ConfigError> {
    let mut formats = Vec::new();
    for name in names {
        // `auto` is a request sentinel, not an output format; tolerate it in
        // the supported list for config compatibility.
        if name.eq_ignore_ascii_case("auto") {
            continue;
        }
        match Format::parse(name) {
            Some(format) => formats.push(format),
            None => {
                return Err(ConfigError::UnknownFormat {
                    format: name.clone(),
                });
            }
        }
    }
    Ok(formats)
}

fn build_redirect_policy(cfg: &RedirectConfig) -> Result<RedirectPolicy, ConfigError> {
    if cfg.extensions.is_empty() {
        return Err(ConfigError::EmptyRedirectExtensions);
    }
    if !(300..400).contains(&cfg.status) {
        return Err(ConfigError::InvalidRedirectStatus { status: cfg.status });
    }

    Ok(RedirectPolicy {
        extensions: cfg.extensions.clone(),
        fallback_host: cfg.fallback_host.clone(),
        host_token: cfg.host_token.clone(),
        replacement_token: cfg.replacement_token.clone(),
        width: cfg.width,
        crop: cfg.crop.clone(),
        status: cfg.status,
    })
}
