use serde::Deserialize;

/// The image-resizing origin every normalized request is proxied to.
#[derive(Debug, Clone, Deserialize)]
pub struct OriginConfig {
    pub host: String,
    pub port: u16,

    #[serde(default)]
    pub use_tls: bool,

    /// SNI for TLS origins; defaults to the origin host.
    pub sni: Option<String>,
}
