use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // Listener / Origin
    //-------------------------------------------------------------------------
    #[error("invalid listener socket address '{addr}'")]
    InvalidListenerAddr { addr: String },

    #[error("origin host must not be empty")]
    EmptyOriginHost,

    #[error("origin port must be non-zero")]
    InvalidOriginPort,

    //-------------------------------------------------------------------------
    // Devices
    //-------------------------------------------------------------------------
    #[error("builtin device '{name}' missing builtin type")]
    MissingBuiltinKind { name: String },

    #[error("duplicate device name '{name}'")]
    DuplicateDevice { name: String },

    #[error("invalid config for device '{name}': {source}")]
    InvalidDeviceConfig {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    //-------------------------------------------------------------------------
    // Normalizer policy
    //-------------------------------------------------------------------------
    #[error("bucket table '{table}' must not be empty")]
    EmptyBucketTable { table: &'static str },

    #[error("bucket table '{table}' must be strictly ascending")]
    UnorderedBucketTable { table: &'static str },

    #[error("quality bucket {value} exceeds 100")]
    QualityBucketOutOfRange { value: u32 },

    #[error("default width {width} is not a member of the width bucket table")]
    DefaultWidthNotBucketed { width: u32 },

    #[error("default format '{format}' is not in the supported set")]
    UnsupportedDefaultFormat { format: String },

    #[error("unknown format '{format}'")]
    UnknownFormat { format: String },

    #[error("redirect bypass configured with no extensions")]
    EmptyRedirectExtensions,

    #[error("redirect status {status} is not a 3xx status")]
    InvalidRedirectStatus { status: u16 },

    #[error(
        "extension '{extension}' is configured for both redirect bypass and forced format"
    )]
    ConflictingExtensionPolicy { extension: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
