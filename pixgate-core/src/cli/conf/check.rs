use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ listening on {}", cfg.server.listen);
            println!("✔ origin {}:{}", cfg.origin.host, cfg.origin.port);
            println!(
                "✔ {} devices enabled",
                cfg.devices.iter().filter(|d| d.enabled).count()
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("✘ {err}");

    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Normalizer policy errors
        //---------------------------------------------------------------------
        ConfigError::UnorderedBucketTable { .. } | ConfigError::EmptyBucketTable { .. } => Some(
            "Bucket tables are ascending lists of distinct values.\n\
             \n\
             Example:\n\
             \n\
             [devices.config]\n\
             width_buckets   = [64, 100, 128, 200, 300, 400]\n\
             quality_buckets = [30, 50, 80, 100]",
        ),

        ConfigError::DefaultWidthNotBucketed { .. } => Some(
            "The default width is a cache key like any other and must be one\n\
             of the width buckets.\n\
             \n\
             Add it to `width_buckets` or pick an existing bucket.",
        ),

        ConfigError::ConflictingExtensionPolicy { .. } => Some(
            "An extension is either redirected to the external resizer or\n\
             normalized in place with its format forced, never both.\n\
             \n\
             Remove it from `redirect.extensions` or from `forced_formats`.",
        ),

        ConfigError::UnsupportedDefaultFormat { .. } => Some(
            "The default format must be a concrete member of\n\
             `supported_formats` ('auto' is a request sentinel, not a format).",
        ),

        //---------------------------------------------------------------------
        // Listener / origin errors
        //---------------------------------------------------------------------
        ConfigError::InvalidListenerAddr { .. } => Some(
            "Listeners bind a socket address.\n\
             \n\
             Example:\n\
             \n\
             [server]\n\
             listen = \"0.0.0.0:8080\"",
        ),

        ConfigError::EmptyOriginHost | ConfigError::InvalidOriginPort => Some(
            "The origin is the image-resizing service behind the gateway.\n\
             \n\
             Example:\n\
             \n\
             [origin]\n\
             host = \"127.0.0.1\"\n\
             port = 9000",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
