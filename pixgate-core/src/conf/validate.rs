use crate::conf::error::ConfigError;
use crate::conf::types::{
    BuiltinDeviceKind, DeviceConfig, DeviceKind, NormalizerConfig, OriginConfig, PixgateConfig,
    ServerConfig,
};
use crate::normalize::NormalizerPolicy;
use std::collections::HashSet;
use std::net::SocketAddr;

pub(crate) fn validate(config: &PixgateConfig) -> Result<(), ConfigError> {
    validate_server(&config.server)?;
    validate_origin(&config.origin)?;
    validate_devices(&config.devices)?;
    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ConfigError> {
    if server.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::InvalidListenerAddr {
            addr: server.listen.clone(),
        });
    }
    Ok(())
}

fn validate_origin(origin: &OriginConfig) -> Result<(), ConfigError> {
    if origin.host.trim().is_empty() {
        return Err(ConfigError::EmptyOriginHost);
    }
    if origin.port == 0 {
        return Err(ConfigError::InvalidOriginPort);
    }
    Ok(())
}

fn validate_devices(devices: &[DeviceConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for device in devices {
        if !seen.insert(device.name.as_str()) {
            return Err(ConfigError::DuplicateDevice {
                name: device.name.clone(),
            });
        }

        match device.kind {
            DeviceKind::Builtin => {
                let Some(kind) = device.builtin.as_ref() else {
                    return Err(ConfigError::MissingBuiltinKind {
                        name: device.name.clone(),
                    });
                };

                // Normalizer blobs carry the policy invariants; surface those
                // here rather than at registry build time.
                if *kind == BuiltinDeviceKind::ImageNormalizer {
                    let cfg: NormalizerConfig =
                        device.config.clone().try_into().map_err(|source| {
                            ConfigError::InvalidDeviceConfig {
                                name: device.name.clone(),
                                source,
                            }
                        })?;
                    NormalizerPolicy::from_config(&cfg)?;
                }
            }
        }
    }

    Ok(())
}
