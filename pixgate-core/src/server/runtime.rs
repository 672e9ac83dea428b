use crate::conf::PixgateConfig;
use crate::device::core::registry::DeviceRegistry;
use anyhow::Result;

/// Read-only state shared by every request evaluation.
///
/// Built once at startup from validated config; nothing here mutates at
/// request time, so the gateway can evaluate arbitrarily many requests
/// concurrently without ordering constraints.
pub struct RuntimeState {
    pub devices: DeviceRegistry,
    pub origin: OriginRuntime,
}

/// Resolved origin upstream (the image-resizing service).
#[derive(Debug, Clone)]
pub struct OriginRuntime {
    pub host: String,
    pub port: u16,
    pub use_tls: bool,
    pub sni: String,
}

pub fn build_runtime_state(config: &PixgateConfig) -> Result<RuntimeState> {
    let mut devices = DeviceRegistry::new();
    devices.load_from_config(config)?;

    let origin = OriginRuntime {
        host: config.origin.host.clone(),
        port: config.origin.port,
        use_tls: config.origin.use_tls,
        sni: config
            .origin
            .sni
            .clone()
            .unwrap_or_else(|| config.origin.host.clone()),
    };

    Ok(RuntimeState { devices, origin })
}
