mod device;
mod normalizer;
mod origin;
mod server;

pub use device::*;
pub use normalizer::*;
pub use origin::*;
pub use server::*;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PixgateConfig {
    pub server: ServerConfig,
    pub origin: OriginConfig,

    #[serde(default)]
    pub devices: Vec<DeviceConfig>,
}
