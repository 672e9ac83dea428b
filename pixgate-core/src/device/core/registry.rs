use crate::conf::PixgateConfig;
use crate::conf::types::{BuiltinDeviceKind, DeviceKind};
use crate::device::builtin::image_normalizer::ImageNormalizerDevice;
use crate::device::builtin::structured_logging::StructuredLoggingDevice;
use crate::device::core::Device;
use anyhow::{Context, Result, anyhow};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

type BuiltinBuilder = fn(&toml::Value) -> Result<Arc<dyn Device>>;

fn build_image_normalizer(cfg: &toml::Value) -> Result<Arc<dyn Device>> {
    Ok(Arc::new(ImageNormalizerDevice::from_config(cfg)?))
}

fn build_structured_logging(cfg: &toml::Value) -> Result<Arc<dyn Device>> {
    Ok(Arc::new(StructuredLoggingDevice::from_config(cfg)?))
}

static BUILTIN_BUILDERS: Lazy<HashMap<BuiltinDeviceKind, BuiltinBuilder>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        BuiltinDeviceKind::ImageNormalizer,
        build_image_normalizer as BuiltinBuilder,
    );

    map.insert(
        BuiltinDeviceKind::StructuredLogging,
        build_structured_logging as BuiltinBuilder,
    );

    map
});

pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    pub fn load_from_config(&mut self, cfg: &PixgateConfig) -> Result<()> {
        for device_cfg in &cfg.devices {
            if !device_cfg.enabled {
                continue;
            }

            match device_cfg.kind {
                DeviceKind::Builtin => {
                    let kind = device_cfg.builtin.as_ref().ok_or_else(|| {
                        anyhow!("builtin device '{}' missing type", device_cfg.name)
                    })?;

                    let builder = BUILTIN_BUILDERS
                        .get(kind)
                        .ok_or_else(|| anyhow!("unknown builtin device '{}'", device_cfg.name))?;

                    let device = builder(&device_cfg.config).with_context(|| {
                        format!("failed to build builtin device '{}'", device_cfg.name)
                    })?;

                    self.devices.push(device);
                }
            }
        }

        Ok(())
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
