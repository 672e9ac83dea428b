use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DeviceConfig {
    pub name: String,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(rename = "type")]
    pub kind: DeviceKind,

    /// Required for `kind = "builtin"`
    pub builtin: Option<BuiltinDeviceKind>,

    /// Device-specific configuration blob
    #[serde(default = "empty_table")]
    pub config: toml::Value,
}

fn default_enabled() -> bool {
    true
}

fn empty_table() -> toml::Value {
    toml::Value::Table(toml::map::Map::new())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Builtin,
}

#[derive(Debug, Deserialize, Eq, Hash, PartialEq, Clone)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinDeviceKind {
    ImageNormalizer,
    StructuredLogging,
}
