// chain-devtools/src/config.rs
use rpc::RpcConfig;
use serde::{Deserialize, Serialize};

/// On-disk configuration for `dummy-rpc`.
///
/// ```toml
/// [rpc]
/// listen_addr = "127.0.0.1:8000"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub rpc: RpcConfig,
}

impl ServerConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
