// rpc/src/methods.rs
use crate::{RpcError, RpcResult};

/// Block height reported by `eth_blockNumber`
pub const BLOCK_NUMBER: &str = "0x123456";

/// Canned method table. Nothing here touches a real chain.
#[derive(Debug, Clone, Default)]
pub struct RpcMethods;

impl RpcMethods {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        method: &str,
        _params: serde_json::Value,
    ) -> RpcResult<serde_json::Value> {
        match method {
            "eth_blockNumber" => self.eth_block_number().await,
            _ => Err(RpcError::MethodNotFound(method.to_string())),
        }
    }

    async fn eth_block_number(&self) -> RpcResult<serde_json::Value> {
        Ok(serde_json::json!(BLOCK_NUMBER))
    }
}
