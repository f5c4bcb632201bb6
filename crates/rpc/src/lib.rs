// rpc/src/lib.rs
pub mod server;
pub mod methods;
pub mod types;

pub use server::{RpcServer, RpcConfig};
pub use methods::{RpcMethods, BLOCK_NUMBER};
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Parse error")]
    ParseError,
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Method not found")]
    MethodNotFound(String),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl RpcError {
    pub fn code(&self) -> i32 {
        match self {
            RpcError::ParseError => -32700,
            RpcError::InvalidRequest => -32600,
            RpcError::MethodNotFound(_) => -32601,
            RpcError::Io(_) => -32000,
        }
    }
}

pub type RpcResult<T> = Result<T, RpcError>;
