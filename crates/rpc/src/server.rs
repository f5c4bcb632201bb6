// rpc/src/server.rs
use crate::{RpcError, RpcMethods, RpcRequest, RpcResponse, RpcResult};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::server::conn::Http;
use hyper::service::service_fn;
use hyper::{Body, Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Pause after a failed `accept` (fd exhaustion, aborted handshake) before retrying
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);
const NOT_FOUND_BODY: &str = "Not found";
const INTERNAL_ERROR_BODY: &str =
    r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error"}}"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Port 0 binds an ephemeral port
    pub listen_addr: SocketAddr,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
        }
    }
}

/// Single-connection-at-a-time JSON-RPC responder.
///
/// Each accepted connection is served to completion (one request, then
/// close) before the next one is accepted.
pub struct RpcServer {
    listener: TcpListener,
    methods: RpcMethods,
}

impl RpcServer {
    pub async fn bind(config: RpcConfig, methods: RpcMethods) -> RpcResult<Self> {
        let listener = TcpListener::bind(config.listen_addr).await?;
        tracing::info!("RPC server bound to {}", listener.local_addr()?);
        Ok(Self { listener, methods })
    }

    pub fn local_addr(&self) -> RpcResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn serve(self: Arc<Self>) -> RpcResult<()> {
        tracing::info!("RPC server listening on {}", self.local_addr()?);

        let mut http = Http::new();
        http.http1_keep_alive(false);

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::warn!("Accept error: {}", e);
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                }
            };
            tracing::debug!(%peer, "Accepted connection");

            let server = self.clone();
            let service = service_fn(move |req| {
                let server = server.clone();
                async move { server.handle_request(req).await }
            });

            if let Err(e) = http.serve_connection(stream, service).await {
                tracing::warn!(%peer, "Connection error: {}", e);
            }
        }
    }

    async fn handle_request(&self, req: Request<Body>) -> Result<Response<Body>, hyper::Error> {
        if req.method() != Method::POST {
            tracing::debug!(method = %req.method(), path = %req.uri().path(), "Not found");
            return Ok(text_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY));
        }

        let body_bytes = hyper::body::to_bytes(req.into_body()).await?;
        let response = self.process_body(&body_bytes).await;

        let json = match serde_json::to_string(&response) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to encode response: {}", e);
                INTERNAL_ERROR_BODY.to_string()
            }
        };

        Ok(json_response(json))
    }

    async fn process_body(&self, body: &[u8]) -> RpcResponse {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!("Unparseable request body: {}", e);
                return RpcResponse::failure(serde_json::Value::Null, &RpcError::ParseError);
            }
        };

        let id = value.get("id").cloned().unwrap_or_default();
        match serde_json::from_value::<RpcRequest>(value) {
            Ok(request) => self.process_request(request).await,
            Err(e) => {
                tracing::debug!("Malformed request object: {}", e);
                RpcResponse::failure(id, &RpcError::InvalidRequest)
            }
        }
    }

    async fn process_request(&self, request: RpcRequest) -> RpcResponse {
        tracing::debug!(method = %request.method, id = %request.id, "Dispatching");

        match self.methods.handle(&request.method, request.params).await {
            Ok(result) => RpcResponse::success(request.id, result),
            Err(error) => RpcResponse::failure(request.id, &error),
        }
    }
}

fn json_response(body: String) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

fn text_response(status: StatusCode, body: &'static str) -> Response<Body> {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}
