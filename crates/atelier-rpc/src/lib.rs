//! # atelier-rpc
//!
//! Envelope shapes for the JSON-RPC channel and its WebSocket carrier.
//! Shapes only: framing, request/response correlation, and the socket
//! itself belong to the transport that consumes these records.
//!
//! A request without an `id` is a notification; `params` and `result`
//! stay untyped (`any`) because their schema depends on the method.

use atelier_json::dto;

dto! {
    /// A JSON-RPC request or notification.
    pub struct JsonRpcRequest {
        jsonrpc: (string) = "jsonrpc",
        id: (string) = "id",
        method: (string) = "method",
        params: (any) = "params",
    }
}

dto! {
    /// A JSON-RPC response, carrying either `result` or `error`.
    pub struct JsonRpcResponse {
        jsonrpc: (string) = "jsonrpc",
        id: (string) = "id",
        result: (any) = "result",
        error: (dto JsonRpcError) = "error",
    }
}

dto! {
    pub struct JsonRpcError {
        code: (int) = "code",
        message: (string) = "message",
        data: (any) = "data",
    }
}

dto! {
    /// One WebSocket frame: a protocol discriminator plus the serialized
    /// message it carries.
    pub struct WebSocketTransmission {
        protocol: (string) = "protocol",
        message: (string) = "message",
    }
}
