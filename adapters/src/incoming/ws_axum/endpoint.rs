use axum::{
    extract::{ConnectInfo, State, WebSocketUpgrade},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::warn;

use crate::incoming::http_axum::error_mapper::HttpError;
use crate::shared::app_state::AppState;
use geo_relay_application::error::AppError;

use super::{handler::ConnectionHandler, ip_utils::extract_client_ip};

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/ws",
    responses(
        (status = 101, description = "WebSocket connection established for real-time location updates"),
        (status = 400, description = "Bad Request - WebSocket upgrade failed"),
        (status = 503, description = "Maximum WebSocket connections reached")
    ),
    tag = "websocket",
    summary = "Join the location relay",
    description = r#"
Upgrades the HTTP connection to a WebSocket that joins the location relay.

## Protocol Overview
Every frame is a JSON text message of the form `{"event": <name>, "data": <payload>}`.

## Client Message Types
- `locationUpdate` (legacy name `sendLocation`): `data` is `{"latitude": number, "longitude": number, "speed": number}`.
  Latitude must be within [-90, 90], longitude within [-180, 180], speed non-negative.
  Malformed or out-of-range updates are silently dropped; no error is sent back.

## Server Message Types
- `updateLocation`: every accepted update, sent verbatim to all connected clients including its sender.

## Slow Consumers
Each connection has a bounded outbound queue (`websocket.connection_buffer_size`).
A client that falls that far behind is disconnected rather than slowing down everyone else.
    "#,
    operation_id = "websocket_connect"
))]
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    let client_ip = extract_client_ip(
        &headers,
        Some(addr),
        state.config.server.trust_forwarded_headers,
    );

    if !state.has_socket_capacity() {
        let limit = state.config.websocket.max_connections.unwrap_or_default();
        warn!(
            "Rejecting WebSocket upgrade from {}: connection limit reached",
            client_ip
        );
        return HttpError(AppError::ConnectionLimitReached { limit }).into_response();
    }

    ws.on_upgrade(move |socket| {
        let handler = ConnectionHandler::new(socket, &state, client_ip);
        handler.run(state)
    })
}
