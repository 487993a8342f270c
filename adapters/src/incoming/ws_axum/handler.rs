use axum::extract::ws::{Message, WebSocket};
use futures::stream::{SplitStream, StreamExt};
use std::{net::IpAddr, sync::Arc};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::incoming::ws_axum::protocol::WSMessage;
use crate::outgoing::sink_tokio_mpsc::connection_sink_mpsc::MpscConnectionSink;
use crate::shared::app_state::AppState;
use domain::{
    connection::{ConnectionId, ConnectionState},
    location::LocationEvent,
};

use super::connection::Connection;

pub struct ConnectionCounterGuard {
    state: AppState,
}

impl ConnectionCounterGuard {
    pub fn new(state: AppState) -> Self {
        state.socket_opened();
        Self { state }
    }
}

impl Drop for ConnectionCounterGuard {
    fn drop(&mut self) {
        self.state.socket_closed();
    }
}

pub struct ConnectionHandler {
    connection: Connection,
    message_receiver: SplitStream<WebSocket>,
    outbound_receiver: mpsc::Receiver<LocationEvent>,
    connection_id: ConnectionId,
    lifecycle: ConnectionState,
    client_ip: IpAddr,
    _connection_counter_guard: ConnectionCounterGuard,
}

impl ConnectionHandler {
    pub fn new(socket: WebSocket, state: &AppState, client_ip: IpAddr) -> Self {
        let counter_guard = ConnectionCounterGuard::new(state.clone());
        let (connection, message_receiver) = Connection::new(socket, client_ip);
        let (sink, outbound_receiver) =
            MpscConnectionSink::channel(state.config.websocket.connection_buffer_size);

        let connection_id = state.relay_service.on_connect(client_ip, Arc::new(sink));

        Self {
            connection,
            message_receiver,
            outbound_receiver,
            connection_id,
            lifecycle: ConnectionState::Connected,
            client_ip,
            _connection_counter_guard: counter_guard,
        }
    }

    pub async fn run(mut self, state: AppState) {
        info!(
            connection_id = %self.connection_id,
            "New WebSocket connection established for IP: {}",
            self.client_ip
        );

        let batch_limit = state.config.websocket.connection_buffer_size.max(1);
        let mut batch = Vec::with_capacity(batch_limit);

        loop {
            tokio::select! {
                biased;

                received = self.outbound_receiver.recv_many(&mut batch, batch_limit) => {
                    if !self.flush_outbound_batch(received, &mut batch).await {
                        break;
                    }
                }

                client_msg = self.message_receiver.next() => {
                    if !self.handle_client_message(client_msg, &state) {
                        break;
                    }
                    // Let peers drain what this frame just fanned out to them.
                    tokio::task::yield_now().await;
                }
            }
        }

        self.disconnect(&state);
        self.connection.close().await;

        info!(
            connection_id = %self.connection_id,
            "WebSocket connection closed for IP: {}",
            self.client_ip
        );
    }

    fn handle_client_message(
        &self,
        msg_result: Option<Result<Message, axum::Error>>,
        state: &AppState,
    ) -> bool {
        match msg_result {
            Some(Ok(msg)) => {
                self.connection.handle_client_message(
                    msg,
                    self.connection_id,
                    state.relay_service.as_ref(),
                );
                true
            }
            Some(Err(e)) => {
                warn!("WebSocket error: {}", e);
                false
            }
            None => {
                debug!("WebSocket connection closed by client");
                false
            }
        }
    }

    async fn flush_outbound_batch(
        &mut self,
        received: usize,
        batch: &mut Vec<LocationEvent>,
    ) -> bool {
        if received == 0 {
            // The relay pruned this connection and dropped its sender.
            debug!(
                connection_id = %self.connection_id,
                "Outbound channel closed by relay"
            );
            return false;
        }

        let messages: Vec<WSMessage> = batch.drain(..).map(WSMessage::update_location).collect();
        if let Err(e) = self.connection.send_ws_messages(&messages).await {
            error!(
                connection_id = %self.connection_id,
                "Error sending {} location updates: {}",
                messages.len(),
                e
            );
            return false;
        }
        true
    }

    fn disconnect(&mut self, state: &AppState) {
        if self.lifecycle.disconnect() {
            state.relay_service.on_disconnect(self.connection_id);
            self.outbound_receiver.close();
        }
    }
}
