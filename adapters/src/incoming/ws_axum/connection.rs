use axum::extract::ws::{Message, WebSocket};
use futures::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use std::net::IpAddr;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::incoming::ws_axum::protocol::{ClientMessage, WSMessage};
use domain::connection::ConnectionId;
use geo_relay_application::{
    contracts::relay::MessageOutcome, ports::incoming::relay::RelayUseCase,
};

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] axum::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConnectionResult<T> = Result<T, ConnectionError>;

pub struct Connection {
    socket_sender: SplitSink<WebSocket, Message>,
    client_ip: IpAddr,
}

impl Connection {
    pub fn new(socket: WebSocket, client_ip: IpAddr) -> (Self, SplitStream<WebSocket>) {
        let (sender, receiver) = socket.split();
        let connection = Self {
            socket_sender: sender,
            client_ip,
        };
        (connection, receiver)
    }

    pub fn handle_client_message(
        &self,
        msg: Message,
        id: ConnectionId,
        relay: &dyn RelayUseCase,
    ) {
        match msg {
            Message::Text(text) => self.handle_text_message(text.as_str(), id, relay),
            Message::Ping(_) => {
                trace!("Received ping from {}", self.client_ip);
            }
            Message::Pong(_) => {
                trace!("Received pong from {}", self.client_ip);
            }
            Message::Close(_) => {
                debug!("Received close message from {}", self.client_ip);
            }
            Message::Binary(_) => {
                debug!("Ignoring binary message from {}", self.client_ip);
            }
        }
    }

    fn handle_text_message(&self, text: &str, id: ConnectionId, relay: &dyn RelayUseCase) {
        trace!("Received client message: {}", text);

        match serde_json::from_str::<ClientMessage>(text) {
            Ok(ClientMessage::LocationUpdate(payload)) => match relay.on_message(id, payload) {
                MessageOutcome::Broadcast(report) => {
                    debug!(
                        connection_id = %id,
                        recipients = report.recipients(),
                        delivered = report.delivered,
                        pruned = report.pruned,
                        "Relayed location update"
                    );
                }
                MessageOutcome::Dropped { reason } => {
                    warn!(
                        connection_id = %id,
                        client_ip = %self.client_ip,
                        "Dropped location update: {}",
                        reason
                    );
                }
            },
            Err(e) => {
                debug!(
                    connection_id = %id,
                    "Ignoring unrecognized client message: {}",
                    e
                );
            }
        }
    }

    /// Queues every message on the socket and flushes once.
    pub async fn send_ws_messages(&mut self, messages: &[WSMessage]) -> ConnectionResult<()> {
        for msg in messages {
            let json = serde_json::to_string(msg)?;
            self.socket_sender.feed(Message::Text(json.into())).await?;
        }
        self.socket_sender.flush().await?;
        Ok(())
    }

    pub async fn close(&mut self) {
        if let Err(e) = self.socket_sender.close().await {
            debug!("Error closing WebSocket for {}: {}", self.client_ip, e);
        }
    }
}
