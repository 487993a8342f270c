use serde::{Deserialize, Serialize};
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use domain::location::LocationEvent;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "WebSocket messages sent from server to client. Every accepted location is rebroadcast to all connected clients, including its sender, as an 'updateLocation' event.",
    example = json!({
        "event": "updateLocation",
        "data": {"latitude": 12.97, "longitude": 77.59, "speed": 1.4}
    })
))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum WSMessage {
    #[serde(rename = "updateLocation")]
    UpdateLocation(LocationEvent),
}

impl WSMessage {
    pub fn update_location(event: LocationEvent) -> Self {
        Self::UpdateLocation(event)
    }
}

/// Messages sent from client to server.
///
/// The payload stays untyped here so that shape validation happens in the
/// relay, where malformed locations are dropped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum ClientMessage {
    #[serde(rename = "locationUpdate", alias = "sendLocation")]
    LocationUpdate(serde_json::Value),
}
