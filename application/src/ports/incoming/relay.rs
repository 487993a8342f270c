use std::net::IpAddr;

use crate::{
    contracts::relay::{BroadcastReport, MessageOutcome},
    ports::outgoing::connection_sink::DynConnectionSinkPort,
};
use domain::{connection::ConnectionId, location::LocationEvent};

pub trait RelayUseCase: Send + Sync {
    fn on_connect(&self, client_ip: IpAddr, sink: DynConnectionSinkPort) -> ConnectionId;

    fn on_message(&self, origin: ConnectionId, payload: serde_json::Value) -> MessageOutcome;

    fn on_disconnect(&self, id: ConnectionId) -> bool;

    fn broadcast(&self, event: LocationEvent) -> BroadcastReport;

    fn connection_count(&self) -> usize;
}
