use std::net::IpAddr;
use tracing::{debug, info, warn};

use crate::{
    contracts::relay::{BroadcastReport, MessageOutcome},
    ports::{
        incoming::relay::RelayUseCase,
        outgoing::{
            connection_registry::DynConnectionRegistryPort, connection_sink::DynConnectionSinkPort,
        },
    },
};
use domain::{connection::ConnectionId, location::LocationEvent};

/// Fan-out relay: every accepted location is delivered to every registered
/// connection, the originating one included.
pub struct RelayService {
    registry: DynConnectionRegistryPort,
}

impl RelayService {
    pub fn new(registry: DynConnectionRegistryPort) -> Self {
        Self { registry }
    }
}

impl RelayUseCase for RelayService {
    fn on_connect(&self, client_ip: IpAddr, sink: DynConnectionSinkPort) -> ConnectionId {
        let id = ConnectionId::new();
        self.registry.insert(id, sink);
        info!(
            connection_id = %id,
            client_ip = %client_ip,
            connections = self.registry.len(),
            "A user connected"
        );
        id
    }

    fn on_message(&self, origin: ConnectionId, payload: serde_json::Value) -> MessageOutcome {
        match serde_json::from_value::<LocationEvent>(payload) {
            Ok(event) => {
                debug!(connection_id = %origin, location = %event, "Received location");
                MessageOutcome::Broadcast(self.broadcast(event))
            }
            Err(e) => {
                debug!(connection_id = %origin, "Dropping malformed location: {}", e);
                MessageOutcome::Dropped {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn on_disconnect(&self, id: ConnectionId) -> bool {
        let removed = self.registry.remove(&id);
        if removed {
            info!(
                connection_id = %id,
                connections = self.registry.len(),
                "A user disconnected"
            );
        }
        removed
    }

    fn broadcast(&self, event: LocationEvent) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        for (id, sink) in self.registry.snapshot() {
            if !self.registry.contains(&id) {
                report.skipped += 1;
                continue;
            }

            match sink.deliver(event) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    if self.registry.remove(&id) {
                        warn!(connection_id = %id, "Pruning connection after failed delivery: {}", e);
                        report.pruned += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
            }
        }

        debug!(
            delivered = report.delivered,
            pruned = report.pruned,
            skipped = report.skipped,
            "Broadcast location"
        );
        report
    }

    fn connection_count(&self) -> usize {
        self.registry.len()
    }
}
