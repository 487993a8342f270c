use dashmap::DashMap;
use std::sync::Arc;

use domain::connection::ConnectionId;
use geo_relay_application::ports::outgoing::{
    connection_registry::ConnectionRegistryPort, connection_sink::DynConnectionSinkPort,
};

#[derive(Default)]
pub struct DashMapConnectionRegistry {
    connections: DashMap<ConnectionId, DynConnectionSinkPort>,
}

impl DashMapConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConnectionRegistryPort for DashMapConnectionRegistry {
    fn insert(&self, id: ConnectionId, sink: DynConnectionSinkPort) {
        self.connections.insert(id, sink);
    }

    fn remove(&self, id: &ConnectionId) -> bool {
        self.connections.remove(id).is_some()
    }

    fn contains(&self, id: &ConnectionId) -> bool {
        self.connections.contains_key(id)
    }

    fn snapshot(&self) -> Vec<(ConnectionId, DynConnectionSinkPort)> {
        self.connections
            .iter()
            .map(|entry| (*entry.key(), Arc::clone(entry.value())))
            .collect()
    }

    fn len(&self) -> usize {
        self.connections.len()
    }
}
