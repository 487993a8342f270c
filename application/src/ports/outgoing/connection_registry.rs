use domain::connection::ConnectionId;
use std::sync::Arc;

use super::connection_sink::DynConnectionSinkPort;

/// The authoritative set of live connections.
///
/// Mutations are serialized per entry; `snapshot` returns a copy that stays
/// valid after the registry changes.
pub trait ConnectionRegistryPort: Send + Sync {
    fn insert(&self, id: ConnectionId, sink: DynConnectionSinkPort);

    fn remove(&self, id: &ConnectionId) -> bool;

    fn contains(&self, id: &ConnectionId) -> bool;

    fn snapshot(&self) -> Vec<(ConnectionId, DynConnectionSinkPort)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type DynConnectionRegistryPort = Arc<dyn ConnectionRegistryPort>;
