use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use geo_relay_application::{
    infrastructure_config::Config, ports::incoming::relay::RelayUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay_service: Arc<dyn RelayUseCase>,
    /// Upgraded sockets, counted from upgrade until the handler task ends.
    pub open_sockets: Arc<AtomicUsize>,
}

impl AppState {
    pub fn new(config: Arc<Config>, relay_service: Arc<dyn RelayUseCase>) -> Self {
        Self {
            config,
            relay_service,
            open_sockets: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn socket_opened(&self) -> usize {
        self.open_sockets.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn socket_closed(&self) -> usize {
        self.open_sockets
            .fetch_sub(1, Ordering::Relaxed)
            .saturating_sub(1)
    }

    pub fn open_socket_count(&self) -> usize {
        self.open_sockets.load(Ordering::Relaxed)
    }

    pub fn has_socket_capacity(&self) -> bool {
        self.config
            .websocket
            .max_connections
            .is_none_or(|max| self.open_socket_count() < max)
    }
}
