use std::sync::Arc;

use geo_relay_adapters::outgoing::registry_dashmap::connection_registry_dashmap::DashMapConnectionRegistry;
use geo_relay_adapters::shared::app_state::AppState as AdaptersAppState;
use geo_relay_application::{
    infrastructure_config::Config,
    ports::{
        incoming::relay::RelayUseCase, outgoing::connection_registry::DynConnectionRegistryPort,
    },
    relay::service::RelayService,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub relay_service: Arc<dyn RelayUseCase>,
    adapters_state: AdaptersAppState,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        let registry: DynConnectionRegistryPort = Arc::new(DashMapConnectionRegistry::new());
        let relay_service: Arc<dyn RelayUseCase> =
            Arc::new(RelayService::new(registry));

        let adapters_state = AdaptersAppState::new(Arc::clone(&config), Arc::clone(&relay_service));

        Self {
            config,
            relay_service,
            adapters_state,
        }
    }

    pub fn to_adapters_state(&self) -> AdaptersAppState {
        self.adapters_state.clone()
    }
}
