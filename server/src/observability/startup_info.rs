use geo_relay_application::infrastructure_config::{
    Config, StaticAssetsConfig, WebSocketConfig,
};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_endpoint_info(config);
    print_configuration_info(config);
}

fn print_endpoint_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📡 Endpoints:");
    info!("  🌍 Relay WebSocket: ws://{}/ws", config.server_address());
    info!("  ❤️  Health: {}/health", base_url);
    if cfg!(feature = "docs") {
        info!("  📖 Swagger UI: {}/docs", base_url);
    }
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration ({}):", config.environment.env);
    print_websocket_configuration(&config.websocket);
    print_static_assets_configuration(&config.static_assets);
}

fn print_websocket_configuration(websocket: &WebSocketConfig) {
    match websocket.max_connections {
        Some(max) => info!(
            "  📋 WebSocket: {} queued events/connection, max {} connections",
            websocket.connection_buffer_size, max
        ),
        None => info!(
            "  📋 WebSocket: {} queued events/connection, unlimited connections",
            websocket.connection_buffer_size
        ),
    }
}

fn print_static_assets_configuration(assets: &StaticAssetsConfig) {
    info!(
        "  🗂️  Static assets: {} (index: {})",
        assets.dir, assets.index
    );
}
