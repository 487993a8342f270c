use axum::{Router, routing::get};
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

use crate::shared::app_state::AppState;
use crate::{
    incoming::http_axum::{handlers::health::health_check, router_ext::RouterExt},
    incoming::ws_axum::endpoint::websocket_handler,
};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    build_core_routes()
        .with_request_id()
        .with_static_assets(&state.config.static_assets)
}

fn build_core_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ws", get(websocket_handler));

    #[cfg(feature = "docs")]
    {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    #[cfg(not(feature = "docs"))]
    {
        router
    }
}
