use crate::incoming::http_axum::{dto, handlers};
use crate::incoming::ws_axum::{endpoint, protocol::WSMessage};
use domain::location::LocationEvent;
use dto::responses::{ApiResponseHealth, HealthStatus};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health_check,
        endpoint::websocket_handler,
    ),
    components(
        schemas(
            LocationEvent,
            WSMessage,
            HealthStatus,
            ApiResponseHealth,
        )
    ),
    tags(
        (name = "system", description = "Operational endpoints"),
        (name = "websocket", description = "Real-time location relay")
    ),
    info(
        title = "GeoRelay API",
        description = "Real-time geolocation fan-out relay"
    )
)]
pub struct ApiDoc;
