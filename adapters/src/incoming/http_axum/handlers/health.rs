use axum::{Json, extract::State};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseHealth;
use crate::incoming::http_axum::dto::responses::{ApiResponse, HealthStatus};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Relay is running", body = ApiResponseHealth,
         example = json!({
             "ok": true,
             "data": {
                 "connections": 2,
                 "active_sockets": 2
             }
         })
        )
    ),
    tag = "system",
    summary = "Relay health check",
    description = "Reports the number of connections currently registered in the relay and the number of open WebSocket tasks.",
    operation_id = "health_check"
))]
pub async fn health_check(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success_with_data(Some(HealthStatus {
        connections: state.relay_service.connection_count(),
        active_sockets: state.open_socket_count(),
        max_connections: state.config.websocket.max_connections,
    })))
}
