use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::incoming::http_axum::dto::responses::ApiResponse;
use geo_relay_application::error::AppError;

pub struct HttpError(pub AppError);

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let (status_code, message) = match app_error {
            AppError::ConnectionLimitReached { .. } => {
                debug!("Client error response generated: {}", app_error);
                (StatusCode::SERVICE_UNAVAILABLE, app_error.to_string())
            }
            AppError::ConfigError { .. } => {
                error!("Server error response generated: {}", app_error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        (status_code, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}
