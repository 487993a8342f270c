use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    #[must_use]
    pub fn success_with_data(data: Option<T>) -> Self {
        Self {
            ok: true,
            error: None,
            data,
        }
    }

    #[must_use]
    pub fn error(message: String) -> Self {
        Self {
            ok: false,
            error: Some(message),
            data: None,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    #[cfg_attr(feature = "docs", schema(example = 2))]
    pub connections: usize,
    #[cfg_attr(feature = "docs", schema(example = 2))]
    pub active_sockets: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<usize>,
}

#[cfg(feature = "docs")]
#[derive(Serialize, ToSchema)]
#[schema(
    title = "ApiResponseHealth",
    description = "Standard API response wrapper with success indicator, optional error message, and optional data payload"
)]
pub struct ApiResponseHealth {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<HealthStatus>,
}
