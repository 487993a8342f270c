use axum::{Router, middleware};
use tower_http::services::{ServeDir, ServeFile};

use crate::incoming::http_axum::middleware::request_id::request_id_middleware;
use geo_relay_application::infrastructure_config::StaticAssetsConfig;

pub trait RouterExt<State> {
    fn with_request_id(self) -> Self;
    fn with_static_assets(self, assets: &StaticAssetsConfig) -> Self;
}

impl<State> RouterExt<State> for Router<State>
where
    State: Clone + Send + Sync + 'static,
{
    fn with_request_id(self) -> Self {
        self.layer(middleware::from_fn(request_id_middleware))
    }

    fn with_static_assets(self, assets: &StaticAssetsConfig) -> Self {
        self.route_service("/", ServeFile::new(&assets.index))
            .fallback_service(ServeDir::new(&assets.dir))
    }
}
