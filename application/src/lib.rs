#[cfg(any(
    feature = "adapters",
    feature = "axum",
    feature = "dashmap",
    feature = "tokio"
))]
compile_error!("application must not depend on adapters/framework crates");

pub mod contracts;
pub mod error;
pub mod infrastructure_config;
pub mod ports;
pub mod relay;
