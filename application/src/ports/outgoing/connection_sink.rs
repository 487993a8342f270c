use domain::location::LocationEvent;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("connection outbound channel is closed")]
    Closed,

    #[error("connection outbound buffer is full")]
    Full,
}

/// Outbound half of one client connection.
///
/// Implementations must return immediately: a receiver that cannot take the
/// event right now reports `Full` instead of waiting.
pub trait ConnectionSinkPort: Send + Sync {
    fn deliver(&self, event: LocationEvent) -> Result<(), DeliveryError>;
}

pub type DynConnectionSinkPort = Arc<dyn ConnectionSinkPort>;
