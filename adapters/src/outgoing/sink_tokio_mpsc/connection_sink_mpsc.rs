use tokio::sync::mpsc::{self, error::TrySendError};

use domain::location::LocationEvent;
use geo_relay_application::ports::outgoing::connection_sink::{ConnectionSinkPort, DeliveryError};

/// Bounded outbound queue feeding one WebSocket writer.
///
/// The relay registry owns the only sender: once the connection is pruned
/// the receiver observes the channel closing and the socket task exits.
pub struct MpscConnectionSink {
    tx: mpsc::Sender<LocationEvent>,
}

impl MpscConnectionSink {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<LocationEvent>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

impl ConnectionSinkPort for MpscConnectionSink {
    fn deliver(&self, event: LocationEvent) -> Result<(), DeliveryError> {
        self.tx.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => DeliveryError::Full,
            TrySendError::Closed(_) => DeliveryError::Closed,
        })
    }
}
