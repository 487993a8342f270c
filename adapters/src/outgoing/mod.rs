pub mod registry_dashmap;
pub mod sink_tokio_mpsc;
