pub mod connection_registry;
pub mod connection_sink;
