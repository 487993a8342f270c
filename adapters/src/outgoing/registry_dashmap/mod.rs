pub mod connection_registry_dashmap;
