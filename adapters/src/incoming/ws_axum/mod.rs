pub(crate) mod connection;
pub(crate) mod handler;
pub(crate) mod ip_utils;

pub mod endpoint; // Keep public for router access
pub mod protocol; // Keep public for external API access to types
