pub mod connection_sink_mpsc;
