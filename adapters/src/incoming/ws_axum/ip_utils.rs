use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// Resolves the address a client is logged under. Proxy headers are only
/// honoured when `trust_forwarded` is set.
pub fn extract_client_ip(
    headers: &HeaderMap,
    socket: Option<SocketAddr>,
    trust_forwarded: bool,
) -> IpAddr {
    let forwarded = trust_forwarded
        .then(|| forwarded_for(headers).or_else(|| real_ip(headers)))
        .flatten();

    forwarded.unwrap_or_else(|| {
        socket.map_or_else(|| IpAddr::from([127, 0, 0, 1]), |addr| addr.ip())
    })
}

fn forwarded_for(headers: &HeaderMap) -> Option<IpAddr> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .next()?
        .trim()
        .parse()
        .ok()
}

fn real_ip(headers: &HeaderMap) -> Option<IpAddr> {
    headers.get(REAL_IP)?.to_str().ok()?.trim().parse().ok()
}
