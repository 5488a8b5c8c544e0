/**
 * Client IP Resolution
 *
 * Resolves the address a request originated from, looking through common
 * reverse-proxy headers before falling back to the transport peer address.
 *
 * # Precedence
 *
 * 1. First entry of `x-forwarded-for`
 * 2. `x-real-ip`
 * 3. Transport-level peer address
 *
 * Header values are trusted as-is; this assumes the usual deployment where
 * the proxy strips client-supplied forwarding headers.
 */

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Resolve the client IP for a request
///
/// # Arguments
/// * `headers` - Request headers
/// * `peer` - Transport-level peer address, when known
///
/// # Returns
/// The resolved address as a string, or `None` when nothing is available
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|h| h.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return Some(first.to_string());
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|h| h.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn peer() -> Option<SocketAddr> {
        Some("10.0.0.1:54321".parse().unwrap())
    }

    #[test]
    fn test_forwarded_for_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", "203.0.113.7, 70.41.3.18".parse().unwrap());
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());

        assert_eq!(
            resolve_client_ip(&headers, peer()),
            Some("203.0.113.7".to_string())
        );
    }

    #[test]
    fn test_real_ip_used_when_no_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", "198.51.100.2".parse().unwrap());

        assert_eq!(
            resolve_client_ip(&headers, peer()),
            Some("198.51.100.2".to_string())
        );
    }

    #[test]
    fn test_peer_address_is_the_fallback() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_client_ip(&headers, peer()), Some("10.0.0.1".to_string()));
    }

    #[test]
    fn test_nothing_available() {
        let headers = HeaderMap::new();
        assert_eq!(resolve_client_ip(&headers, None), None);
    }

    #[test]
    fn test_forwarded_for_entries_are_trimmed() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", " 203.0.113.7 ,70.41.3.18".parse().unwrap());

        assert_eq!(
            resolve_client_ip(&headers, None),
            Some("203.0.113.7".to_string())
        );
    }
}
