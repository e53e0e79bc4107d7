//! HTTP server settings.

use crate::errors::{Error, Result};
use std::net::SocketAddr;

/// Address the receipt server binds to when `BIND_ADDR` is not set.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Reads `BIND_ADDR` from the environment, falling back to [`DEFAULT_BIND_ADDR`].
///
/// # Errors
/// Returns `Error::Config` if the value is not a valid socket address.
pub fn get_bind_addr() -> Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    parse_bind_addr(&raw)
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim().parse().map_err(|e| Error::Config {
        message: format!("Invalid BIND_ADDR '{raw}': {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_addr() {
        let addr = parse_bind_addr(DEFAULT_BIND_ADDR).ok();
        assert_eq!(addr.map(|a| a.port()), Some(3000));
        assert!(matches!(parse_bind_addr("localhost"), Err(Error::Config { .. })));
    }
}
