use log::warn;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Allowed origins; empty means any origin
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes
    pub max_upload_bytes: usize,
    /// Reject graph files with malformed lines or tokens
    pub strict_parsing: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5000,
            enable_cors: true,
            cors_origins: Vec::new(),
            max_upload_bytes: 1024 * 1024,
            strict_parsing: false,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `ROUTE_COST_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `ROUTE_COST_*` key.
    ///
    /// A value that does not parse keeps the default and logs a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: parse_or("ROUTE_COST_HOST", &lookup, defaults.host),
            port: parse_or("ROUTE_COST_PORT", &lookup, defaults.port),
            enable_cors: parse_or("ROUTE_COST_CORS", &lookup, defaults.enable_cors),
            cors_origins: lookup("ROUTE_COST_CORS_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            max_upload_bytes: parse_or("ROUTE_COST_MAX_UPLOAD_BYTES", &lookup, defaults.max_upload_bytes),
            strict_parsing: parse_or("ROUTE_COST_STRICT", &lookup, defaults.strict_parsing),
        }
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            default
        }),
    }
}
