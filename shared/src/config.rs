//! Configuration management for the gateway and agent client.
//!
//! Values are read once at startup and passed into components explicitly:
//! - `FOUNDRY_ENDPOINT` (or `REACT_APP_FOUNDRY_ENDPOINT`) - Optional. Agent endpoint address.
//! - `FOUNDRY_RESPONSE_DELAY_MS` - Optional. Placeholder response delay. Defaults to `1000`.
//! - `GATEWAY_HOST` - Optional. Gateway bind host. Defaults to `0.0.0.0`.
//! - `FUNCTIONS_CUSTOMHANDLER_PORT` / `PORT` - Optional. Gateway port. Defaults to `7071`.
//! - `GATEWAY_ROUTE_PREFIX` - Optional. Route prefix. Defaults to `api`.

use std::env;
use std::time::Duration;

use crate::{Error, Result};

/// Default delay before the placeholder response resolves.
pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(1000);

/// Agent endpoint address. Empty values count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig(Option<String>);

impl EndpointConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(endpoint))
        }
    }

    /// No endpoint configured.
    pub fn absent() -> Self {
        Self(None)
    }

    /// Load from `FOUNDRY_ENDPOINT`, falling back to `REACT_APP_FOUNDRY_ENDPOINT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        lookup("FOUNDRY_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup("REACT_APP_FOUNDRY_ENDPOINT"))
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Agent client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Agent endpoint (may be absent)
    pub endpoint: EndpointConfig,
    /// Fixed delay before the placeholder response resolves
    pub response_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::absent(),
            response_delay: DEFAULT_RESPONSE_DELAY,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let response_delay = match lookup("FOUNDRY_RESPONSE_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    Error::Config(format!("Invalid FOUNDRY_RESPONSE_DELAY_MS '{}': {}", raw, e))
                })?,
            None => DEFAULT_RESPONSE_DELAY,
        };

        Ok(Self {
            endpoint: EndpointConfig::from_lookup(&lookup),
            response_delay,
        })
    }
}

/// Gateway service configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Route prefix applied to every route
    pub route_prefix: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7071,
            route_prefix: "api".to_string(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = match lookup("FUNCTIONS_CUSTOMHANDLER_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("Invalid port '{}': {}", raw, e)))?,
            None => defaults.port,
        };

        let route_prefix = lookup("GATEWAY_ROUTE_PREFIX")
            .map(|p| p.trim_matches('/').to_string())
            .unwrap_or(defaults.route_prefix);

        Ok(Self {
            host: lookup("GATEWAY_HOST").unwrap_or(defaults.host),
            port,
            route_prefix,
        })
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
