//! Best-effort client IP lookup.
//!
//! The saved preference state carries the caller's public IP for the audit
//! trail when it can be determined. Lookup failures are swallowed: absence
//! of an IP is acceptable and never blocks a save.

use async_trait::async_trait;
use serde::Deserialize;

/// Default external lookup endpoint.
const IPIFY_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// Resolves the caller's public IP address, if it can.
#[async_trait]
pub trait IpResolver: Send + Sync {
    async fn resolve(&self) -> Option<String>;
}

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// Resolver backed by the ipify HTTP service.
pub struct IpifyResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl IpifyResolver {
    pub fn new() -> Self {
        Self::with_endpoint(IPIFY_ENDPOINT)
    }

    /// Point the resolver at a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for IpifyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IpResolver for IpifyResolver {
    async fn resolve(&self) -> Option<String> {
        let response = match self.client.get(&self.endpoint).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "IP lookup request failed");
                return None;
            }
        };

        match response.json::<IpifyResponse>().await {
            Ok(body) => Some(body.ip),
            Err(err) => {
                tracing::debug!(error = %err, "IP lookup response unparsable");
                None
            }
        }
    }
}

/// Resolver that never finds an IP. For tests and offline hosts.
pub struct NoIpResolver;

#[async_trait]
impl IpResolver for NoIpResolver {
    async fn resolve(&self) -> Option<String> {
        None
    }
}

/// Resolver returning a fixed address. For tests.
pub struct StaticIpResolver(pub String);

#[async_trait]
impl IpResolver for StaticIpResolver {
    async fn resolve(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
