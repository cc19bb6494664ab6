use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};

use newswire_core::AppConfig;

pub async fn run(config: Arc<AppConfig>, addr_override: Option<String>) -> Result<()> {
    let addr_str = addr_override.unwrap_or_else(|| config.server.bind_addr.clone());
    let addr: SocketAddr = addr_str
        .parse()
        .with_context(|| format!("invalid bind address: {}", addr_str))?;

    newswire_server::run_server(addr, config).await
}
