use std::io;
use std::net::IpAddr;
use async_trait::async_trait;
use log::debug;
use tokio::net::lookup_host;
use crate::error::{Error, Result};

/// Forward DNS lookup.
#[async_trait]
pub trait Lookup: Send + Sync {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// The system resolver, via `getaddrinfo`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLookup;

#[async_trait]
impl Lookup for SystemLookup {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs = lookup_host((host, 0)).await?;
        Ok(addrs.map(|sa| sa.ip()).collect())
    }
}

/// Resolve `host` to a single address. Literals never reach the lookup.
pub async fn resolve<L: Lookup + ?Sized>(lookup: &L, host: &str) -> Result<IpAddr> {
    if let Ok(addr) = host.parse::<IpAddr>() {
        return Ok(addr);
    }

    let addrs = lookup.lookup(host).await.map_err(|e| {
        Error::resolution(host, e)
    })?;

    debug!("{} resolved to {:?}", host, addrs);

    addrs.into_iter().next().ok_or_else(|| {
        Error::resolution(host, "no addresses found")
    })
}
