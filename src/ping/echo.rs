use std::net::IpAddr;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use rand::random;
use surge_ping::{Client, Config, PingIdentifier, PingSequence, ICMP};
use tokio::time::{timeout, Instant};
use crate::error::{Error, Result};

/// Send and receive timestamps of one echo exchange.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Exchange {
    pub sent: Instant,
    pub rcvd: Instant,
}

impl Exchange {
    pub fn rtt(&self) -> Duration {
        self.rcvd.saturating_duration_since(self.sent)
    }
}

/// A facility able to perform a single ICMP echo exchange.
#[async_trait]
pub trait Echo: Send + Sync {
    async fn echo(&self, addr: IpAddr, seq: u16, payload: &[u8]) -> Result<Exchange>;
}

/// ICMP echo backed by a surge-ping client.
///
/// Each exchange gets its own pinger so that probes may overlap; the
/// client's receive task demultiplexes replies by sequence number.
pub struct Icmp {
    client: Client,
    ident:  u16,
    expiry: Duration,
}

impl Icmp {
    pub fn open(addr: IpAddr, expiry: Duration) -> Result<Self> {
        let config = match addr {
            IpAddr::V4(_) => Config::default(),
            IpAddr::V6(_) => Config::builder().kind(ICMP::V6).build(),
        };

        let client = Client::new(&config)?;
        let ident  = random::<u16>();

        debug!("opened ICMP socket for {} with ident {}", addr, ident);

        Ok(Self { client, ident, expiry })
    }
}

#[async_trait]
impl Echo for Icmp {
    async fn echo(&self, addr: IpAddr, seq: u16, payload: &[u8]) -> Result<Exchange> {
        let mut pinger = self.client.pinger(addr, PingIdentifier(self.ident)).await;
        pinger.timeout(self.expiry);

        let sent  = Instant::now();
        let reply = pinger.ping(PingSequence(seq), payload);

        match timeout(self.expiry, reply).await {
            Ok(r)  => {
                let (_, rtt) = r?;
                Ok(Exchange { sent, rcvd: sent + rtt })
            }
            Err(_) => Err(Error::Timeout),
        }
    }
}
