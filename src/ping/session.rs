use std::fmt;
use std::future::Future;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::time::Instant;
use crate::error::Result;
use crate::stats::{millis, Summary};
use super::{echo::Echo, probe::Probe, series::Series};

/// The host as given and the address it resolved to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Target {
    pub host: String,
    pub addr: IpAddr,
}

impl Target {
    pub fn new(host: &str, addr: IpAddr) -> Self {
        Self { host: host.to_owned(), addr }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.host, self.addr)
    }
}

/// State of one ping run: the echo facility, the target, the sequence
/// counter and the series of recorded round-trip times.
pub struct Session<E> {
    echo:    E,
    target:  Target,
    size:    usize,
    payload: Vec<u8>,
    counter: AtomicU64,
    series:  Series,
    start:   Instant,
}

impl<E: Echo> Session<E> {
    pub fn new(echo: E, target: Target, size: usize) -> Self {
        Self {
            echo:    echo,
            target:  target,
            size:    size,
            payload: vec![0u8; size],
            counter: AtomicU64::new(0),
            series:  Series::default(),
            start:   Instant::now(),
        }
    }

    /// Reserve the next sequence number and send a probe with it. The
    /// number is taken before the returned future is first polled.
    pub fn probe(&self) -> impl Future<Output = Result<Probe>> + '_ {
        let seq = self.reserve();
        self.send(seq)
    }

    pub fn reserve(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub async fn send(&self, seq: u64) -> Result<Probe> {
        let Target { host, addr } = &self.target;

        let exchange = self.echo.echo(*addr, Probe::wire(seq), &self.payload).await?;
        let probe    = Probe::new(seq, exchange.rtt());

        println!("PING {}: {} bytes from {} ({}): {:.3}ms", seq, self.size, host, addr, millis(probe.rtt));

        self.series.record(probe);

        Ok(probe)
    }

    pub fn summary(&self) -> Summary {
        Summary::new(&self.series.millis(), self.start.elapsed())
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn series(&self) -> &Series {
        &self.series
    }
}
