use std::future::Future;
use std::net::IpAddr;
use log::debug;
use crate::args::Config;
use crate::error::Result;
use crate::ping::{Echo, Session, Target};
use crate::resolve::{resolve, Lookup};
use crate::schedule;
use crate::stats::Summary;

pub struct Sonar<L> {
    config: Config,
    lookup: L,
}

impl<L: Lookup> Sonar<L> {
    pub fn new(config: Config, lookup: L) -> Self {
        Self { config, lookup }
    }

    /// Resolve the target and open the echo facility for it. Nothing is
    /// opened when resolution fails.
    pub async fn start<E, F>(&self, open: F) -> Result<Session<E>>
    where
        E: Echo,
        F: FnOnce(IpAddr, &Config) -> Result<E>,
    {
        let Config { host, size, .. } = &self.config;

        let addr   = resolve(&self.lookup, host).await?;
        let echo   = open(addr, &self.config)?;
        let target = Target::new(host, addr);

        println!("PING {}", target);

        Ok(Session::new(echo, target, *size))
    }

    /// Probe until `shutdown` completes, then summarize.
    pub async fn run<E, S>(&self, session: &Session<E>, shutdown: S) -> Summary
    where
        E: Echo,
        S: Future<Output = ()>,
    {
        let fired = schedule::run(session, self.config.interval, shutdown).await;
        debug!("{} probes sent to {}", fired, session.target());
        session.summary()
    }
}
