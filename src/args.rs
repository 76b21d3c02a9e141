use std::convert::TryFrom;
use std::time::Duration;
use gumdrop::Options;
use crate::error::{Error, Result};

pub const MAX_PACKET_SIZE: usize = 65500;

#[derive(Debug, Options)]
pub struct Args {
    #[options(help = "print help message")]
    pub help:        bool,
    #[options(long = "packetSize", default = "16", meta = "BYTES", help = "ICMP payload size")]
    pub packet_size: usize,
    #[options(default = "1000", meta = "MS", help = "milliseconds between probes")]
    pub interval:    u64,
    #[options(default = "2000", meta = "MS", help = "milliseconds to wait for each reply")]
    pub timeout:     u64,
    #[options(free, required, help = "hostname or IP address to ping")]
    pub host:        String,
}

/// Validated run configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host:     String,
    pub size:     usize,
    pub interval: Duration,
    pub timeout:  Duration,
}

impl Config {
    pub fn new(host: &str, size: usize, interval: Duration, timeout: Duration) -> Result<Self> {
        let host = host.trim();

        if host.is_empty() {
            return Err(Error::config("host must not be empty"));
        }

        if size > MAX_PACKET_SIZE {
            return Err(Error::config(format!("packet size {} exceeds {}", size, MAX_PACKET_SIZE)));
        }

        if interval.is_zero() {
            return Err(Error::config("interval must be positive"));
        }

        if timeout.is_zero() {
            return Err(Error::config("timeout must be positive"));
        }

        Ok(Self { host: host.to_owned(), size, interval, timeout })
    }
}

impl TryFrom<Args> for Config {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let Args { packet_size, interval, timeout, host, .. } = args;

        let interval = Duration::from_millis(interval);
        let timeout  = Duration::from_millis(timeout);

        Config::new(&host, packet_size, interval, timeout)
    }
}
