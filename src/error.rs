use std::io;
use surge_ping::SurgeError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot resolve {host}: {reason}")]
    Resolution { host: String, reason: String },

    #[error("echo request failed: {0}")]
    Probe(#[from] SurgeError),

    #[error("echo request timed out")]
    Timeout,

    #[error("cannot open ICMP socket: {0}")]
    Socket(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn resolution(host: &str, reason: impl ToString) -> Self {
        Self::Resolution {
            host:   host.to_owned(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Configuration(reason.into())
    }
}
