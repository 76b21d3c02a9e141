use std::time::Duration;

/// A successful probe: its sequence number and round-trip time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Probe {
    pub seq: u64,
    pub rtt: Duration,
}

impl Probe {
    pub fn new(seq: u64, rtt: Duration) -> Self {
        Self { seq, rtt }
    }

    /// Sequence number as carried in the 16-bit ICMP header field.
    pub fn wire(seq: u64) -> u16 {
        seq as u16
    }
}
