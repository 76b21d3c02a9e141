use std::collections::BTreeMap;
use std::time::Duration;
use parking_lot::Mutex;
use super::probe::Probe;

/// Round-trip times of successful probes, ordered by sequence number.
/// Failed probes leave no entry.
#[derive(Debug, Default)]
pub struct Series(Mutex<BTreeMap<u64, Duration>>);

impl Series {
    pub fn record(&self, probe: Probe) {
        self.0.lock().insert(probe.seq, probe.rtt);
    }

    pub fn len(&self) -> usize {
        self.0.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    pub fn probes(&self) -> Vec<Probe> {
        self.0.lock().iter().map(|(&seq, &rtt)| Probe::new(seq, rtt)).collect()
    }

    /// Snapshot of recorded round-trip times in milliseconds.
    pub fn millis(&self) -> Vec<f64> {
        self.0.lock().values().map(|rtt| rtt.as_secs_f64() * 1000.0).collect()
    }
}
