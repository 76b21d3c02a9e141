use std::future::Future;
use std::time::Duration;
use futures::{pin_mut, FutureExt, StreamExt};
use futures::stream::FuturesUnordered;
use log::{debug, warn};
use tokio::time::{interval_at, Instant};
use crate::ping::{Echo, Session};

/// Probe the session's target every `period` until `shutdown` completes.
///
/// The first probe goes out one period after the call. Probes are not
/// awaited before the next tick, so slow replies overlap; whatever is
/// still in flight at shutdown is dropped. Returns the number of probes
/// fired.
pub async fn run<E, S>(session: &Session<E>, period: Duration, shutdown: S) -> u64
where
    E: Echo,
    S: Future<Output = ()>,
{
    let mut ticks    = interval_at(Instant::now() + period, period);
    let mut inflight = FuturesUnordered::new();
    let mut fired    = 0;

    pin_mut!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => break,

            _ = ticks.tick() => {
                let seq = session.reserve();
                inflight.push(session.send(seq).map(move |result| (seq, result)));
                fired += 1;
            }

            Some((seq, result)) = inflight.next(), if !inflight.is_empty() => {
                if let Err(e) = result {
                    warn!("probe {} to {} failed: {}", seq, session.target(), e);
                }
            }
        }
    }

    debug!("stopped after {} probes, abandoned {} in flight", fired, inflight.len());

    fired
}
